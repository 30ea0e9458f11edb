use std::sync::Arc;

use axum::{
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::{blogs::ContentStore, proposals::LeadStore};

pub mod blogs;
pub mod proposals;

/// Shared handler state: the two services behind their store seams,
/// constructed once at startup and injected (no module-level singletons).
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn ContentStore>,
    pub proposals: Arc<dyn LeadStore>,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: static front end, health, and the
/// blog/proposal API.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let static_dir = ServeDir::new("frontend").fallback(ServeFile::new("frontend/index.html"));

    // Public routes; anything unmatched falls back to the static front end
    let public = Router::new()
        .route("/health", get(health))
        .fallback_service(static_dir);

    // Content & lead management API. The literal `stats` segment must be
    // registered next to `:id`; axum prefers static segments, so
    // `/api/blogs/stats` is never parsed as an id.
    let api = Router::new()
        .route("/api/blogs", get(blogs::list).post(blogs::create))
        .route("/api/blogs/stats", get(blogs::stats))
        .route(
            "/api/blogs/:id",
            get(blogs::get).put(blogs::update).delete(blogs::delete),
        )
        .route("/api/proposals", get(proposals::list).post(proposals::create))
        .route("/api/proposals/stats", get(proposals::stats))
        .route(
            "/api/proposals/:id",
            axum::routing::put(proposals::update).delete(proposals::delete),
        )
        .with_state(state);

    public
        .merge(api)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
