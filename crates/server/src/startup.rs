use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, AppState};
use service::{blogs::BlogService, proposals::ProposalService, seed, store::EntityStore};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8081);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Build the application state with the sample content the site boots with.
/// The stores live for the process lifetime and reset on restart.
pub fn seeded_state() -> AppState {
    AppState {
        blogs: BlogService::new(EntityStore::seeded(seed::sample_posts())),
        proposals: ProposalService::new(EntityStore::seeded(seed::sample_proposals())),
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let state = seeded_state();
    let cors = build_cors();
    let app: Router = routes::build_router(state, cors);

    let addr = load_bind_addr()?;
    info!(%addr, "starting back-office server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
