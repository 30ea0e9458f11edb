use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use models::blog::{BlogPatch, BlogPost, BlogStats, CreateBlogPost};

use crate::errors::ApiError;
use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub published: Option<String>,
}

/// `GET /api/blogs?published=true` filters to published posts; any other
/// value (or no query) returns everything. The admin UI sends the raw
/// string, so the comparison is against `"true"` rather than a parsed bool.
pub async fn list(State(state): State<AppState>, Query(q): Query<ListQuery>) -> Json<Vec<BlogPost>> {
    let published_only = q.published.as_deref() == Some("true");
    let posts = state.blogs.list(published_only).await;
    info!(count = posts.len(), published_only, "list blog posts");
    Json(posts)
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<BlogPost>, ApiError> {
    let post = state.blogs.get(id).await?;
    Ok(Json(post))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBlogPost>,
) -> (StatusCode, Json<BlogPost>) {
    let post = state.blogs.create(input).await;
    info!(id = post.id, title = %post.title, status = ?post.status, "created blog post");
    (StatusCode::CREATED, Json(post))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(patch): Json<BlogPatch>,
) -> Result<Json<BlogPost>, ApiError> {
    let post = state.blogs.update(id, patch).await?;
    info!(id, "updated blog post");
    Ok(Json(post))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.blogs.delete(id).await?;
    info!(id, "deleted blog post");
    Ok(Json(serde_json::json!({ "message": "Blog post deleted" })))
}

pub async fn stats(State(state): State<AppState>) -> Json<BlogStats> {
    Json(state.blogs.stats().await)
}
