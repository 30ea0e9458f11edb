use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use models::proposal::{CreateProposal, Proposal, ProposalPatch, ProposalStats};

use crate::errors::ApiError;
use crate::routes::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Vec<Proposal>> {
    let proposals = state.proposals.list().await;
    info!(count = proposals.len(), "list proposals");
    Json(proposals)
}

/// Public submission endpoint from the site's contact flow.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProposal>,
) -> (StatusCode, Json<Proposal>) {
    let proposal = state.proposals.create(input).await;
    info!(id = proposal.id, business_type = %proposal.business_type, "created proposal");
    (StatusCode::CREATED, Json(proposal))
}

/// Administrative update; in practice a status transition.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(patch): Json<ProposalPatch>,
) -> Result<Json<Proposal>, ApiError> {
    let proposal = state.proposals.update(id, patch).await?;
    info!(id, status = ?proposal.status, "updated proposal");
    Ok(Json(proposal))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.proposals.delete(id).await?;
    info!(id, "deleted proposal");
    Ok(Json(serde_json::json!({ "message": "Proposal deleted" })))
}

pub async fn stats(State(state): State<AppState>) -> Json<ProposalStats> {
    Json(state.proposals.stats().await)
}
