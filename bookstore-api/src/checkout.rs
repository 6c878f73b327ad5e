use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    routing::post,
    Json, Router,
};
use bookstore_core::Decision;
use bookstore_order::validate_request;

use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/checkout", post(checkout))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /checkout
/// Validate the order, fan it out to the collaborators, return the decision
async fn checkout(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Decision>, AppError> {
    tracing::info!("/checkout request received");
    let body = body?;

    // 1. Reject incomplete orders before any collaborator is called
    let order = validate_request(&body)?;

    // 2. Dispatch and aggregate
    let decision = state.orchestrator.checkout(order).await?;

    Ok(Json(decision))
}
