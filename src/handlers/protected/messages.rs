// Admin inbox for contact-form submissions. Creation is public (see
// handlers::public::messages); everything here sits behind the gate.
use axum::extract::{Path, State};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/messages - full inbox, newest first.
pub async fn list(State(state): State<AppState>) -> ApiResult<Value> {
    let messages = state.store.messages().await?;
    Ok(ApiResponse::success(json!({ "data": messages })))
}

/// PUT /api/messages/:id/read
pub async fn mark_read(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Value> {
    let message = state.store.mark_message_read(id).await?;
    Ok(ApiResponse::success(json!({ "data": message })))
}

/// DELETE /api/messages/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Value> {
    state.store.delete_message(id).await?;
    Ok(ApiResponse::success(json!({})))
}
