use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DeleteUploadRequest {
    pub url: String,
}

/// POST /api/uploads - multipart upload; the first `file` field wins.
/// Returns the public URL the stored file is reachable under.
pub async fn upload(State(state): State<AppState>, mut multipart: Multipart) -> ApiResult<Value> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::validation(format!("invalid multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload.bin").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::validation(format!("failed to read upload: {}", e)))?;

        if bytes.is_empty() {
            return Err(ApiError::validation("uploaded file is empty"));
        }

        let url = state.files.store(&filename, &bytes).await?;
        return Ok(ApiResponse::created(json!({ "url": url })));
    }

    Err(ApiError::validation("multipart field 'file' is required"))
}

/// DELETE /api/uploads - body `{ "url": ... }`, deletes the stored file.
pub async fn delete(
    State(state): State<AppState>,
    Json(payload): Json<DeleteUploadRequest>,
) -> ApiResult<Value> {
    state.files.remove(&payload.url).await?;
    Ok(ApiResponse::success(json!({})))
}
