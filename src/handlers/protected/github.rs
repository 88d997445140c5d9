use axum::{extract::State, Extension};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::{AdminIdentity, ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/github/repos - list the authenticated admin's public
/// repositories for the import view. The username comes off the resolved
/// identity, not the request.
pub async fn repos(
    State(state): State<AppState>,
    Extension(identity): Extension<AdminIdentity>,
) -> ApiResult<Value> {
    let username = identity.github_username.ok_or_else(|| {
        ApiError::bad_request("administrator has no GitHub username configured")
    })?;

    let repos = state.github.list_repos(&username).await?;
    Ok(ApiResponse::success(json!({ "data": repos })))
}
