// Public read surface: everything the portfolio site renders without
// authentication.
use axum::extract::{Path, State};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/projects
pub async fn projects(State(state): State<AppState>) -> ApiResult<Value> {
    let projects = state.store.projects().await?;
    Ok(ApiResponse::success(json!({ "data": projects })))
}

/// GET /api/projects/:id
pub async fn project(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Value> {
    let project = state
        .store
        .project(id)
        .await?
        .ok_or_else(|| ApiError::not_found("project not found"))?;
    Ok(ApiResponse::success(json!({ "data": project })))
}

/// GET /api/skills
pub async fn skills(State(state): State<AppState>) -> ApiResult<Value> {
    let skills = state.store.skills().await?;
    Ok(ApiResponse::success(json!({ "data": skills })))
}

/// GET /api/experience
pub async fn experiences(State(state): State<AppState>) -> ApiResult<Value> {
    let experiences = state.store.experiences().await?;
    Ok(ApiResponse::success(json!({ "data": experiences })))
}

/// GET /api/achievements
pub async fn achievements(State(state): State<AppState>) -> ApiResult<Value> {
    let achievements = state.store.achievements().await?;
    Ok(ApiResponse::success(json!({ "data": achievements })))
}

/// GET /api/about - 404 until the singleton is first written.
pub async fn about(State(state): State<AppState>) -> ApiResult<Value> {
    let about = state
        .store
        .about()
        .await?
        .ok_or_else(|| ApiError::not_found("about info not set"))?;
    Ok(ApiResponse::success(json!({ "data": about })))
}

/// GET /api/contact-info - 404 until the singleton is first written.
pub async fn contact_info(State(state): State<AppState>) -> ApiResult<Value> {
    let info = state
        .store
        .contact_info()
        .await?
        .ok_or_else(|| ApiError::not_found("contact info not set"))?;
    Ok(ApiResponse::success(json!({ "data": info })))
}
