use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::handlers::validate;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::store::Project;

#[derive(Debug, Deserialize)]
pub struct ProjectPayload {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl ProjectPayload {
    fn validate(&self) -> Result<(), ApiError> {
        validate::non_empty("title", &self.title)?;
        validate::max_len("title", &self.title, 200)?;
        validate::non_empty("description", &self.description)?;
        for (field, value) in [
            ("image_url", &self.image_url),
            ("github_url", &self.github_url),
            ("live_url", &self.live_url),
        ] {
            if let Some(url) = value {
                validate::http_url(field, url)?;
            }
        }
        Ok(())
    }

    fn into_model(self, id: Uuid, created_at: DateTime<Utc>) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            technologies: self.technologies,
            image_url: self.image_url,
            github_url: self.github_url,
            live_url: self.live_url,
            featured: self.featured,
            created_at,
            updated_at: Utc::now(),
        }
    }
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ProjectPayload>,
) -> ApiResult<Value> {
    payload.validate()?;
    let project = payload.into_model(Uuid::new_v4(), Utc::now());
    let created = state.store.insert_project(project).await?;
    Ok(ApiResponse::created(json!({ "data": created })))
}

/// PUT /api/projects/:id - full replacement; creation timestamp survives.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProjectPayload>,
) -> ApiResult<Value> {
    payload.validate()?;
    let existing = state
        .store
        .project(id)
        .await?
        .ok_or_else(|| ApiError::not_found("project not found"))?;

    let updated = state
        .store
        .update_project(payload.into_model(existing.id, existing.created_at))
        .await?;
    Ok(ApiResponse::success(json!({ "data": updated })))
}

/// DELETE /api/projects/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Value> {
    state.store.delete_project(id).await?;
    Ok(ApiResponse::success(json!({})))
}
