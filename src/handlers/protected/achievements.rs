use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::handlers::validate;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::store::Achievement;

#[derive(Debug, Deserialize)]
pub struct AchievementPayload {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub link: Option<String>,
}

impl AchievementPayload {
    fn validate(&self) -> Result<(), ApiError> {
        validate::non_empty("title", &self.title)?;
        validate::max_len("title", &self.title, 200)?;
        validate::non_empty("description", &self.description)?;
        if let Some(link) = &self.link {
            validate::http_url("link", link)?;
        }
        Ok(())
    }

    fn into_model(self, id: Uuid, created_at: DateTime<Utc>) -> Achievement {
        Achievement {
            id,
            title: self.title,
            description: self.description,
            date: self.date,
            link: self.link,
            created_at,
        }
    }
}

/// POST /api/achievements
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<AchievementPayload>,
) -> ApiResult<Value> {
    payload.validate()?;
    let created = state
        .store
        .insert_achievement(payload.into_model(Uuid::new_v4(), Utc::now()))
        .await?;
    Ok(ApiResponse::created(json!({ "data": created })))
}

/// PUT /api/achievements/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AchievementPayload>,
) -> ApiResult<Value> {
    payload.validate()?;
    let existing = state
        .store
        .achievement(id)
        .await?
        .ok_or_else(|| ApiError::not_found("achievement not found"))?;

    let updated = state
        .store
        .update_achievement(payload.into_model(existing.id, existing.created_at))
        .await?;
    Ok(ApiResponse::success(json!({ "data": updated })))
}

/// DELETE /api/achievements/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Value> {
    state.store.delete_achievement(id).await?;
    Ok(ApiResponse::success(json!({})))
}
