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
use crate::store::Experience;

#[derive(Debug, Deserialize)]
pub struct ExperiencePayload {
    pub role: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub summary: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl ExperiencePayload {
    fn validate(&self) -> Result<(), ApiError> {
        validate::non_empty("role", &self.role)?;
        validate::non_empty("company", &self.company)?;
        validate::non_empty("summary", &self.summary)?;
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(ApiError::validation("end_date must not precede start_date"));
            }
        }
        Ok(())
    }

    fn into_model(self, id: Uuid, created_at: DateTime<Utc>) -> Experience {
        Experience {
            id,
            role: self.role,
            company: self.company,
            location: self.location,
            start_date: self.start_date,
            end_date: self.end_date,
            summary: self.summary,
            technologies: self.technologies,
            created_at,
        }
    }
}

/// POST /api/experience
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ExperiencePayload>,
) -> ApiResult<Value> {
    payload.validate()?;
    let created = state
        .store
        .insert_experience(payload.into_model(Uuid::new_v4(), Utc::now()))
        .await?;
    Ok(ApiResponse::created(json!({ "data": created })))
}

/// PUT /api/experience/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ExperiencePayload>,
) -> ApiResult<Value> {
    payload.validate()?;
    let existing = state
        .store
        .experience(id)
        .await?
        .ok_or_else(|| ApiError::not_found("experience entry not found"))?;

    let updated = state
        .store
        .update_experience(payload.into_model(existing.id, existing.created_at))
        .await?;
    Ok(ApiResponse::success(json!({ "data": updated })))
}

/// DELETE /api/experience/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Value> {
    state.store.delete_experience(id).await?;
    Ok(ApiResponse::success(json!({})))
}
