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
use crate::store::Skill;

#[derive(Debug, Deserialize)]
pub struct SkillPayload {
    pub name: String,
    pub category: String,
    pub proficiency: i32,
}

impl SkillPayload {
    fn validate(&self) -> Result<(), ApiError> {
        validate::non_empty("name", &self.name)?;
        validate::max_len("name", &self.name, 100)?;
        validate::non_empty("category", &self.category)?;
        validate::max_len("category", &self.category, 100)?;
        validate::within("proficiency", self.proficiency, 0, 100)?;
        Ok(())
    }

    fn into_model(self, id: Uuid, created_at: DateTime<Utc>) -> Skill {
        Skill {
            id,
            name: self.name,
            category: self.category,
            proficiency: self.proficiency,
            created_at,
        }
    }
}

/// POST /api/skills
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<SkillPayload>,
) -> ApiResult<Value> {
    payload.validate()?;
    let created = state
        .store
        .insert_skill(payload.into_model(Uuid::new_v4(), Utc::now()))
        .await?;
    Ok(ApiResponse::created(json!({ "data": created })))
}

/// PUT /api/skills/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SkillPayload>,
) -> ApiResult<Value> {
    payload.validate()?;
    let existing = state
        .store
        .skill(id)
        .await?
        .ok_or_else(|| ApiError::not_found("skill not found"))?;

    let updated = state
        .store
        .update_skill(payload.into_model(existing.id, existing.created_at))
        .await?;
    Ok(ApiResponse::success(json!({ "data": updated })))
}

/// DELETE /api/skills/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Value> {
    state.store.delete_skill(id).await?;
    Ok(ApiResponse::success(json!({})))
}
