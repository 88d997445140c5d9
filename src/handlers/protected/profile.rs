// Singleton updates for the about block and public contact details.
use std::collections::HashMap;

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::handlers::validate;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::store::{AboutInfo, ContactInfo};

#[derive(Debug, Deserialize)]
pub struct AboutPayload {
    pub headline: String,
    pub bio: String,
    pub avatar_url: Option<String>,
    pub resume_url: Option<String>,
}

impl AboutPayload {
    fn validate(&self) -> Result<(), ApiError> {
        validate::non_empty("headline", &self.headline)?;
        validate::max_len("headline", &self.headline, 200)?;
        validate::non_empty("bio", &self.bio)?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct ContactPayload {
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub socials: HashMap<String, String>,
}

impl ContactPayload {
    fn validate(&self) -> Result<(), ApiError> {
        validate::email_format("email", &self.email)?;
        for (label, url) in &self.socials {
            validate::non_empty("social label", label)?;
            validate::http_url(label, url)?;
        }
        Ok(())
    }
}

/// PUT /api/about - upsert; the first write creates the singleton.
pub async fn put_about(
    State(state): State<AppState>,
    Json(payload): Json<AboutPayload>,
) -> ApiResult<Value> {
    payload.validate()?;
    let stored = state
        .store
        .put_about(AboutInfo {
            headline: payload.headline,
            bio: payload.bio,
            avatar_url: payload.avatar_url,
            resume_url: payload.resume_url,
            updated_at: Utc::now(),
        })
        .await?;
    Ok(ApiResponse::success(json!({ "data": stored })))
}

/// PUT /api/contact-info - upsert; the first write creates the singleton.
pub async fn put_contact_info(
    State(state): State<AppState>,
    Json(payload): Json<ContactPayload>,
) -> ApiResult<Value> {
    payload.validate()?;
    let stored = state
        .store
        .put_contact_info(ContactInfo {
            email: payload.email,
            phone: payload.phone,
            location: payload.location,
            socials: sqlx::types::Json(payload.socials),
            updated_at: Utc::now(),
        })
        .await?;
    Ok(ApiResponse::success(json!({ "data": stored })))
}
