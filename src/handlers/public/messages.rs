use axum::{extract::State, Json};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::handlers::validate;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::store::Message;

#[derive(Debug, Deserialize)]
pub struct MessagePayload {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub body: String,
}

impl MessagePayload {
    fn validate(&self) -> Result<(), ApiError> {
        validate::non_empty("name", &self.name)?;
        validate::max_len("name", &self.name, 120)?;
        validate::email_format("email", &self.email)?;
        if let Some(subject) = &self.subject {
            validate::max_len("subject", subject, 200)?;
        }
        validate::non_empty("body", &self.body)?;
        validate::max_len("body", &self.body, 5000)?;
        Ok(())
    }
}

/// POST /api/messages - contact-form submission. Public by design; the
/// notifier side effect is best-effort and never blocks the response with a
/// delivery error.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<MessagePayload>,
) -> ApiResult<Value> {
    payload.validate()?;

    let message = state
        .store
        .insert_message(Message {
            id: Uuid::new_v4(),
            name: payload.name,
            email: payload.email,
            subject: payload.subject,
            body: payload.body,
            read: false,
            created_at: Utc::now(),
        })
        .await?;

    state.notifier.notify(&message).await;

    Ok(ApiResponse::created(json!({ "data": message })))
}
