use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::password;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::store::AdminProfile;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /api/auth/login - verify credentials and mint a session token.
///
/// Unknown username and wrong password produce byte-identical responses; the
/// unknown-username path still pays for one hash verification so the two are
/// not trivially distinguishable by timing either.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Value> {
    let admin = match state.store.admin_by_username(&payload.username).await? {
        Some(admin) => admin,
        None => {
            password::verify_dummy(payload.password).await;
            return Err(ApiError::InvalidCredentials);
        }
    };

    let verified =
        password::verify_password(payload.password, admin.password_hash.clone()).await?;
    if !verified {
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.issuer.issue(admin.id)?;
    tracing::debug!(admin = %admin.username, "login succeeded");

    Ok(ApiResponse::success(json!({
        "token": token,
        "admin": AdminProfile::from(&admin),
    })))
}
