use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::Admin;

/// Authenticated administrator context, attached to request extensions by the
/// gate. Handlers read it; none of them perform any further authorization
/// (single-admin system, all-or-nothing).
#[derive(Clone, Debug)]
pub struct AdminIdentity {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub github_username: Option<String>,
}

impl From<Admin> for AdminIdentity {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            username: admin.username,
            email: admin.email,
            github_username: admin.github_username,
        }
    }
}

/// The auth gate. Classifies each request independently:
/// no extractable bearer token -> 401 "No token provided"; bad signature,
/// expired, or an identifier that no longer resolves to an administrator ->
/// 401 "Invalid token". On success the wrapped handler runs with the resolved
/// identity attached; on failure it never runs, so no protected side effect
/// can occur unauthenticated.
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers()).ok_or_else(ApiError::missing_token)?;

    let claims = state.issuer.verify(&token).map_err(|_| {
        tracing::debug!("rejected bearer token");
        ApiError::invalid_token()
    })?;

    // The token must still resolve to a live administrator record
    let admin = state
        .store
        .admin_by_id(claims.sub)
        .await?
        .ok_or_else(ApiError::invalid_token)?;

    request.extensions_mut().insert(AdminIdentity::from(admin));

    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}
