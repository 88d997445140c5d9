use axum::Extension;
use serde_json::{json, Value};

use crate::middleware::{AdminIdentity, ApiResponse, ApiResult};
use crate::store::AdminProfile;

/// GET /api/auth/me - profile of the authenticated administrator.
///
/// The gate already resolved the identity from the store, so this is a pure
/// echo; repeated calls with the same token return the same profile until
/// the token expires.
pub async fn me(Extension(identity): Extension<AdminIdentity>) -> ApiResult<Value> {
    let profile = AdminProfile {
        id: identity.id,
        username: identity.username,
        email: identity.email,
        github_username: identity.github_username,
    };
    Ok(ApiResponse::success(json!({ "admin": profile })))
}
