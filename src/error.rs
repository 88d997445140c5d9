// HTTP API error types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::auth::AuthError;
use crate::store::StoreError;

/// HTTP API error with appropriate status codes and client-safe messages.
///
/// Authentication failures deliberately carry no detail: a login failure is
/// always "Invalid credentials" and a gate failure is always "Invalid token"
/// (or "No token provided" when the header itself is absent). The real cause
/// is logged server-side at the conversion points below.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),
    Validation(String),

    // 401 Unauthorized
    InvalidCredentials,
    Unauthenticated { missing_token: bool },

    // 404 Not Found
    NotFound(String),

    // 409 Conflict
    Conflict(String),

    // 500 Internal Server Error
    Internal(String),

    // 502 Bad Gateway (external collaborator issues)
    BadGateway(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Client-safe message. Never distinguishes which authentication check
    /// failed beyond the presence of the header itself.
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::Validation(msg) => msg,
            ApiError::InvalidCredentials => "Invalid credentials",
            ApiError::Unauthenticated { missing_token: true } => "No token provided",
            ApiError::Unauthenticated { missing_token: false } => "Invalid token",
            ApiError::NotFound(msg) => msg,
            ApiError::Conflict(msg) => msg,
            ApiError::Internal(msg) => msg,
            ApiError::BadGateway(msg) => msg,
            ApiError::ServiceUnavailable(msg) => msg,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "success": false,
            "message": self.message(),
        })
    }
}

// Static constructor methods
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn missing_token() -> Self {
        ApiError::Unauthenticated { missing_token: true }
    }

    pub fn invalid_token() -> Self {
        ApiError::Unauthenticated { missing_token: false }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn internal() -> Self {
        ApiError::Internal("An error occurred while processing your request".to_string())
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        ApiError::BadGateway(message.into())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(msg) => ApiError::not_found(msg),
            StoreError::Duplicate(msg) => ApiError::conflict(msg),
            StoreError::Sqlx(sqlx_err) => {
                // Log the real error but return a generic message
                tracing::error!("database error: {}", sqlx_err);
                ApiError::internal()
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        tracing::error!("auth subsystem error: {}", err);
        ApiError::internal()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_failures_map_to_401_with_generic_messages() {
        assert_eq!(ApiError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::InvalidCredentials.message(), "Invalid credentials");
        assert_eq!(ApiError::missing_token().message(), "No token provided");
        assert_eq!(ApiError::invalid_token().message(), "Invalid token");
        assert_eq!(ApiError::invalid_token().status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn validation_is_400_not_401() {
        let err = ApiError::validation("title is required");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_json()["success"], false);
        assert_eq!(err.to_json()["message"], "title is required");
    }

    #[test]
    fn store_not_found_maps_to_404() {
        let err = ApiError::from(StoreError::NotFound("project not found".to_string()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
