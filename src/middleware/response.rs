use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::{json, Value};

/// Wrapper for API responses that adds the `success: true` envelope.
///
/// Object payloads are flattened so their fields sit next to `success` at the
/// top level (the login response is `{ success, token, admin }`, not nested);
/// anything else is wrapped under `data`.
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub status_code: Option<StatusCode>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Successful response with default 200 status.
    pub fn success(data: T) -> Self {
        Self {
            data,
            status_code: None,
        }
    }

    pub fn with_status(data: T, status_code: StatusCode) -> Self {
        Self {
            data,
            status_code: Some(status_code),
        }
    }

    /// 201 Created response.
    pub fn created(data: T) -> Self {
        Self::with_status(data, StatusCode::CREATED)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status_code.unwrap_or(StatusCode::OK);

        let data_value = match serde_json::to_value(&self.data) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("failed to serialize response data: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "success": false,
                        "message": "Failed to format response"
                    })),
                )
                    .into_response();
            }
        };

        let envelope = match data_value {
            Value::Object(mut map) => {
                map.insert("success".to_string(), Value::Bool(true));
                Value::Object(map)
            }
            other => json!({ "success": true, "data": other }),
        };

        (status, Json(envelope)).into_response()
    }
}

/// Standard handler return type: enveloped success or `ApiError`.
pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(response: Response) -> Value {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("collect body")
            .to_bytes();
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn object_payloads_are_flattened() {
        let response = ApiResponse::success(json!({ "token": "abc" })).into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_of(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["token"], "abc");
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn non_object_payloads_are_wrapped() {
        let response = ApiResponse::created(json!([1, 2, 3])).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_of(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], json!([1, 2, 3]));
    }
}
