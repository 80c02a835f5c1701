use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::store::repo::StoreError;

/// Everything a handler can fail with, mapped to the mock's JSON error shapes.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Endpoint not found")]
    NotFound,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Endpoint not found" })),
            )
                .into_response(),
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "status": "error", "message": "Invalid credentials" })),
            )
                .into_response(),
            ApiError::Internal(detail) => {
                tracing::error!(detail, "internal error");
                internal_error_response()
            }
        }
    }
}

/// Generic 500 body. Also used for handler panics.
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal server error" })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn response_body(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response_body(response).await, r#"{"error":"Endpoint not found"}"#);
    }

    #[tokio::test]
    async fn test_invalid_credentials_is_401() {
        let response = ApiError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value =
            serde_json::from_str(&response_body(response).await).unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Invalid credentials");
        assert!(body.get("token").is_none());
    }

    #[tokio::test]
    async fn test_internal_hides_detail() {
        let response = ApiError::Internal("token secret leaked".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response_body(response).await;
        assert!(!body.contains("secret"));
        assert_eq!(body, r#"{"error":"Internal server error"}"#);
    }
}
