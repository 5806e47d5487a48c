use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors surfaced to API callers as `{"error": <message>}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client input failed a required-field or format check.
    #[error("{0}")]
    Validation(&'static str),

    /// Persistence layer failed; detail is logged, never sent to the caller.
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, *msg),
            ApiError::Storage(e) => {
                error!(error = %e, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Terjadi kesalahan server. Silakan coba lagi.",
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod response_tests {
    use super::*;

    async fn body_string(res: Response) -> String {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .expect("read body");
        String::from_utf8(bytes.to_vec()).expect("utf8 body")
    }

    #[tokio::test]
    async fn validation_error_maps_to_400_with_message() {
        let res = ApiError::Validation("invalid email format").into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = body_string(res).await;
        assert_eq!(body, r#"{"error":"invalid email format"}"#);
    }

    #[tokio::test]
    async fn storage_error_maps_to_500_without_leaking_detail() {
        let res = ApiError::Storage(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_string(res).await;
        assert!(body.contains("Terjadi kesalahan server"));
        assert!(!body.to_lowercase().contains("pool"));
    }
}
