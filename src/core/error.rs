use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Database {
        message: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Wraps a storage failure with the endpoint-specific message the
    /// client sees. The raw error text travels in the `error` field.
    pub fn database(message: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, error) = match self {
            AppError::Database { message, source } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                message,
                Some(source.to_string()),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg, None)
            }
        };

        (status, Json(ErrorResponse { message, error })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn response_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn database_error_maps_to_500_with_error_text() {
        let err = AppError::database("Failed to fetch incidents", sqlx::Error::RowNotFound);
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response_body(response).await;
        assert_eq!(body["message"], "Failed to fetch incidents");
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn not_found_maps_to_404_without_error_field() {
        let response = AppError::NotFound("Incident not found".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response_body(response).await;
        assert_eq!(body["message"], "Incident not found");
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn validation_and_bad_request_map_to_400() {
        let validation = AppError::Validation("Invalid severity level".to_string());
        assert_eq!(
            validation.into_response().status(),
            StatusCode::BAD_REQUEST
        );

        let bad_request = AppError::BadRequest("Invalid ID format".to_string());
        assert_eq!(
            bad_request.into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
