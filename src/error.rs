use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Data file error: {0}")]
    Data(#[from] csv::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Data(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::InvalidInput("bad".into()), StatusCode::BAD_REQUEST),
            (AppError::NotFound("none".into()), StatusCode::NOT_FOUND),
            (AppError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    async fn error_body(error: AppError) -> serde_json::Value {
        let bytes = axum::body::to_bytes(error.into_response().into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_client_errors_keep_plain_message() {
        // 4xx bodies carry the message as-is, without the variant prefix
        let body = error_body(AppError::InvalidInput("Invalid mood.".into())).await;
        assert_eq!(body["error"], "Invalid mood.");

        let body = error_body(AppError::NotFound("No songs found.".into())).await;
        assert_eq!(body["error"], "No songs found.");
    }

    #[tokio::test]
    async fn test_server_errors_keep_variant_prefix() {
        let body = error_body(AppError::Internal("boom".into())).await;
        assert_eq!(body["error"], AppError::Internal("boom".into()).to_string());
    }
}
