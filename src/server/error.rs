//! Error-to-HTTP response conversion.
//!
//! Implements `IntoResponse` for [`sora_common::Error`] so that route handlers
//! can return `Result<T, AppError>` and use `?` on domain results.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use sora_common::Error;

/// Wrapper so we can implement `IntoResponse` for an external type.
#[derive(Debug)]
pub struct AppError(pub Error);

impl From<Error> for AppError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(
                status = %status,
                error = %self.0,
                "Server error in page handler"
            );
        } else {
            tracing::debug!(status = %status, error = %self.0, "Request rejected");
        }

        let code = match &self.0 {
            Error::NotFound(_) => "not_found",
            Error::Unauthorized => "unauthorized",
            Error::InvalidInput(_) => "validation_error",
            Error::Upstream { .. } => "upstream_error",
            Error::Internal(_) => "internal_error",
        };

        // Not-found details would tell bad input apart from missing data.
        let message = match &self.0 {
            Error::NotFound(_) => "Not Found".to_string(),
            Error::Upstream { .. } | Error::Internal(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
