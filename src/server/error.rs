//! Error-to-HTTP response conversion.
//!
//! Route handlers return `Result<T, AppError>`; anything convertible from
//! [`streamflix_common::Error`] turns into a JSON body `{error, code}` with a
//! matching status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use streamflix_common::Error;

/// Wrapper so we can implement `IntoResponse` for an external type.
#[derive(Debug)]
pub struct AppError(pub Error);

impl From<Error> for AppError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl AppError {
    fn code(&self) -> &'static str {
        match &self.0 {
            Error::NotFound(_) => "not_found",
            Error::InvalidInput(_) => "invalid_input",
            Error::Database(_) => "database_error",
            Error::Io(_) => "io_error",
            Error::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "Server error in API handler");
        }

        let body = json!({
            "error": self.0.to_string(),
            "code": self.code(),
        });

        (status, axum::Json(body)).into_response()
    }
}
