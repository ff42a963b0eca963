//! Stub API Errors
//!
//! The stub only fails in three ways: a bad `?limit`, a path it does not
//! serve, and the listener going away. Handler errors become the JSON body
//! `{"error": {"code", "message"}, "request_id"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    /// Query parameter out of range, e.g. `/complaints/recent?limit=0`
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Path outside the dashboard endpoints
    #[error("No such endpoint: {0}")]
    NotFound(String),

    /// `axum::serve` stopped with an error
    #[error("Server stopped: {0}")]
    Internal(String),

    /// Binding the listen address failed
    #[error("Cannot bind listener: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// HTTP status and machine-readable code sent to the client
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ServerError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ServerError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ServerError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ServerError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    /// Fresh uuid, also logged with the failure
    pub request_id: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let request_id = uuid::Uuid::new_v4().to_string();

        if status.is_server_error() {
            tracing::error!(request_id = %request_id, code, error = %self, "Stub API failure");
        } else {
            tracing::debug!(request_id = %request_id, code, error = %self, "Rejected request");
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_4xx() {
        let (status, code) = ServerError::Validation("limit".into()).status_and_code();
        assert_eq!((status, code), (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"));

        let (status, code) = ServerError::NotFound("/x".into()).status_and_code();
        assert_eq!((status, code), (StatusCode::NOT_FOUND, "NOT_FOUND"));
    }

    #[test]
    fn test_bind_failure_is_server_error() {
        let err = ServerError::from(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "address in use",
        ));
        assert!(err.status_and_code().0.is_server_error());
        assert_eq!(err.to_string(), "Cannot bind listener: address in use");
    }
}
