//! Server error types

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use materna_core::{AccessError, RecordError};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur in the materna server
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind to the specified address
    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Request payload failed ingestion validation
    #[error("{0}")]
    Validation(#[from] RecordError),

    /// Requested resource does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal server error
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<AccessError> for ServerError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::ProfileNotFound(user_id) => {
                ServerError::NotFound(format!("profile for user {}", user_id))
            }
            AccessError::Storage(message) => ServerError::Internal(message),
        }
    }
}

/// JSON body returned for error responses
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Bind { .. } | ServerError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_record_message() {
        let error = ServerError::Validation(RecordError::PregnancyWeeksOutOfRange(45));
        assert!(error.to_string().contains("45"));
    }

    #[test]
    fn profile_not_found_maps_to_not_found() {
        let error: ServerError = AccessError::ProfileNotFound("user-9".to_string()).into();
        assert!(matches!(error, ServerError::NotFound(_)));
    }

    #[test]
    fn storage_error_maps_to_internal() {
        let error: ServerError = AccessError::Storage("disk".to_string()).into();
        assert!(matches!(error, ServerError::Internal(_)));
    }
}
