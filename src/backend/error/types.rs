/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP
 * responses.
 *
 * # Error Categories
 *
 * - Handler errors: invalid input, missing resources, authorization
 *   failures, with an explicit status code
 * - Database errors: sqlx failures (404 for missing rows, 500 otherwise)
 * - Serialization errors: JSON encode/decode failures
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Backend-specific error types
///
/// Each variant carries enough context to produce an HTTP response.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g. invalid request, missing resource, forbidden)
    #[error("{message}")]
    Handler {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Handler {
            status,
            message: message.into(),
        }
    }

    /// 404 Not Found with a message
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_FOUND, message)
    }

    /// 400 Bad Request with a message
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message)
    }

    /// 403 Forbidden with a message
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::FORBIDDEN, message)
    }

    /// 409 Conflict with a message
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::CONFLICT, message)
    }

    /// 401 Unauthorized with a message
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::UNAUTHORIZED, message)
    }

    /// Map a unique-constraint violation to a 409 with the given message,
    /// leaving other database errors untouched.
    ///
    /// Check-then-insert handlers race under concurrency; the loser hits
    /// the unique index and should still answer 409, not 500.
    pub fn or_conflict(error: sqlx::Error, message: impl Into<String>) -> Self {
        if error
            .as_database_error()
            .is_some_and(|db| db.is_unique_violation())
        {
            Self::conflict(message)
        } else {
            Self::Database(error)
        }
    }

    /// 503 Service Unavailable (database not configured)
    pub fn no_database() -> Self {
        Self::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Handler { status, .. } => *status,
            Self::Database(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message exposed to clients
    pub fn message(&self) -> String {
        match self {
            Self::Handler { message, .. } => message.clone(),
            Self::Database(sqlx::Error::RowNotFound) => "Not found".to_string(),
            // Internal detail stays in the logs, not in the response
            Self::Database(_) => "Internal server error".to_string(),
            Self::Serialization(_) => "Internal server error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error() {
        let error = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
        match error {
            BackendError::Handler { status, message } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(message, "Invalid request");
            }
            _ => panic!("Expected Handler"),
        }
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            BackendError::not_found("Event not found").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            BackendError::conflict("You are already attending this event").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            BackendError::no_database().status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            BackendError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_database_error_message_is_opaque() {
        let error = BackendError::Database(sqlx::Error::PoolClosed);
        assert_eq!(error.message(), "Internal server error");
    }

    #[test]
    fn test_or_conflict_leaves_other_errors_alone() {
        let error = BackendError::or_conflict(sqlx::Error::PoolClosed, "Duplicate");
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message(), "Internal server error");
    }

    #[test]
    fn test_unauthorized_error() {
        let error = BackendError::unauthorized("Authentication required");
        assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(error.message(), "Authentication required");
    }
}
