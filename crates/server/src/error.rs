//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side errors to
//! Sentry before responding. All route handlers return `Result<T, AppError>`.
//! Every error body is `{"error": "<message>"}`.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::models::ValidationError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// A repository call failed. `message` is what the client sees.
    #[error("{message}: {source}")]
    Database {
        message: &'static str,
        #[source]
        source: RepositoryError,
    },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(&'static str),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An upstream HTTP service answered with a failure.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    /// Wrap a repository error with the message shown to the client.
    ///
    /// Intended for `map_err`:
    ///
    /// ```rust,ignore
    /// repo.list().await.map_err(AppError::database("Failed to fetch projects"))?;
    /// ```
    pub fn database(message: &'static str) -> impl FnOnce(RepositoryError) -> Self {
        move |source| Self::Database { message, source }
    }

    /// Like [`AppError::database`], but a `RepositoryError::NotFound` becomes a 404.
    pub fn database_or_not_found(
        not_found: &'static str,
        message: &'static str,
    ) -> impl FnOnce(RepositoryError) -> Self {
        move |source| match source {
            RepositoryError::NotFound => Self::NotFound(not_found),
            source @ RepositoryError::Database(_) => Self::Database { message, source },
        }
    }

    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Database { .. } | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message returned to the client; never includes internal details.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Database { message, .. } | Self::NotFound(message) => (*message).to_string(),
            Self::BadRequest(message) | Self::Upstream(message) | Self::Internal(message) => {
                message.clone()
            }
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.0.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "Rejected request body");
        Self::BadRequest("Invalid request body".to_string())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(error = %rejection, "Rejected query string");
        Self::BadRequest("Invalid query string".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(
            self,
            Self::Database { .. } | Self::Internal(_) | Self::Upstream(_)
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = self.status();
        let body = ErrorBody {
            error: self.client_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("Project not found");
        assert_eq!(err.to_string(), "Not found: Project not found");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::NotFound("Not found")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Upstream("test".to_string())),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::database("Failed to fetch projects")(
                RepositoryError::Database(sqlx::Error::PoolTimedOut)
            )),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_database_error_hides_source() {
        let err = AppError::database("Failed to fetch projects")(RepositoryError::Database(
            sqlx::Error::Protocol("relation \"projects\" does not exist".to_string()),
        ));
        assert!(err.to_string().contains("does not exist"));
        assert_eq!(err.client_message(), "Failed to fetch projects");
    }

    #[test]
    fn test_repository_not_found_becomes_404() {
        let err = AppError::database_or_not_found("Not found", "Failed to update item")(
            RepositoryError::NotFound,
        );
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.client_message(), "Not found");

        let err = AppError::database_or_not_found("Not found", "Failed to update item")(
            RepositoryError::Database(sqlx::Error::PoolClosed),
        );
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.client_message(), "Failed to update item");
    }

    #[test]
    fn test_validation_error_becomes_bad_request() {
        let err = AppError::from(ValidationError("All fields are required"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.client_message(), "All fields are required");
    }
}
