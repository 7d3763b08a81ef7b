//! The client-facing application error.

use axum::http::StatusCode;
use thiserror::Error;

use crate::envelope::FieldErrors;

/// Fallback message for errors that carry no useful text of their own.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong.";

/// An error that maps directly onto a failure envelope.
///
/// Business logic raises `ApiError` (directly or via `?`) when a request
/// cannot be satisfied; the [`guard`](crate::guard()) catches it and emits
/// the carried status, message, and field errors verbatim. Any raised value
/// that is *not* an `ApiError` is treated as unclassified and reported with
/// defaults instead.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable description of the failure.
    pub message: String,
    /// HTTP status to respond with.
    pub status: StatusCode,
    /// Optional field-level validation errors.
    pub errors: Option<FieldErrors>,
}

impl ApiError {
    /// Creates an error with the default `400 Bad Request` status.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: StatusCode::BAD_REQUEST,
            errors: None,
        }
    }

    /// Overrides the HTTP status.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Replaces the field-error map. An empty map is normalized to absent.
    pub fn with_errors(mut self, errors: FieldErrors) -> Self {
        self.errors = (!errors.is_empty()).then_some(errors);
        self
    }

    /// Appends one message to a field's error list.
    pub fn field(mut self, name: impl Into<String>, message: impl Into<String>) -> Self {
        self.errors
            .get_or_insert_with(FieldErrors::new)
            .entry(name.into())
            .or_default()
            .push(message.into());
        self
    }

    /// Creates a `400 Bad Request` error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message)
    }

    /// Creates a `401 Unauthorized` error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(message).with_status(StatusCode::UNAUTHORIZED)
    }

    /// Creates a `403 Forbidden` error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(message).with_status(StatusCode::FORBIDDEN)
    }

    /// Creates a `404 Not Found` error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message).with_status(StatusCode::NOT_FOUND)
    }

    /// Creates a `409 Conflict` error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(message).with_status(StatusCode::CONFLICT)
    }

    /// Creates a `422 Unprocessable Content` error.
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(message).with_status(StatusCode::UNPROCESSABLE_ENTITY)
    }

    /// Creates a `500 Internal Server Error` error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(message).with_status(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
