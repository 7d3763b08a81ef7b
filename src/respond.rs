//! Builders that emit envelope-shaped HTTP responses.
//!
//! [`success`] and [`failure`] are the two ways a response leaves an
//! application built on this crate. Both produce an [`Envelope`] body and
//! set the HTTP status on the response itself, so the status never appears
//! inside the body.
//!
//! ```rust
//! use axum_envelope::success;
//! use serde_json::json;
//!
//! let response = success("Users fetched.")
//!     .data(json!({ "users": ["alice", "bob"] }))
//!     .meta(json!({ "totalCount": 2 }));
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use crate::envelope::{Envelope, FieldErrors};
use crate::error::{ApiError, GENERIC_ERROR_MESSAGE};

/// Starts a success response. The status defaults to `200 OK`.
pub fn success(message: impl Into<String>) -> Success {
    Success {
        message: message.into(),
        status: StatusCode::OK,
        data: None,
        meta: None,
        invalid: None,
    }
}

/// Starts a failure response. The status defaults to `400 Bad Request`.
pub fn failure(message: impl Into<String>) -> Failure {
    Failure {
        message: message.into(),
        status: StatusCode::BAD_REQUEST,
        errors: None,
    }
}

/// A success response under construction.
///
/// Return it from a handler (or finish with
/// [`into_response`](IntoResponse::into_response)) to emit it.
#[derive(Debug)]
pub struct Success {
    message: String,
    status: StatusCode,
    data: Option<Value>,
    meta: Option<Value>,
    // First payload that failed to serialize, reported as a 500 on emission.
    invalid: Option<serde_json::Error>,
}

impl Success {
    /// Overrides the HTTP status.
    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Attaches the payload. A value that serializes to `null`, `{}`, `[]`,
    /// or `""` is omitted from the envelope.
    pub fn data(mut self, data: impl Serialize) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => self.data = Some(value),
            Err(err) => {
                self.invalid.get_or_insert(err);
            }
        }
        self
    }

    /// Attaches metadata (pagination, counts). Empty values are omitted.
    pub fn meta(mut self, meta: impl Serialize) -> Self {
        match serde_json::to_value(meta) {
            Ok(value) => self.meta = Some(value),
            Err(err) => {
                self.invalid.get_or_insert(err);
            }
        }
        self
    }
}

impl IntoResponse for Success {
    fn into_response(self) -> Response {
        if let Some(err) = self.invalid {
            tracing::error!(error = %err, "response payload failed to serialize");
            return failure(GENERIC_ERROR_MESSAGE)
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .into_response();
        }

        let mut envelope = Envelope::success(self.message);
        if let Some(data) = self.data {
            envelope = envelope.with_data(data);
        }
        if let Some(meta) = self.meta {
            envelope = envelope.with_meta(meta);
        }
        (self.status, Json(envelope)).into_response()
    }
}

/// A failure response under construction.
#[derive(Debug, Clone)]
pub struct Failure {
    message: String,
    status: StatusCode,
    errors: Option<FieldErrors>,
}

impl Failure {
    /// Overrides the HTTP status.
    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Attaches field-level errors. An empty map is omitted.
    pub fn errors(mut self, errors: FieldErrors) -> Self {
        self.errors = Some(errors);
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
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        let mut envelope = Envelope::failure(self.message);
        if let Some(errors) = self.errors {
            envelope = envelope.with_errors(errors);
        }
        (self.status, Json(envelope)).into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = failure(self.message).status(self.status);
        if let Some(errors) = self.errors {
            response = response.errors(errors);
        }
        response.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{Value, json};

    async fn decode(response: Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn bare_success_is_200_with_two_keys() {
        let (status, body) = decode(success("ok").into_response()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "isSuccess": true, "message": "ok" }));
    }

    #[tokio::test]
    async fn success_status_can_be_overridden() {
        let (status, body) = decode(
            success("Created.")
                .status(StatusCode::CREATED)
                .data(json!({ "id": 42 }))
                .into_response(),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"], json!({ "id": 42 }));
        assert!(body.get("statusCode").is_none());
    }

    #[tokio::test]
    async fn empty_payload_is_left_off_the_wire() {
        let (_, body) = decode(success("ok").data(json!({})).into_response()).await;
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn bare_failure_is_400() {
        let (status, body) = decode(failure("nope").into_response()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "isSuccess": false, "message": "nope" }));
    }

    #[tokio::test]
    async fn failure_carries_status_and_field_errors() {
        let (status, body) = decode(
            failure("Validation failed.")
                .status(StatusCode::UNPROCESSABLE_ENTITY)
                .field("email", "Email is required.")
                .into_response(),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({
                "isSuccess": false,
                "message": "Validation failed.",
                "errors": { "email": ["Email is required."] },
            })
        );
    }

    #[tokio::test]
    async fn api_error_emits_its_failure_envelope() {
        let err = ApiError::not_found("Not found");
        let (status, body) = decode(err.into_response()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "isSuccess": false, "message": "Not found" }));
    }
}
