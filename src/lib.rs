//! # axum-envelope
//!
//! Response envelopes, guarded handlers, and a client-facing error type for
//! Axum services.
//!
//! Three pieces:
//! - [`success`] and [`failure`] build responses that all share one JSON
//!   envelope shape (`isSuccess`, `message`, plus `data`, `meta`, and
//!   `errors` keys that appear only when they hold something).
//! - [`guard`] wraps an async operation so any error it raises is converted
//!   into a failure envelope instead of escaping to the framework.
//! - [`ensure_body`] middleware guarantees handlers never see an absent
//!   request body.
//!
//! ```rust,no_run
//! use axum::{Router, extract::Request, middleware::from_fn, routing::get};
//! use axum_envelope::{ApiError, ApiResult, Success, ensure_body, guard, success};
//! use serde_json::json;
//!
//! async fn list_users(_req: Request) -> ApiResult<Success> {
//!     let users = vec!["alice", "bob"];
//!     if users.is_empty() {
//!         return Err(ApiError::not_found("No users exist yet."));
//!     }
//!     Ok(success("Users fetched.")
//!         .data(json!({ "users": users }))
//!         .meta(json!({ "totalCount": 2 })))
//! }
//!
//! let app: Router = Router::new()
//!     .route("/users", get(guard(list_users)))
//!     .layer(from_fn(ensure_body));
//! ```

pub mod envelope;
pub mod error;
pub mod guard;
pub mod middleware;
pub mod respond;
pub mod result;

pub use envelope::{Envelope, FieldErrors};
pub use error::{ApiError, GENERIC_ERROR_MESSAGE};
pub use guard::guard;
pub use middleware::ensure_body;
pub use respond::{Failure, Success, failure, success};
pub use result::ApiResult;
