//! Wraps async operations so rejections become failure envelopes.

use std::future::Future;

use axum::BoxError;
use axum::extract::Request;
use axum::response::{IntoResponse, Response};
use futures::future::BoxFuture;

use crate::error::{ApiError, GENERIC_ERROR_MESSAGE};
use crate::respond::failure;

/// Wraps an async operation into a route handler that converts any raised
/// error into a failure envelope.
///
/// The guard is the single recovery point per request: an operation's error
/// never escapes to the framework's default handling. On success the
/// operation's own response is emitted unchanged. On failure, an
/// [`ApiError`] is surfaced verbatim (status, message, field errors); any
/// other error becomes a `400` carrying the error's display text, or
/// [`GENERIC_ERROR_MESSAGE`] when that text is empty.
///
/// The returned closure holds no state and can be registered on any number
/// of routes.
///
/// ```rust
/// use axum::{Router, extract::Request, routing::get};
/// use axum_envelope::{ApiResult, Success, guard, success};
/// use serde_json::json;
///
/// async fn list_users(_req: Request) -> ApiResult<Success> {
///     Ok(success("Users fetched.").data(json!({ "users": ["alice"] })))
/// }
///
/// let app: Router = Router::new().route("/users", get(guard(list_users)));
/// ```
pub fn guard<F, Fut, R, E>(
    op: F,
) -> impl Fn(Request) -> BoxFuture<'static, Response> + Clone + Send + 'static
where
    F: Fn(Request) -> Fut + Clone + Send + 'static,
    Fut: Future<Output = Result<R, E>> + Send + 'static,
    R: IntoResponse,
    E: Into<BoxError>,
{
    move |request| {
        let op = op.clone();
        Box::pin(async move {
            match op(request).await {
                Ok(response) => response.into_response(),
                Err(err) => reject(err.into()),
            }
        })
    }
}

/// Converts a raised error into the failure response it maps to.
fn reject(err: BoxError) -> Response {
    match err.downcast::<ApiError>() {
        Ok(classified) => classified.into_response(),
        Err(unclassified) => {
            tracing::error!(error = %unclassified, "unclassified handler error");
            let message = unclassified.to_string();
            let message = if message.is_empty() {
                GENERIC_ERROR_MESSAGE.to_owned()
            } else {
                message
            };
            failure(message).into_response()
        }
    }
}
