//! Guarantees downstream handlers never see an absent request body.

use axum::body::{Body, Bytes, to_bytes};
use axum::extract::Request;
use axum::http::HeaderValue;
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::result::ApiResult;

/// Replaces an empty request body with an empty JSON object.
///
/// Clients that send no body at all would otherwise force every handler to
/// special-case "nothing was sent" before deserializing. Mounted with
/// [`axum::middleware::from_fn`], this lets handlers assume at least `{}`:
/// an empty body becomes the bytes `{}` (with `content-type:
/// application/json` inserted when missing), and a request that already
/// carries a body passes through unchanged. The rest of the pipeline runs
/// exactly once either way.
///
/// ```rust
/// use axum::{Router, middleware::from_fn};
/// use axum_envelope::ensure_body;
///
/// let app: Router = Router::new().layer(from_fn(ensure_body));
/// ```
pub async fn ensure_body(request: Request, next: Next) -> ApiResult<Response> {
    let (mut parts, body) = request.into_parts();

    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|err| ApiError::new(format!("Failed to read request body: {err}")))?;

    let bytes = if bytes.is_empty() {
        parts
            .headers
            .entry(CONTENT_TYPE)
            .or_insert(HeaderValue::from_static("application/json"));
        Bytes::from_static(b"{}")
    } else {
        bytes
    };

    // The body may have grown from zero bytes; keep the header honest.
    parts.headers.insert(CONTENT_LENGTH, HeaderValue::from(bytes.len()));

    let request = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(request).await)
}
