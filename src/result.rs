//! Convenience result type alias.

use crate::error::ApiError;

/// A specialized `Result` for operations that fail with an [`ApiError`].
pub type ApiResult<T> = Result<T, ApiError>;
