//! Request-pipeline middleware.

pub mod body;

pub use body::ensure_body;
