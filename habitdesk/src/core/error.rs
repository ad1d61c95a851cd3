//! # Common Error Types
//!
//! Every failure a request can produce converges on [`ApiError`]. The
//! variants stay distinguishable for callers that need to branch on the
//! cause (a future retry policy, for instance), but `Display` yields only
//! the normalized message, which is all the form controller forwards to
//! the notification surface.

use thiserror::Error;

/// Request failure, normalized.
///
/// - **Network**: transport-level failure before a response was received
///   (connection refused, DNS, timeout).
/// - **Http**: the server answered with a non-success status; `message` is
///   the result of the ordered error-body fallback chain
///   (see [`crate::services::api::ErrorBody`]).
/// - **Parse**: the status was in the success range but the body was not
///   valid JSON. This indicates a defect on one side of the wire and is
///   surfaced rather than swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Network(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("{0}")]
    Parse(String),
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
