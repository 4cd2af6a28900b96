//! Command utility types and helpers.
//!
//! Marker errors that the binary maps to exit codes.

/// Error indicating user cancelled an operation.
#[derive(Debug, thiserror::Error)]
#[error("user cancelled")]
pub struct CancelError;

/// Error indicating a usage issue not caught by argument parsing.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct FlagError(pub String);

/// Auth error - triggers exit 4.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct AuthError(pub String);

/// Check if an error represents a user cancellation.
pub fn is_user_cancellation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<CancelError>().is_some()
}
