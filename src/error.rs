//! Error types for the encoder.

use std::collections::TryReserveError;

/// Recoverable failures of an encode operation.
///
/// When one of these is returned the encoder's buffer holds exactly what it
/// held before the failing call.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("allocation error: {0}")]
    Alloc(#[from] TryReserveError),

    #[error("output limit exceeded: {required} bytes required, limit is {limit}")]
    LimitExceeded { limit: usize, required: usize },

    #[error("integer {0} is outside the encodable range")]
    IntegerOutOfRange(i128),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EncodeError>;
