//! Error types for symbol encoding

use thiserror::Error;

/// Result type for encoding operations
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Errors that can occur while encoding a symbol.
///
/// Both variants are permanent, input-dependent failures: a repeat call with
/// the same input fails the same way, so there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The error correction level code was not one of "L", "M", "Q", "H"
    #[error("unknown error correction level {0:?}, expected \"L\", \"M\", \"Q\" or \"H\"")]
    InvalidLevel(String),

    /// The input does not fit a version-40 symbol at the requested level
    #[error(
        "data needs {needed_bits} bits but a version 40 symbol at level {level} holds {available_bits}"
    )]
    CapacityExceeded {
        /// Encoded bit length of the input, headers included
        needed_bits: usize,
        /// Data capacity in bits of the largest symbol at the requested level
        available_bits: usize,
        /// Requested error correction level code
        level: &'static str,
    },
}
