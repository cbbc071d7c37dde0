//! Errors raised while building a token.

use thiserror::Error;

/// Token builder errors.
#[derive(Error, Debug)]
pub enum TokenError {
    /// The private key is malformed, uses the wrong curve or key type, or the
    /// signing routine rejected the input.
    #[error("signing failed: {0}")]
    Signing(String),

    /// A header or claims field could not be serialized.
    #[error("encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The clock reading leaves no room for the validity window within a
    /// JWT NumericDate (`i64` seconds).
    #[error("issue time {issued_at} is out of range for a {validity}s token")]
    TimeOutOfRange { issued_at: u64, validity: u64 },
}

pub type Result<T> = std::result::Result<T, TokenError>;
