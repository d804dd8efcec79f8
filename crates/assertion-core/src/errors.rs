//! Error types for client-assertion generation.

use thiserror::Error;

/// Errors that can occur while producing a client assertion.
///
/// Every variant is fatal to the run: nothing is retried and no partial
/// assertion is ever written to stdout.
#[derive(Debug, Error)]
pub enum AssertionError {
    /// Key file missing, unreadable, or not a valid PEM RSA private key
    #[error("Key load error: {0}")]
    KeyLoad(String),

    /// The signing library rejected the key/algorithm combination
    #[error("Signing error: {0}")]
    Signing(String),

    /// JWKS input is not a parseable RSA key
    #[error("JWKS error: {0}")]
    Jwks(String),
}

/// Result type alias using `AssertionError`
pub type Result<T> = std::result::Result<T, AssertionError>;
