//! Common error types shared across crates.

use classic_cipher::{CipherError, UnknownCipher};
use thiserror::Error;

/// Top-level service error type.
///
/// Variants map to HTTP status codes returned to callers:
/// - [`ServiceError::BadRequest`] → 400
/// - [`ServiceError::NotFound`] → 404
/// - [`ServiceError::Internal`] → 500
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request was malformed: missing text, missing key, or invalid key.
    #[error("{0}")]
    BadRequest(String),

    /// The requested cipher or route does not exist.
    #[error("{0}")]
    NotFound(String),

    /// An unexpected internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns the HTTP status code that should be sent for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::BadRequest(_) => 400,
            ServiceError::NotFound(_) => 404,
            ServiceError::Internal(_) => 500,
        }
    }

    /// Short machine-readable code for the error body.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::BadRequest(_) => "bad_request",
            ServiceError::NotFound(_) => "not_found",
            ServiceError::Internal(_) => "internal_error",
        }
    }
}

impl From<CipherError> for ServiceError {
    fn from(e: CipherError) -> Self {
        match e {
            CipherError::InvalidKey(msg) => ServiceError::BadRequest(msg),
        }
    }
}

impl From<UnknownCipher> for ServiceError {
    fn from(e: UnknownCipher) -> Self {
        ServiceError::NotFound(e.to_string())
    }
}
