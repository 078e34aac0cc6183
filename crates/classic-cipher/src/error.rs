//! Error type for the cipher engine.

use thiserror::Error;

/// Errors produced by the cipher engine.
///
/// Every transform is total over its text input; the only failure is a key
/// that does not satisfy the cipher's structural precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// The key failed validation. The message is safe to return to callers.
    #[error("{0}")]
    InvalidKey(String),
}

impl CipherError {
    pub(crate) fn invalid_key(message: impl Into<String>) -> Self {
        CipherError::InvalidKey(message.into())
    }
}
