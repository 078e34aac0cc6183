//! Classical ciphers: Caesar, Vigenere, Rail Fence, Playfair and columnar
//! Transposition.
//!
//! Every cipher is a zero-sized value implementing [`Cipher`]. Calls are pure
//! functions of their inputs, so cipher values can be shared freely across
//! threads without synchronisation.
//!
//! ```
//! use classic_cipher::{Cipher, Key, VigenereCipher};
//!
//! let ct = VigenereCipher.encrypt("ATTACKATDAWN", &Key::from("LEMON")).unwrap();
//! assert_eq!(ct, "LXFOPVEFRNHR");
//! ```
//!
//! # Text policies
//!
//! - Caesar and Vigenere shift ASCII letters and pass everything else through.
//! - Rail Fence and Transposition permute the raw character sequence.
//! - Playfair drops non-letters and merges `J` into `I` before encrypting.

pub mod caesar;
pub mod error;
pub mod key;
pub mod kind;
pub mod playfair;
pub mod rail_fence;
pub mod transposition;
pub mod vigenere;

pub use caesar::CaesarCipher;
pub use error::CipherError;
pub use key::Key;
pub use kind::{CipherKind, KeyKind, UnknownCipher};
pub use playfair::{PlayfairCipher, PlayfairMatrix};
pub use rail_fence::RailFenceCipher;
pub use transposition::TranspositionCipher;
pub use vigenere::VigenereCipher;

/// An encrypt/decrypt pair over text.
pub trait Cipher: Send + Sync {
    /// Short lowercase name used in routes and logs.
    fn name(&self) -> &'static str;

    /// Encrypt `text` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if `key` does not suit this cipher.
    fn encrypt(&self, text: &str, key: &Key) -> Result<String, CipherError>;

    /// Decrypt `text` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if `key` does not suit this cipher.
    fn decrypt(&self, text: &str, key: &Key) -> Result<String, CipherError>;
}
