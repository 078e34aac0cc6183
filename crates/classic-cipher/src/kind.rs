//! Lookup of ciphers by name.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    CaesarCipher, Cipher, PlayfairCipher, RailFenceCipher, TranspositionCipher, VigenereCipher,
};

/// The shape of key a cipher expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyKind {
    /// A whole number, given as a JSON number or numeric string.
    Integer,
    /// A keyword made only of letters.
    Alphabetic,
}

/// Every cipher the engine provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    Caesar,
    Vigenere,
    RailFence,
    Playfair,
    Transposition,
}

/// Returned when a name matches no cipher.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown cipher: {0}")]
pub struct UnknownCipher(pub String);

impl CipherKind {
    /// All ciphers, in presentation order.
    pub const ALL: [CipherKind; 5] = [
        CipherKind::Caesar,
        CipherKind::Vigenere,
        CipherKind::RailFence,
        CipherKind::Playfair,
        CipherKind::Transposition,
    ];

    /// The cipher implementation for this kind.
    pub fn cipher(self) -> &'static dyn Cipher {
        match self {
            CipherKind::Caesar => &CaesarCipher,
            CipherKind::Vigenere => &VigenereCipher,
            CipherKind::RailFence => &RailFenceCipher,
            CipherKind::Playfair => &PlayfairCipher,
            CipherKind::Transposition => &TranspositionCipher,
        }
    }

    /// URL-friendly name, e.g. `"railfence"`.
    pub fn slug(self) -> &'static str {
        self.cipher().name()
    }

    /// Human-readable name, e.g. `"Rail Fence"`.
    pub fn display_name(self) -> &'static str {
        match self {
            CipherKind::Caesar => "Caesar",
            CipherKind::Vigenere => "Vigenere",
            CipherKind::RailFence => "Rail Fence",
            CipherKind::Playfair => "Playfair",
            CipherKind::Transposition => "Transposition",
        }
    }

    pub fn key_kind(self) -> KeyKind {
        match self {
            CipherKind::Vigenere | CipherKind::Playfair => KeyKind::Alphabetic,
            _ => KeyKind::Integer,
        }
    }
}

impl FromStr for CipherKind {
    type Err = UnknownCipher;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CipherKind::ALL
            .into_iter()
            .find(|kind| kind.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCipher(s.to_owned()))
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
