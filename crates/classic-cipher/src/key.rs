//! Cipher keys.
//!
//! A key arrives either as an integer or as text. Integer-keyed ciphers also
//! accept text holding a base-10 integer, so a caller can forward whatever
//! the user typed without pre-parsing it.

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::CipherError;

/// A cipher key as supplied by the caller.
///
/// Deserialises from any JSON value. Integers that fit an `i64` and strings
/// keep their value; anything else (floats, booleans, out-of-range numbers,
/// arrays, objects) becomes [`Key::Unsupported`] so the cipher can reject it
/// with its own message instead of failing the whole request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Key {
    /// An integer key: Caesar shift, Rail Fence rails, Transposition columns.
    Integer(i64),
    /// A text key: Vigenere and Playfair keywords, or an integer in text form.
    Text(String),
    /// A value no cipher accepts.
    #[serde(skip_serializing)]
    Unsupported,
}

impl Key {
    /// Returns the key as an integer, parsing text keys after trimming
    /// surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] carrying `message` if the key is
    /// text that does not parse as an `i64`, or is [`Key::Unsupported`].
    pub fn integer(&self, message: &str) -> Result<i64, CipherError> {
        match self {
            Key::Integer(n) => Ok(*n),
            Key::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| CipherError::invalid_key(message)),
            Key::Unsupported => Err(CipherError::invalid_key(message)),
        }
    }

    /// Returns the key as a non-empty run of ASCII letters.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] carrying `message` for non-text
    /// keys, empty text, or text containing anything but ASCII letters.
    pub fn alphabetic(&self, message: &str) -> Result<&str, CipherError> {
        match self {
            Key::Text(s) if is_alphabetic_key(s) => Ok(s),
            _ => Err(CipherError::invalid_key(message)),
        }
    }

    /// Returns `true` for an empty text key.
    pub fn is_empty(&self) -> bool {
        matches!(self, Key::Text(s) if s.is_empty())
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(KeyVisitor)
    }
}

struct KeyVisitor;

impl<'de> Visitor<'de> for KeyVisitor {
    type Value = Key;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Key, E> {
        Ok(Key::Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Key, E> {
        Ok(i64::try_from(v).map_or(Key::Unsupported, Key::Integer))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Key, E> {
        Ok(Key::Unsupported)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Key, E> {
        Ok(Key::Unsupported)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Key, E> {
        Ok(Key::Text(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Key, E> {
        Ok(Key::Text(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Key, E> {
        Ok(Key::Unsupported)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Key, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Key::Unsupported)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Key, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Key::Unsupported)
    }
}

/// Returns `true` if `s` is non-empty and made only of ASCII letters.
pub(crate) fn is_alphabetic_key(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic())
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Integer(n)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Text(s.to_owned())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Text(s)
    }
}
