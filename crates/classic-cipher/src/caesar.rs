//! Caesar shift cipher.

use crate::{Cipher, CipherError, Key};

const INVALID_KEY: &str = "Key must be an integer";

/// Shifts every ASCII letter by a fixed amount, preserving case.
///
/// Any integer shift is accepted; it is reduced modulo 26 before use.
/// Non-letters pass through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaesarCipher;

impl CaesarCipher {
    /// Encrypt `text` with shift `key`.
    pub fn encrypt_text(&self, text: &str, key: i64) -> String {
        shift_text(text, key.rem_euclid(26) as u8)
    }

    /// Decrypt `text` with shift `key`. Equivalent to encrypting with `-key`.
    pub fn decrypt_text(&self, text: &str, key: i64) -> String {
        // (26 - s) % 26 avoids negating i64::MIN.
        let shift = (26 - key.rem_euclid(26) as u8) % 26;
        shift_text(text, shift)
    }
}

impl Cipher for CaesarCipher {
    fn name(&self) -> &'static str {
        "caesar"
    }

    fn encrypt(&self, text: &str, key: &Key) -> Result<String, CipherError> {
        let key = key.integer(INVALID_KEY)?;
        Ok(self.encrypt_text(text, key))
    }

    fn decrypt(&self, text: &str, key: &Key) -> Result<String, CipherError> {
        let key = key.integer(INVALID_KEY)?;
        Ok(self.decrypt_text(text, key))
    }
}

/// Shift each ASCII letter forward by `shift` (0..26) within its case.
pub(crate) fn shift_letter(c: char, shift: u8) -> char {
    let base = match c {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return c,
    };
    ((c as u8 - base + shift) % 26 + base) as char
}

fn shift_text(text: &str, shift: u8) -> String {
    text.chars().map(|c| shift_letter(c, shift)).collect()
}
