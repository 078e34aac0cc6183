//! Vigenere repeating-key cipher.

use crate::caesar::shift_letter;
use crate::{Cipher, CipherError, Key};

const INVALID_KEY: &str = "Vigenere key must contain only alphabetic characters";

/// Polyalphabetic substitution driven by a repeating keyword.
///
/// The key stream advances once per ASCII letter of the text. Anything else
/// passes through unchanged and does not consume a key letter. The case of
/// the key is irrelevant; the case of the text is preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct VigenereCipher;

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

impl VigenereCipher {
    /// Encrypt `text` under the alphabetic `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if `key` is empty or not all
    /// ASCII letters.
    pub fn vigenere_encrypt(&self, text: &str, key: &str) -> Result<String, CipherError> {
        apply(text, key, Direction::Encrypt)
    }

    /// Decrypt `text` under the alphabetic `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if `key` is empty or not all
    /// ASCII letters.
    pub fn vigenere_decrypt(&self, text: &str, key: &str) -> Result<String, CipherError> {
        apply(text, key, Direction::Decrypt)
    }
}

impl Cipher for VigenereCipher {
    fn name(&self) -> &'static str {
        "vigenere"
    }

    fn encrypt(&self, text: &str, key: &Key) -> Result<String, CipherError> {
        self.vigenere_encrypt(text, key.alphabetic(INVALID_KEY)?)
    }

    fn decrypt(&self, text: &str, key: &Key) -> Result<String, CipherError> {
        self.vigenere_decrypt(text, key.alphabetic(INVALID_KEY)?)
    }
}

fn apply(text: &str, key: &str, direction: Direction) -> Result<String, CipherError> {
    if !crate::key::is_alphabetic_key(key) {
        return Err(CipherError::invalid_key(INVALID_KEY));
    }
    let shifts: Vec<u8> = key
        .bytes()
        .map(|b| {
            let k = b.to_ascii_uppercase() - b'A';
            match direction {
                Direction::Encrypt => k,
                Direction::Decrypt => (26 - k) % 26,
            }
        })
        .collect();

    let mut stream = shifts.iter().cycle();
    let out = text
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                // `shifts` is non-empty, so the cycle never ends.
                let shift = stream.next().copied().unwrap_or(0);
                shift_letter(c, shift)
            } else {
                c
            }
        })
        .collect();
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_reference_vector() {
        let ct = VigenereCipher.vigenere_encrypt("ATTACKATDAWN", "LEMON").unwrap();
        assert_eq!(ct, "LXFOPVEFRNHR");
        let pt = VigenereCipher.vigenere_decrypt(&ct, "LEMON").unwrap();
        assert_eq!(pt, "ATTACKATDAWN");
    }

    #[test]
    fn key_case_is_irrelevant() {
        let upper = VigenereCipher.vigenere_encrypt("attack at dawn", "LEMON").unwrap();
        let lower = VigenereCipher.vigenere_encrypt("attack at dawn", "lemon").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper, "lxfopv ef rnhr");
    }

    #[test]
    fn non_letters_do_not_advance_the_key() {
        // Spaces and punctuation are skipped by the key stream.
        let ct = VigenereCipher.vigenere_encrypt("AT-TA CK!", "LEMON").unwrap();
        assert_eq!(ct, "LX-FO PV!");
    }

    #[test]
    fn round_trip_mixed_text() {
        let text = "Meet me at 10:30, by the Old Mill.";
        let ct = VigenereCipher.vigenere_encrypt(text, "Cipher").unwrap();
        assert_ne!(ct, text);
        assert_eq!(VigenereCipher.vigenere_decrypt(&ct, "Cipher").unwrap(), text);
    }

    #[test]
    fn rejects_non_alphabetic_keys() {
        for key in ["", "LEM0N", "LE MON", "lemon!"] {
            let err = VigenereCipher.vigenere_encrypt("ABC", key).unwrap_err();
            assert_eq!(err.to_string(), INVALID_KEY);
        }
        assert!(VigenereCipher.encrypt("ABC", &Key::from(3)).is_err());
    }

    #[test]
    fn empty_text_is_empty() {
        assert_eq!(VigenereCipher.vigenere_encrypt("", "KEY").unwrap(), "");
    }
}
