//! Playfair digraph substitution.
//!
//! # Text preparation
//!
//! Input is uppercased, `J` becomes `I`, and everything but ASCII letters is
//! dropped. The letters are then paired left to right. A pair of equal
//! letters is split by a filler (`X`, or `Y` when the letter is itself `X`)
//! and a trailing single letter is padded with the same filler.
//!
//! Preparation is lossy. Decryption returns the prepared text, fillers
//! included, not the original input.

pub mod matrix;

pub use matrix::PlayfairMatrix;

use crate::{Cipher, CipherError, Key};

/// Digraph substitution over a 5×5 key square.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayfairCipher;

impl PlayfairCipher {
    /// Build the key square for `key`. See [`PlayfairMatrix::build`].
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if `key` is empty or not all
    /// ASCII letters.
    pub fn create_playfair_matrix(&self, key: &str) -> Result<PlayfairMatrix, CipherError> {
        PlayfairMatrix::build(key)
    }

    /// Encrypt `text` with an already-built key square.
    pub fn playfair_encrypt(&self, text: &str, matrix: &PlayfairMatrix) -> String {
        substitute(text, matrix, 1)
    }

    /// Decrypt `text` with an already-built key square.
    pub fn playfair_decrypt(&self, text: &str, matrix: &PlayfairMatrix) -> String {
        substitute(text, matrix, matrix::SIZE - 1)
    }
}

impl Cipher for PlayfairCipher {
    fn name(&self) -> &'static str {
        "playfair"
    }

    fn encrypt(&self, text: &str, key: &Key) -> Result<String, CipherError> {
        let matrix = PlayfairMatrix::build(key.alphabetic(matrix::INVALID_KEY)?)?;
        Ok(self.playfair_encrypt(text, &matrix))
    }

    fn decrypt(&self, text: &str, key: &Key) -> Result<String, CipherError> {
        let matrix = PlayfairMatrix::build(key.alphabetic(matrix::INVALID_KEY)?)?;
        Ok(self.playfair_decrypt(text, &matrix))
    }
}

/// Uppercase, merge `J` into `I`, and keep only ASCII letters.
pub fn prepare_text(text: &str) -> Vec<char> {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| match c.to_ascii_uppercase() {
            'J' => 'I',
            c => c,
        })
        .collect()
}

/// Split prepared letters into digraphs, inserting fillers where needed.
pub fn digraphs(letters: &[char]) -> Vec<(char, char)> {
    let mut pairs = Vec::with_capacity(letters.len() / 2 + 1);
    let mut i = 0;
    while i < letters.len() {
        let a = letters[i];
        match letters.get(i + 1) {
            Some(&b) if b != a => {
                pairs.push((a, b));
                i += 2;
            }
            _ => {
                pairs.push((a, filler(a)));
                i += 1;
            }
        }
    }
    pairs
}

fn filler(letter: char) -> char {
    if letter == 'X' {
        'Y'
    } else {
        'X'
    }
}

/// Apply the Playfair rules to every digraph, moving `step` cells along a
/// shared row or column (1 to encrypt, 4 to decrypt).
fn substitute(text: &str, matrix: &PlayfairMatrix, step: usize) -> String {
    let letters = prepare_text(text);
    let mut out = String::with_capacity(letters.len() + 2);
    for (a, b) in digraphs(&letters) {
        // Prepared letters are always in the square.
        let (Some((ra, ca)), Some((rb, cb))) = (matrix.position(a), matrix.position(b)) else {
            continue;
        };
        let (x, y) = if ra == rb {
            (matrix.at(ra, ca + step), matrix.at(rb, cb + step))
        } else if ca == cb {
            (matrix.at(ra + step, ca), matrix.at(rb + step, cb))
        } else {
            (matrix.at(ra, cb), matrix.at(rb, ca))
        };
        out.push(x);
        out.push(y);
    }
    out
}
