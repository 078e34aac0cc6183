//! Rail Fence zig-zag transposition.
//!
//! Characters are written diagonally down and up across `r` rails, then read
//! off rail by rail. The rail of position `i` follows the cycle
//! `0, 1, .., r-1, r-2, .., 1` with period `2(r-1)`.
//!
//! The cipher works on the raw character sequence; nothing is stripped.

use crate::{Cipher, CipherError, Key};

const NOT_AN_INTEGER: &str = "Rail Fence key must be an integer";
const TOO_FEW_RAILS: &str = "Rail Fence key must be an integer greater than 1";

/// Zig-zag transposition across a number of rails.
#[derive(Debug, Clone, Copy, Default)]
pub struct RailFenceCipher;

impl RailFenceCipher {
    /// Encrypt `text` across `rails` rails.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if `rails <= 1`.
    pub fn rail_fence_encrypt(&self, text: &str, rails: i64) -> Result<String, CipherError> {
        let chars: Vec<char> = text.chars().collect();
        let pattern = rail_pattern(chars.len(), checked_rails(rails)?);

        let mut rows: Vec<String> = vec![String::new(); pattern.rails];
        for (c, row) in chars.iter().zip(pattern.iter()) {
            rows[row].push(*c);
        }
        Ok(rows.concat())
    }

    /// Decrypt `text` that was encrypted across `rails` rails.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if `rails <= 1`.
    pub fn rail_fence_decrypt(&self, text: &str, rails: i64) -> Result<String, CipherError> {
        let chars: Vec<char> = text.chars().collect();
        let pattern = rail_pattern(chars.len(), checked_rails(rails)?);

        // How many characters each rail holds, then where each rail starts.
        let mut counts = vec![0usize; pattern.rails];
        for row in pattern.iter() {
            counts[row] += 1;
        }
        let mut cursors = Vec::with_capacity(pattern.rails);
        let mut start = 0;
        for count in &counts {
            cursors.push(start);
            start += count;
        }

        let mut out = String::with_capacity(text.len());
        for row in pattern.iter() {
            out.push(chars[cursors[row]]);
            cursors[row] += 1;
        }
        Ok(out)
    }
}

impl Cipher for RailFenceCipher {
    fn name(&self) -> &'static str {
        "railfence"
    }

    fn encrypt(&self, text: &str, key: &Key) -> Result<String, CipherError> {
        self.rail_fence_encrypt(text, key.integer(NOT_AN_INTEGER)?)
    }

    fn decrypt(&self, text: &str, key: &Key) -> Result<String, CipherError> {
        self.rail_fence_decrypt(text, key.integer(NOT_AN_INTEGER)?)
    }
}

fn checked_rails(rails: i64) -> Result<u64, CipherError> {
    if rails <= 1 {
        return Err(CipherError::invalid_key(TOO_FEW_RAILS));
    }
    Ok(rails as u64)
}

/// The zig-zag rail sequence for a text of `len` characters.
struct RailPattern {
    len: usize,
    rails: usize,
}

/// Build the pattern for `len` characters over `rails` rails.
///
/// More rails than characters never bounce, so the rail count is clamped to
/// the text length without changing the output.
fn rail_pattern(len: usize, rails: u64) -> RailPattern {
    let rails = usize::try_from(rails).unwrap_or(usize::MAX).min(len.max(2));
    RailPattern { len, rails }
}

impl RailPattern {
    /// Rail index of every position, in text order.
    fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        let period = 2 * (self.rails - 1);
        (0..self.len).map(move |i| {
            let p = i % period;
            if p < self.rails {
                p
            } else {
                period - p
            }
        })
    }
}
