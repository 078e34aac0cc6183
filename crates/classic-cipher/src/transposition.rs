//! Columnar transposition.
//!
//! Text is written row by row into a grid of `c` columns (the last row may be
//! short) and read back column by column. Works on the raw character
//! sequence; nothing is stripped.

use crate::{Cipher, CipherError, Key};

const INVALID_KEY: &str = "Key must be an integer";

/// Columnar transposition keyed by a column count.
///
/// Column counts of one or less describe a single column, which leaves the
/// text unchanged. Rejecting them is left to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct TranspositionCipher;

impl TranspositionCipher {
    /// Encrypt `text` using `columns` columns.
    pub fn encrypt_text(&self, text: &str, columns: i64) -> String {
        let chars: Vec<char> = text.chars().collect();
        let columns = effective_columns(chars.len(), columns);

        let mut out = String::with_capacity(text.len());
        for col in 0..columns {
            out.extend(chars.iter().skip(col).step_by(columns));
        }
        out
    }

    /// Decrypt `text` that was encrypted using `columns` columns.
    pub fn decrypt_text(&self, text: &str, columns: i64) -> String {
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        let columns = effective_columns(len, columns);
        let rows = len.div_ceil(columns);
        // Columns at the right end of the grid miss their last-row cell.
        let short = columns * rows - len;

        let mut grid = vec!['\0'; len];
        let mut cipher = chars.into_iter();
        for col in 0..columns {
            let height = if col < columns - short { rows } else { rows - 1 };
            for row in 0..height {
                if let Some(c) = cipher.next() {
                    grid[row * columns + col] = c;
                }
            }
        }
        grid.into_iter().collect()
    }
}

impl Cipher for TranspositionCipher {
    fn name(&self) -> &'static str {
        "transposition"
    }

    fn encrypt(&self, text: &str, key: &Key) -> Result<String, CipherError> {
        Ok(self.encrypt_text(text, key.integer(INVALID_KEY)?))
    }

    fn decrypt(&self, text: &str, key: &Key) -> Result<String, CipherError> {
        Ok(self.decrypt_text(text, key.integer(INVALID_KEY)?))
    }
}

/// Clamp the column count to `1..=len`.
///
/// A grid wider than the text holds a single row, which reads back unchanged,
/// so clamping never alters the output.
fn effective_columns(len: usize, columns: i64) -> usize {
    let columns = usize::try_from(columns).unwrap_or(0);
    columns.min(len).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_columns_in_order() {
        // HELL
        // OWOR
        // LD
        assert_eq!(TranspositionCipher.encrypt_text("HELLOWORLD", 4), "HOLEWDLOLR");
        assert_eq!(TranspositionCipher.decrypt_text("HOLEWDLOLR", 4), "HELLOWORLD");
    }

    #[test]
    fn round_trips_every_length_up_to_twenty() {
        let source = "HELLOWORLDHELLOWORLD";
        for len in 0..=20 {
            let text = &source[..len];
            let ct = TranspositionCipher.encrypt_text(text, 4);
            assert_eq!(ct.len(), len);
            assert_eq!(TranspositionCipher.decrypt_text(&ct, 4), text, "len {len}");
        }
    }

    #[test]
    fn round_trips_many_column_counts() {
        let text = "Attack the east wall at dawn; bring 12 ladders.";
        for columns in 1..60 {
            let ct = TranspositionCipher.encrypt_text(text, columns);
            assert_eq!(TranspositionCipher.decrypt_text(&ct, columns), text, "columns {columns}");
        }
    }

    #[test]
    fn empty_and_single_character() {
        for columns in [-1, 0, 1, 4] {
            assert_eq!(TranspositionCipher.encrypt_text("", columns), "");
            assert_eq!(TranspositionCipher.decrypt_text("", columns), "");
            assert_eq!(TranspositionCipher.encrypt_text("Q", columns), "Q");
            assert_eq!(TranspositionCipher.decrypt_text("Q", columns), "Q");
        }
    }

    #[test]
    fn degenerate_column_counts_are_identity() {
        for columns in [i64::MIN, -3, 0, 1] {
            assert_eq!(TranspositionCipher.encrypt_text("HELLO", columns), "HELLO");
        }
        assert_eq!(TranspositionCipher.encrypt_text("HELLO", i64::MAX), "HELLO");
    }

    #[test]
    fn keeps_non_letters() {
        let ct = TranspositionCipher.encrypt_text("a b,c", 2);
        assert_eq!(ct, "abc ,");
    }

    #[test]
    fn non_numeric_key_rejected() {
        assert!(TranspositionCipher.encrypt("HELLO", &Key::from("four")).is_err());
        assert_eq!(
            TranspositionCipher.encrypt("HELLO", &Key::from("2")).unwrap(),
            "HLOEL"
        );
    }
}
