//! The 5×5 Playfair key square.

use serde::Serialize;

use crate::key::is_alphabetic_key;
use crate::CipherError;

pub(super) const INVALID_KEY: &str = "Playfair key must contain only alphabetic characters";

/// Side length of the key square.
pub const SIZE: usize = 5;

/// A 5×5 grid of 25 distinct uppercase letters with I and J merged.
///
/// Built fresh from a keyword on every use; two matrices built from the same
/// key compare equal but are independent values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PlayfairMatrix {
    grid: [[char; SIZE]; SIZE],
}

impl PlayfairMatrix {
    /// Build the key square for `key`.
    ///
    /// The key is uppercased, every `J` becomes `I`, repeated letters keep
    /// their first occurrence, and the rest of the alphabet (without `J`)
    /// fills the remaining cells in order.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if `key` is empty or contains
    /// anything but ASCII letters.
    pub fn build(key: &str) -> Result<Self, CipherError> {
        if !is_alphabetic_key(key) {
            return Err(CipherError::invalid_key(INVALID_KEY));
        }

        let mut seen = [false; 26];
        let mut letters = Vec::with_capacity(SIZE * SIZE);
        let keyed = key.bytes().map(|b| normalise(b.to_ascii_uppercase()));
        for b in keyed.chain(b'A'..=b'Z').filter(|&b| b != b'J') {
            let slot = &mut seen[(b - b'A') as usize];
            if !*slot {
                *slot = true;
                letters.push(b as char);
            }
        }

        let mut grid = [[' '; SIZE]; SIZE];
        for (i, c) in letters.into_iter().enumerate() {
            grid[i / SIZE][i % SIZE] = c;
        }
        Ok(Self { grid })
    }

    /// The letter at `row`, `col`. Both wrap modulo 5.
    pub fn at(&self, row: usize, col: usize) -> char {
        self.grid[row % SIZE][col % SIZE]
    }

    /// Row and column of `letter`, or `None` for `J` and non-letters.
    pub fn position(&self, letter: char) -> Option<(usize, usize)> {
        self.grid.iter().enumerate().find_map(|(r, row)| {
            row.iter().position(|&c| c == letter).map(|col| (r, col))
        })
    }

    /// The grid rows, top to bottom.
    pub fn rows(&self) -> &[[char; SIZE]; SIZE] {
        &self.grid
    }
}

fn normalise(b: u8) -> u8 {
    if b == b'J' {
        b'I'
    } else {
        b
    }
}
