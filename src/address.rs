//! A1-notation cell addresses.
//!
//! Spreadsheet coordinates are written as column letters followed by a
//! 1-based row number ("A1", "Z10", "AA3"). Internally everything is
//! 0-based (row, column) pairs.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A single cell coordinate, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellAddress {
    /// 0-based row index ("A1" has row 0).
    pub row: usize,
    /// 0-based column index ("A1" has column 0).
    pub col: usize,
}

impl CellAddress {
    /// Create an address from 0-based row and column indices.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    /// Parse an A1-notation address. Absolute markers ("$A$1") and
    /// lowercase letters are accepted.
    fn from_str(s: &str) -> Result<Self> {
        let cleaned = s.trim().replace('$', "");

        let letters_end = cleaned
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| Error::InvalidAddress(s.to_string()))?;
        if letters_end == 0 {
            return Err(Error::InvalidAddress(s.to_string()));
        }

        let col = column_index(&cleaned[..letters_end])
            .ok_or_else(|| Error::InvalidAddress(s.to_string()))?;
        let row: usize = cleaned[letters_end..]
            .parse()
            .map_err(|_| Error::InvalidAddress(s.to_string()))?;
        if row == 0 {
            // Row numbers start at 1
            return Err(Error::InvalidAddress(s.to_string()));
        }

        Ok(Self { row: row - 1, col })
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_label(self.col), self.row + 1)
    }
}

/// Convert column letters to a 0-based index (A=0, B=1, ..., Z=25, AA=26).
fn column_index(letters: &str) -> Option<usize> {
    let mut col = 0usize;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        col = col * 26 + (c.to_ascii_uppercase() as usize - 'A' as usize + 1);
    }
    Some(col - 1)
}

/// Convert a 0-based column index to letters (0="A", 25="Z", 26="AA").
pub fn column_label(col: usize) -> String {
    let mut label = String::new();
    let mut n = col + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        label.insert(0, (b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    label
}
