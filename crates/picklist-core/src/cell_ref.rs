//! Cell reference parsing and formatting.
//!
//! Provides bidirectional conversion between spreadsheet-style cell
//! references (e.g., "A1", "B2", "AA100") and zero-indexed column/row
//! coordinates.

use crate::error::{PicklistError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

fn a1_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?<letters>[A-Za-z]+)(?<digits>[0-9]+)$").unwrap())
}

/// A reference to a cell by column and row indices (0-indexed).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct CellRef {
    pub col: usize,
    pub row: usize,
}

impl CellRef {
    pub fn new(col: usize, row: usize) -> CellRef {
        CellRef { col, row }
    }

    /// Parse a cell reference from A1 notation (e.g., "A1", "B2", "AA10").
    pub fn parse(name: &str) -> Result<CellRef> {
        Self::parse_a1(name).ok_or_else(|| PicklistError::InvalidCellRef(name.to_string()))
    }

    fn parse_a1(name: &str) -> Option<CellRef> {
        let caps = a1_re().captures(name)?;
        let letters = &caps["letters"];
        let digits = &caps["digits"];

        let mut col_acc = 0usize;
        for c in letters.to_ascii_uppercase().bytes() {
            let digit = (c - b'A') as usize + 1;
            col_acc = col_acc.checked_mul(26)?.checked_add(digit)?;
        }
        let col = col_acc.checked_sub(1)?;

        let row = digits.parse::<usize>().ok()?.checked_sub(1)?;

        Some(CellRef::new(col, row))
    }

    /// The cell `rows` below this one, in the same column. `None` if the
    /// row index would overflow.
    pub fn offset_rows(&self, rows: usize) -> Option<CellRef> {
        Some(CellRef::new(self.col, self.row.checked_add(rows)?))
    }

    /// Convert a column index to spreadsheet letters (0 -> A, 25 -> Z, 26 -> AA).
    pub fn col_to_letters(col: usize) -> String {
        let mut result = String::new();
        let mut n = col as u128 + 1;
        while n > 0 {
            n -= 1;
            result.insert(0, (b'A' + (n % 26) as u8) as char);
            n /= 26;
        }
        result
    }
}

impl std::str::FromStr for CellRef {
    type Err = PicklistError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            CellRef::col_to_letters(self.col),
            self.row as u128 + 1
        )
    }
}
