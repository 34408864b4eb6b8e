//! Range parsing, normalization, and iteration.

use crate::cell_ref::CellRef;
use crate::error::{PicklistError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rectangular cell region, normalized so `start` is the top-left corner.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RangeRef {
    start: CellRef,
    end: CellRef,
}

impl RangeRef {
    /// Build a range from two corner cells, in any order.
    pub fn new(a: CellRef, b: CellRef) -> RangeRef {
        RangeRef {
            start: CellRef::new(a.col.min(b.col), a.row.min(b.row)),
            end: CellRef::new(a.col.max(b.col), a.row.max(b.row)),
        }
    }

    /// Parse A1 range notation ("A1:A9"); a bare cell ("A1") is a 1x1 range.
    pub fn parse(name: &str) -> Result<RangeRef> {
        match name.split_once(':') {
            Some((first, second)) => {
                let start = CellRef::parse(first)
                    .map_err(|_| PicklistError::InvalidRange(name.to_string()))?;
                let end = CellRef::parse(second)
                    .map_err(|_| PicklistError::InvalidRange(name.to_string()))?;
                Ok(RangeRef::new(start, end))
            }
            None => {
                let cell = CellRef::parse(name)
                    .map_err(|_| PicklistError::InvalidRange(name.to_string()))?;
                Ok(RangeRef::new(cell, cell))
            }
        }
    }

    /// A single-column range: `rows` cells starting at (`col`, `first_row`),
    /// clamped to at least one row. Fails if the bottom row index would
    /// overflow.
    pub fn column(col: usize, first_row: usize, rows: usize) -> Result<RangeRef> {
        let rows = rows.max(1);
        let last_row = first_row.checked_add(rows - 1).ok_or_else(|| {
            PicklistError::InvalidRange(format!(
                "{} spanning {} rows",
                CellRef::new(col, first_row),
                rows
            ))
        })?;
        Ok(RangeRef::new(
            CellRef::new(col, first_row),
            CellRef::new(col, last_row),
        ))
    }

    pub fn start(&self) -> CellRef {
        self.start
    }

    pub fn end(&self) -> CellRef {
        self.end
    }

    pub fn rows(&self) -> usize {
        self.end.row - self.start.row + 1
    }

    pub fn cols(&self) -> usize {
        self.end.col - self.start.col + 1
    }

    pub fn contains(&self, cell: &CellRef) -> bool {
        (self.start.col..=self.end.col).contains(&cell.col)
            && (self.start.row..=self.end.row).contains(&cell.row)
    }

    /// Iterate the range's cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellRef> + '_ {
        let (start, end) = (self.start, self.end);
        (start.row..=end.row)
            .flat_map(move |row| (start.col..=end.col).map(move |col| CellRef::new(col, row)))
    }
}

impl fmt::Display for RangeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}:{}", self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RangeRef;
    use crate::cell_ref::CellRef;

    #[test]
    fn test_parse_and_display() {
        let range = RangeRef::parse("A1:A9").unwrap();
        assert_eq!(range.start(), CellRef::new(0, 0));
        assert_eq!(range.end(), CellRef::new(0, 8));
        assert_eq!(range.to_string(), "A1:A9");
    }

    #[test]
    fn test_parse_bare_cell_is_unit_range() {
        let range = RangeRef::parse("B1").unwrap();
        assert_eq!(range.rows(), 1);
        assert_eq!(range.cols(), 1);
        assert_eq!(range.to_string(), "B1");
    }

    #[test]
    fn test_corners_are_normalized() {
        let range = RangeRef::parse("C5:A1").unwrap();
        assert_eq!(range.to_string(), "A1:C5");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for name in ["", ":", "A1:", ":B2", "A1:B2:C3", "A0:A9"] {
            assert!(RangeRef::parse(name).is_err(), "accepted {:?}", name);
        }
    }

    #[test]
    fn test_cells_row_major_order() {
        let range = RangeRef::parse("A1:B2").unwrap();
        let names: Vec<String> = range.cells().map(|c| c.to_string()).collect();
        assert_eq!(names, ["A1", "B1", "A2", "B2"]);
    }

    #[test]
    fn test_column_constructor() {
        let range = RangeRef::column(0, 0, 9).unwrap();
        assert_eq!(range.to_string(), "A1:A9");
        assert_eq!(range.rows(), 9);
        assert!(range.contains(&CellRef::new(0, 4)));
        assert!(!range.contains(&CellRef::new(0, 9)));
        assert!(!range.contains(&CellRef::new(1, 0)));
    }

    #[test]
    fn test_column_row_overflow_is_an_error() {
        use crate::error::PicklistError;
        let result = RangeRef::column(0, usize::MAX, 3);
        assert!(matches!(result, Err(PicklistError::InvalidRange(_))));
    }
}
