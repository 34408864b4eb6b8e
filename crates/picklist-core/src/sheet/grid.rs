//! In-memory sheet implementation.

use super::Sheet;
use crate::cell_ref::CellRef;
use crate::error::{PicklistError, Result};
use crate::range::RangeRef;
use crate::validation::ValidationRule;
use crate::value::Value;
use std::collections::HashMap;

/// A sparse in-memory grid implementing [`Sheet`].
///
/// Ranges can be marked protected; value writes and validation attaches
/// landing inside a protected range are rejected, mirroring host-side
/// sheet protection.
#[derive(Default)]
pub struct GridSheet {
    cells: HashMap<CellRef, Value>,
    validations: HashMap<CellRef, ValidationRule>,
    protected: Vec<RangeRef>,
    modified: bool,
}

impl GridSheet {
    pub fn new() -> GridSheet {
        GridSheet::default()
    }

    /// Mark a range as protected; subsequent writes into it are rejected.
    pub fn protect(&mut self, range: RangeRef) {
        self.protected.push(range);
    }

    pub fn is_protected(&self, cell: &CellRef) -> bool {
        self.protected.iter().any(|r| r.contains(cell))
    }

    /// Whether any write has landed since construction.
    pub fn modified(&self) -> bool {
        self.modified
    }

    /// Iterate populated cells in unspecified order.
    pub fn cells(&self) -> impl Iterator<Item = (&CellRef, &Value)> {
        self.cells.iter()
    }

    /// The bounding range of all populated cells, if any.
    pub fn bounds(&self) -> Option<RangeRef> {
        let mut iter = self.cells.keys();
        let first = *iter.next()?;
        let (mut min, mut max) = (first, first);
        for cell in iter {
            min = CellRef::new(min.col.min(cell.col), min.row.min(cell.row));
            max = CellRef::new(max.col.max(cell.col), max.row.max(cell.row));
        }
        Some(RangeRef::new(min, max))
    }

    fn check_writable(&self, cell: &CellRef) -> Result<()> {
        if self.is_protected(cell) {
            return Err(PicklistError::WriteRejected {
                cell: cell.to_string(),
                reason: "cell is in a protected range".to_string(),
            });
        }
        Ok(())
    }
}

impl Sheet for GridSheet {
    fn value(&self, cell: &CellRef) -> Result<Value> {
        Ok(self.cells.get(cell).cloned().unwrap_or(Value::Empty))
    }

    fn set_value(&mut self, cell: &CellRef, value: Value) -> Result<()> {
        self.check_writable(cell)?;
        if value.is_empty() {
            self.cells.remove(cell);
        } else {
            self.cells.insert(*cell, value);
        }
        self.modified = true;
        Ok(())
    }

    fn range_values(&self, range: &RangeRef) -> Result<Vec<Value>> {
        Ok(range
            .cells()
            .map(|cell| self.cells.get(&cell).cloned().unwrap_or(Value::Empty))
            .collect())
    }

    fn set_validation(&mut self, cell: &CellRef, rule: ValidationRule) -> Result<()> {
        self.check_writable(cell)?;
        self.validations.insert(*cell, rule);
        self.modified = true;
        Ok(())
    }

    fn validation(&self, cell: &CellRef) -> Option<&ValidationRule> {
        self.validations.get(cell)
    }
}
