//! List population and dropdown binding.

use crate::cell_ref::CellRef;
use crate::error::{PicklistError, Result};
use crate::range::RangeRef;
use crate::sheet::Sheet;
use crate::validation::ValidationRule;
use crate::value::Value;

/// Writes a fixed sequence into a single-column range and exposes that
/// range as a restricted-choice input on a separate cell.
///
/// The sequence, its anchor cell, and the dropdown target are configuration;
/// [`ListPopulator::default`] gives the classic setup of 1..9 in A1:A9 with
/// the rule on B1.
pub struct ListPopulator {
    values: Vec<Value>,
    source: RangeRef,
    target: CellRef,
}

impl ListPopulator {
    /// Configure a populator. Fails with [`PicklistError::EmptyValueList`]
    /// if there is nothing to write, or [`PicklistError::InvalidRange`] if
    /// the sequence would run off the bottom of the addressable grid.
    pub fn new(values: Vec<Value>, anchor: CellRef, target: CellRef) -> Result<ListPopulator> {
        if values.iter().all(Value::is_empty) {
            return Err(PicklistError::EmptyValueList);
        }
        let source = RangeRef::column(anchor.col, anchor.row, values.len())?;
        Ok(ListPopulator {
            values,
            source,
            target,
        })
    }

    /// The column range the sequence occupies: the anchor's column, one row
    /// per value, growing downward. Rows below it are never touched.
    pub fn source_range(&self) -> RangeRef {
        self.source
    }

    pub fn target(&self) -> CellRef {
        self.target
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Populate the source range and attach the dropdown rule to the target.
    ///
    /// Each value is written in order, unconditionally overwriting prior
    /// contents; the range is then read back and its contents, exactly as
    /// read, become the permitted list attached to the target cell. The
    /// target's raw value is left alone; only its rule is replaced.
    ///
    /// Single attempt, no retries: the first rejected write aborts and the
    /// error surfaces to the caller. A failure after the range write leaves
    /// the range populated and the target unrestricted; rerunning after a
    /// success rewrites the same values and is idempotent.
    pub fn populate(&self, sheet: &mut dyn Sheet) -> Result<()> {
        for (cell, value) in self.source.cells().zip(self.values.iter()) {
            sheet.set_value(&cell, value.clone())?;
        }

        // The rule is built from what the sheet reads back, not from the
        // in-memory sequence: the permitted set must equal the range
        // contents at attachment time.
        let read_back = sheet.range_values(&self.source)?;
        let rule = ValidationRule::value_in_list(read_back)?;
        sheet.set_validation(&self.target, rule)
    }
}

impl Default for ListPopulator {
    fn default() -> Self {
        ListPopulator {
            values: (1..=9i64).map(Value::from).collect(),
            source: RangeRef::new(CellRef::new(0, 0), CellRef::new(0, 8)),
            target: CellRef::new(1, 0),
        }
    }
}
