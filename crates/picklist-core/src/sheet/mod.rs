//! The sheet host abstraction.
//!
//! The spreadsheet is an external collaborator reached through a narrow
//! trait: cell-level get/set, bulk range reads, and validation attachment.
//! Callers take `&mut dyn Sheet` instead of reaching into ambient host
//! state, so a fake grid can stand in for a live host under test.

mod grid;

pub use grid::GridSheet;

use crate::cell_ref::CellRef;
use crate::error::Result;
use crate::range::RangeRef;
use crate::validation::ValidationRule;
use crate::value::Value;

pub trait Sheet {
    /// Read a single cell. Blank cells read back as [`Value::Empty`].
    fn value(&self, cell: &CellRef) -> Result<Value>;

    /// Write a single cell, unconditionally overwriting prior contents.
    fn set_value(&mut self, cell: &CellRef, value: Value) -> Result<()>;

    /// Read a rectangular range in row-major order, one value per cell.
    fn range_values(&self, range: &RangeRef) -> Result<Vec<Value>>;

    /// Attach a validation rule to a cell, replacing any prior rule there.
    /// The cell's raw value is not touched.
    fn set_validation(&mut self, cell: &CellRef, rule: ValidationRule) -> Result<()>;

    /// The rule currently attached to a cell, if any.
    fn validation(&self, cell: &CellRef) -> Option<&ValidationRule>;
}
