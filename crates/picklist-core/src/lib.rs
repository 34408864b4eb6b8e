//! picklist-core - UI-agnostic sheet model, validation rules, and storage.

pub mod cell_ref;
pub mod error;
pub mod populate;
pub mod range;
pub mod sheet;
pub mod storage;
pub mod validation;
pub mod value;

pub use cell_ref::CellRef;
pub use error::{PicklistError, Result};
pub use populate::ListPopulator;
pub use range::RangeRef;
pub use sheet::{GridSheet, Sheet};
pub use validation::ValidationRule;
pub use value::Value;
