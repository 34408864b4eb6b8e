//! Sheet import/export.
//!
//! CSV is a convenience surface for seeding and inspecting grids; it
//! carries cell values only. Validation rules do not persist.

mod csv;

pub use csv::{read_csv, write_csv};
