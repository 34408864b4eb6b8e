//! CSV import/export for grids.

use crate::cell_ref::CellRef;
use crate::error::Result;
use crate::sheet::{GridSheet, Sheet};
use crate::value::Value;
use std::io::Write;
use std::path::Path;

/// Parse a CSV file into a grid, anchored at A1. Empty fields are skipped,
/// leaving their cells blank.
pub fn read_csv(path: &Path) -> Result<GridSheet> {
    let content = std::fs::read_to_string(path)?;
    let mut sheet = GridSheet::new();

    for (row, line) in content.lines().enumerate() {
        for (col, field) in parse_line(line).into_iter().enumerate() {
            let value = Value::from_field(&field);
            if value.is_empty() {
                continue;
            }
            sheet.set_value(&CellRef::new(col, row), value)?;
        }
    }

    Ok(sheet)
}

/// Parse a single CSV line, handling quoted fields and doubled quotes.
fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut field_was_quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else {
            match c {
                '"' => {
                    in_quotes = true;
                    field_was_quoted = true;
                }
                ',' => {
                    if field_was_quoted {
                        fields.push(current.clone());
                    } else {
                        fields.push(current.trim().to_string());
                    }
                    current = String::new();
                    field_was_quoted = false;
                }
                _ => current.push(c),
            }
        }
    }
    if field_was_quoted {
        fields.push(current);
    } else {
        fields.push(current.trim().to_string());
    }
    fields
}

/// Quote a field when its raw form would not survive a round trip.
fn escape_field(field: &str) -> String {
    let needs_quotes =
        field.contains(',') || field.contains('"') || field.contains('\n') || field != field.trim();
    if needs_quotes {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Export a grid as CSV, anchored at A1, bounds auto-detected from the
/// populated cells so a read back lands everything where it was.
pub fn write_csv(path: &Path, sheet: &GridSheet) -> Result<()> {
    let mut file = std::fs::File::create(path)?;

    let Some(bounds) = sheet.bounds() else {
        return Ok(());
    };

    for row in 0..=bounds.end().row {
        let mut fields = Vec::new();
        for col in 0..=bounds.end().col {
            let value = sheet.value(&CellRef::new(col, row))?;
            fields.push(escape_field(&value.to_string()));
        }
        writeln!(file, "{}", fields.join(","))?;
    }

    Ok(())
}
