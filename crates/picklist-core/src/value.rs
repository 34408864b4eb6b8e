//! Scalar cell values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar cell content, as written to or read back from a sheet.
///
/// `Empty` is what a blank cell reads back as in a bulk range read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
}

impl Value {
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    /// Parse a raw text field into the most specific value it denotes.
    ///
    /// Numeric-looking fields become numbers, except strings with leading
    /// zeros (e.g., "007") which stay text. "true"/"false" become booleans.
    pub fn from_field(field: &str) -> Value {
        if field.is_empty() {
            return Value::Empty;
        }

        match field {
            "true" | "TRUE" => return Value::Bool(true),
            "false" | "FALSE" => return Value::Bool(false),
            _ => {}
        }

        // Preserve strings that look like numbers but have leading zeros
        // (e.g., "007"), unless they're just "0" or start with "0.".
        if field.starts_with('0')
            && field.len() > 1
            && !field.starts_with("0.")
            && field.chars().nth(1).is_some_and(|c| c.is_ascii_digit())
        {
            return Value::Text(field.to_string());
        }

        if let Ok(n) = field.parse::<f64>() {
            return Value::Number(n);
        }

        Value::Text(field.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Number(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Text(s.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Empty => Ok(()),
            Value::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::Text(s) => write!(f, "{}", s),
            Value::Bool(true) => write!(f, "TRUE"),
            Value::Bool(false) => write!(f, "FALSE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn test_from_field_numbers_and_text() {
        assert_eq!(Value::from_field("42"), Value::Number(42.0));
        assert_eq!(Value::from_field("-1.5"), Value::Number(-1.5));
        assert_eq!(Value::from_field("hello"), Value::Text("hello".to_string()));
        assert_eq!(Value::from_field(""), Value::Empty);
    }

    #[test]
    fn test_from_field_preserves_leading_zeros() {
        assert_eq!(Value::from_field("007"), Value::Text("007".to_string()));
        assert_eq!(Value::from_field("0"), Value::Number(0.0));
        assert_eq!(Value::from_field("0.5"), Value::Number(0.5));
    }

    #[test]
    fn test_from_field_booleans() {
        assert_eq!(Value::from_field("true"), Value::Bool(true));
        assert_eq!(Value::from_field("FALSE"), Value::Bool(false));
    }

    #[test]
    fn test_display_integers_without_decimals() {
        assert_eq!(Value::Number(9.0).to_string(), "9");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Bool(true).to_string(), "TRUE");
        assert_eq!(Value::Empty.to_string(), "");
    }
}
