//! Constrained-choice validation rules.

use crate::error::{PicklistError, Result};
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Restricts a cell to an explicit list of permitted values.
///
/// The permitted list is exactly what was read from the source range when
/// the rule was built, blanks excluded, read order preserved (most hosts
/// display the list in that order).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationRule {
    allowed: Vec<Value>,
}

impl ValidationRule {
    /// Build a rule permitting exactly the non-blank values given.
    ///
    /// Fails with [`PicklistError::EmptyValueList`] if nothing usable
    /// remains after dropping blanks.
    pub fn value_in_list<I>(values: I) -> Result<ValidationRule>
    where
        I: IntoIterator<Item = Value>,
    {
        let allowed: Vec<Value> = values.into_iter().filter(|v| !v.is_empty()).collect();
        if allowed.is_empty() {
            return Err(PicklistError::EmptyValueList);
        }
        Ok(ValidationRule { allowed })
    }

    /// Whether manual entry of `value` would be accepted.
    pub fn allows(&self, value: &Value) -> bool {
        self.allowed.contains(value)
    }

    pub fn allowed(&self) -> &[Value] {
        &self.allowed
    }
}
