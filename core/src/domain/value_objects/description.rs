//! Expense description

use expense_shared::sanitizer;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ValidationError;

pub const MIN_LENGTH: usize = 3;

/// Sanitized free text of at least three characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        let description = sanitizer::clean(value);

        if description.chars().count() < MIN_LENGTH {
            return Err(ValidationError::invalid(
                "description",
                "Description cannot be empty and must be at least 3 characters long.",
            ));
        }

        Ok(Description(description))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Description {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Description::new(&value)
    }
}

impl From<Description> for String {
    fn from(description: Description) -> Self {
        description.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
