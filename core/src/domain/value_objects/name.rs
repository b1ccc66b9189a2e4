//! Person name value object

use expense_shared::sanitizer;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ValidationError;

const MIN_LENGTH: usize = 3;
const MAX_LENGTH: usize = 150;

/// Letters-only name, normalized to title case
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        let cleaned = sanitizer::clean(value);
        let length = cleaned.chars().count();

        let letters_only = cleaned.chars().all(|c| c.is_alphabetic() || c == ' ');
        if !letters_only || !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(ValidationError::invalid(
                "name",
                "Name must be between 3 and 150 characters and contains only letters.",
            ));
        }

        Ok(Name(title_case(&cleaned)))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

fn title_case(value: &str) -> String {
    value
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

impl TryFrom<String> for Name {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Name::new(&value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
