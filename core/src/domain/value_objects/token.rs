//! Issued access token

use serde::Serialize;

use crate::errors::ValidationError;

/// Access token handed back by authentication
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    token: String,
    #[serde(rename = "type")]
    token_type: String,
    expires_in: i64,
}

impl Token {
    pub fn new(
        token: impl Into<String>,
        token_type: impl Into<String>,
        expires_in: i64,
    ) -> Result<Self, ValidationError> {
        let token = token.into();
        let token_type = token_type.into();

        if token.trim().is_empty() {
            return Err(empty("token"));
        }
        if token_type.trim().is_empty() {
            return Err(empty("type"));
        }
        if expires_in <= 0 {
            return Err(empty("expiresIn"));
        }

        Ok(Self {
            token,
            token_type,
            expires_in,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Lifetime in seconds
    pub fn expires_in(&self) -> i64 {
        self.expires_in
    }
}

fn empty(property: &'static str) -> ValidationError {
    ValidationError::invalid(property, format!("Property '{}' cannot be empty.", property))
}
