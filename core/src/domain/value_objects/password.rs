//! Password value object
//!
//! A password is either a bcrypt hash (the default, produced on construction)
//! or, when built with [`Password::plain`], a validated plaintext used only to
//! carry freshly submitted credentials to [`Password::matches`].

use constant_time_eq::constant_time_eq;
use std::fmt;

use crate::errors::ValidationError;

/// Minimum password length
pub const MIN_LENGTH: usize = 8;

/// Work factor used by [`Password::new`]
pub const DEFAULT_HASH_COST: u32 = bcrypt::DEFAULT_COST;

const RULES_MESSAGE: &str = "Password must be at least 8 characters long and include at least one uppercase letter, one lowercase letter, one digit, and one special character.";

#[derive(Clone)]
enum Secret {
    Hashed(String),
    Plain(String),
}

#[derive(Clone)]
pub struct Password {
    secret: Secret,
}

impl Password {
    /// Validate and hash a plaintext password
    pub fn new(plain: &str) -> Result<Self, ValidationError> {
        Self::with_cost(plain, DEFAULT_HASH_COST)
    }

    /// Validate and hash with an explicit bcrypt work factor
    pub fn with_cost(plain: &str, cost: u32) -> Result<Self, ValidationError> {
        validate(plain)?;

        let hash = bcrypt::hash(plain, cost)
            .map_err(|e| ValidationError::invalid("password", format!("Password could not be hashed: {}", e)))?;

        Ok(Self {
            secret: Secret::Hashed(hash),
        })
    }

    /// Validate a plaintext password and keep it unhashed
    pub fn plain(plain: &str) -> Result<Self, ValidationError> {
        validate(plain)?;

        Ok(Self {
            secret: Secret::Plain(plain.to_string()),
        })
    }

    /// Rehydrate a stored bcrypt hash
    pub fn from_hash(hash: impl Into<String>) -> Result<Self, ValidationError> {
        let hash = hash.into();
        if !hash.starts_with("$2") || hash.len() != 60 {
            return Err(ValidationError::invalid("password", "Invalid password hash given."));
        }

        Ok(Self {
            secret: Secret::Hashed(hash),
        })
    }

    pub fn is_hashed(&self) -> bool {
        matches!(self.secret, Secret::Hashed(_))
    }

    /// The stored hash, for persistence
    pub fn hash(&self) -> Option<&str> {
        match &self.secret {
            Secret::Hashed(hash) => Some(hash),
            Secret::Plain(_) => None,
        }
    }

    /// Check a candidate plaintext against this password
    pub fn verify(&self, candidate: &str) -> bool {
        match &self.secret {
            Secret::Hashed(hash) => bcrypt::verify(candidate, hash).unwrap_or(false),
            Secret::Plain(plain) => constant_time_eq(plain.as_bytes(), candidate.as_bytes()),
        }
    }

    /// Check submitted credentials; only an unhashed candidate can match
    pub fn matches(&self, candidate: &Password) -> bool {
        match &candidate.secret {
            Secret::Plain(plain) => self.verify(plain),
            Secret::Hashed(_) => false,
        }
    }
}

fn validate(plain: &str) -> Result<(), ValidationError> {
    let long_enough = plain.chars().count() >= MIN_LENGTH;
    let has_upper = plain.chars().any(char::is_uppercase);
    let has_lower = plain.chars().any(char::is_lowercase);
    let has_digit = plain.chars().any(|c| c.is_ascii_digit());
    let has_symbol = plain.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace());

    if long_enough && has_upper && has_lower && has_digit && has_symbol {
        Ok(())
    } else {
        Err(ValidationError::invalid("password", RULES_MESSAGE))
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_hashed() { "hashed" } else { "plain" };
        f.debug_struct("Password").field("kind", &kind).finish_non_exhaustive()
    }
}
