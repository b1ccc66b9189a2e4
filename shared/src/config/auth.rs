//! Authentication configuration: token signing and password hashing

use serde::{Deserialize, Serialize};

/// Secret shipped for local development only
pub const DEFAULT_JWT_SECRET: &str = "development-secret-please-change-in-production";

/// Longest accepted token lifetime (30 days)
pub const MAX_TTL_MINUTES: i64 = 60 * 24 * 30;

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token lifetime in minutes
    #[serde(default = "default_ttl_minutes")]
    pub ttl_minutes: i64,

    /// JWT issuer claim
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// Token type reported to clients
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            ttl_minutes: default_ttl_minutes(),
            issuer: default_issuer(),
            token_type: default_token_type(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token lifetime in minutes
    pub fn with_ttl_minutes(mut self, minutes: i64) -> Self {
        self.ttl_minutes = minutes;
        self
    }

    /// Token lifetime in seconds, as reported in `expires_in`
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_minutes.saturating_mul(60)
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordConfig {
    /// bcrypt work factor
    #[serde(default = "default_hash_cost")]
    pub hash_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            hash_cost: default_hash_cost(),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    #[serde(default)]
    pub jwt: JwtConfig,

    /// Password hashing configuration
    #[serde(default)]
    pub password: PasswordConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string());
        let ttl_minutes = std::env::var("JWT_TTL_MINUTES")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(default_ttl_minutes);

        Self {
            jwt: JwtConfig::new(secret).with_ttl_minutes(ttl_minutes),
            password: PasswordConfig::default(),
        }
    }
}

fn default_ttl_minutes() -> i64 {
    60
}

fn default_issuer() -> String {
    String::from("expense-tracker")
}

fn default_token_type() -> String {
    String::from("Bearer")
}

fn default_hash_cost() -> u32 {
    12
}
