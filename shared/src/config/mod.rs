//! Configuration module with business-specific sub-modules
//!
//! - `auth` - Token signing and password hashing configuration
//! - `environment` - Environment detection and logging configuration
//! - `mail` - Outgoing mail configuration

pub mod auth;
pub mod environment;
pub mod mail;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::{AuthConfig, JwtConfig, PasswordConfig, MAX_TTL_MINUTES};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use mail::MailConfig;

/// Errors raised while assembling the application configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Mail configuration
    #[serde(default)]
    pub mail: MailConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            auth: AuthConfig::default(),
            logging: LoggingConfig::for_environment(env),
            mail: MailConfig::default(),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            auth: AuthConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Development),
            mail: MailConfig::default(),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            auth: AuthConfig::from_env(),
            logging: LoggingConfig::for_environment(Environment::Production),
            mail: MailConfig::default(),
        }
    }

    /// Preset configuration from environment
    pub fn from_env() -> Self {
        let env = Environment::from_env();
        match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => {
                let mut config = Self::development();
                config.environment = Environment::Staging;
                config.auth = AuthConfig::from_env();
                config.logging = LoggingConfig::for_environment(Environment::Staging);
                config
            }
        }
    }

    /// Load configuration: `.env`, the environment preset, an optional
    /// `config/<environment>.toml` file and `APP__`-prefixed variables,
    /// later sources overriding earlier ones
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let preset = Self::from_env();
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&preset)?)
            .add_source(config::File::with_name(preset.environment.config_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that must never reach production
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err(ConfigError::Invalid(
                "JWT secret must be set in production".to_string(),
            ));
        }
        if !(1..=MAX_TTL_MINUTES).contains(&self.auth.jwt.ttl_minutes) {
            return Err(ConfigError::Invalid(format!(
                "JWT ttl_minutes must be between 1 and {}",
                MAX_TTL_MINUTES
            )));
        }
        Ok(())
    }
}
