//! Shared utilities and common types for the expense tracker
//!
//! This crate provides functionality used across the workspace:
//! - Configuration types and loading
//! - Error response envelope and error codes
//! - Input sanitizing

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, Environment, JwtConfig, LogFormat, LoggingConfig,
    MailConfig, PasswordConfig,
};
pub use errors::{error_codes, ErrorResponse, IntoErrorResponse};
pub use utils::sanitizer;
