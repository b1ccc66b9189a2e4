//! Credential authentication

mod service;

pub use service::{AuthService, AuthenticateCommand};
