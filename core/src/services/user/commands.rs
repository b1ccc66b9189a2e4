//! Input for the user use cases, as received from the transport layer

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUserCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Partial profile update; `None` keeps the stored value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserCommand {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}
