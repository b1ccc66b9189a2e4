//! Outgoing mail configuration

use serde::{Deserialize, Serialize};

/// Mail configuration used by the confirmation and notification senders
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Sender address
    pub from_address: String,

    /// Base URL the user id is appended to when building confirmation links
    pub confirmation_base_url: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            from_address: String::from("no-reply@localhost"),
            confirmation_base_url: String::from("http://localhost:8080/api/v1/users/confirm"),
        }
    }
}

impl MailConfig {
    /// Build the confirmation link for a user id
    pub fn confirmation_link(&self, user_id: &str) -> String {
        format!("{}/{}", self.confirmation_base_url.trim_end_matches('/'), user_id)
    }
}
