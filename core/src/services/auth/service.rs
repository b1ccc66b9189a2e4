//! Authentication service implementation

use serde::Deserialize;
use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::value_objects::{Email, Password, Token};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::traits::TokenIssuer;

/// Submitted credentials
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticateCommand {
    pub email: String,
    pub password: String,
}

/// Authentication service exchanging credentials for an access token
pub struct AuthService<U, I>
where
    U: UserRepository,
    I: TokenIssuer,
{
    /// User repository for credential lookup
    user_repository: Arc<U>,
    /// Token issuer for successful logins
    token_issuer: Arc<I>,
}

impl<U, I> AuthService<U, I>
where
    U: UserRepository,
    I: TokenIssuer,
{
    pub fn new(user_repository: Arc<U>, token_issuer: Arc<I>) -> Self {
        Self {
            user_repository,
            token_issuer,
        }
    }

    /// Authenticate a user and issue a token
    ///
    /// Every failure cause (malformed input, unknown email, wrong password,
    /// inactive account, unconfirmed email) yields the same
    /// `AuthError::InvalidCredentials`.
    pub async fn authenticate(&self, command: AuthenticateCommand) -> DomainResult<Token> {
        // Step 1: Parse credentials; malformed input is just a failed login
        let (email, candidate) = match (Email::new(&command.email), Password::plain(&command.password)) {
            (Ok(email), Ok(password)) => (email, password),
            _ => {
                tracing::debug!(reason = "malformed_input", "Authentication rejected");
                return Err(invalid_credentials());
            }
        };

        // Step 2: Check the account and password
        let user = self
            .user_repository
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                tracing::debug!(reason = "unknown_email", "Authentication rejected");
                invalid_credentials()
            })?;

        if let Some(reason) = rejection_reason(&user, &candidate) {
            tracing::warn!(
                user_id = %user.id(),
                reason,
                event = "authentication_failed",
                "Authentication rejected"
            );
            return Err(invalid_credentials());
        }

        // Step 3: Issue the token
        let token = self.token_issuer.create(&user).await?;

        tracing::info!(user_id = %user.id(), event = "user_authenticated", "User authenticated");

        Ok(token)
    }
}

fn rejection_reason(user: &User, candidate: &Password) -> Option<&'static str> {
    if !user.password().matches(candidate) {
        Some("wrong_password")
    } else if !user.is_active() {
        Some("inactive")
    } else if !user.is_email_already_confirmed() {
        Some("email_unconfirmed")
    } else {
        None
    }
}

fn invalid_credentials() -> DomainError {
    DomainError::Auth(AuthError::InvalidCredentials)
}
