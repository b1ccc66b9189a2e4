//! Unit tests for the authentication service

use expense_shared::config::JwtConfig;
use std::sync::Arc;

use crate::domain::status::{Role, UserStatus};
use crate::errors::{AuthError, DomainError};
use crate::services::auth::{AuthService, AuthenticateCommand};
use crate::services::token::JwtTokenIssuer;

use super::mocks::*;

fn service(users: Vec<crate::domain::entities::User>) -> AuthService<MockUserRepository, JwtTokenIssuer> {
    AuthService::new(
        Arc::new(MockUserRepository::with_users(users)),
        Arc::new(JwtTokenIssuer::new(JwtConfig::new("test-secret"))),
    )
}

fn credentials(email: &str, password: &str) -> AuthenticateCommand {
    AuthenticateCommand {
        email: email.to_string(),
        password: password.to_string(),
    }
}

fn assert_invalid_credentials(result: Result<impl std::fmt::Debug, DomainError>) {
    let err = result.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidCredentials)));
    assert_eq!(err.to_string(), "Authentication failed. Please check your credentials.");
}

#[tokio::test]
async fn test_authenticate_active_confirmed_user() {
    let user = stored_user("jane@x.com", Role::User, UserStatus::Active);
    let service = service(vec![user]);

    let token = service
        .authenticate(credentials("jane@x.com", TEST_PASSWORD))
        .await
        .unwrap();

    assert_eq!(token.token_type(), "Bearer");
    assert_eq!(token.expires_in(), 3600);
    assert!(!token.token().is_empty());
}

#[tokio::test]
async fn test_every_failure_is_indistinguishable() {
    let active = stored_user("active@x.com", Role::User, UserStatus::Active);
    let suspended = stored_user("suspended@x.com", Role::User, UserStatus::Suspended);
    let unconfirmed = unconfirmed_user("new@x.com");
    let service = service(vec![active, suspended, unconfirmed]);

    assert_invalid_credentials(service.authenticate(credentials("missing@x.com", TEST_PASSWORD)).await);
    assert_invalid_credentials(service.authenticate(credentials("active@x.com", "Wr0ng!Pass")).await);
    assert_invalid_credentials(service.authenticate(credentials("suspended@x.com", TEST_PASSWORD)).await);
    assert_invalid_credentials(service.authenticate(credentials("new@x.com", TEST_PASSWORD)).await);
    assert_invalid_credentials(service.authenticate(credentials("not-an-email", TEST_PASSWORD)).await);
    assert_invalid_credentials(service.authenticate(credentials("active@x.com", "short")).await);
}

#[tokio::test]
async fn test_active_but_unconfirmed_is_rejected() {
    let mut user = unconfirmed_user("new@x.com");
    user.activate().unwrap();
    let service = service(vec![user]);

    assert_invalid_credentials(service.authenticate(credentials("new@x.com", TEST_PASSWORD)).await);
}
