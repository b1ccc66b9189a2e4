//! Collaborator contracts the use cases depend on besides repositories.

use async_trait::async_trait;

use crate::domain::entities::User;
use crate::domain::events::{DomainEvent, ExpenseWasRegistered};
use crate::domain::value_objects::Token;
use crate::errors::DomainResult;

/// Fire-and-forget event publication
#[async_trait]
pub trait EventDispatcher: Send + Sync {
    async fn dispatch(&self, event: DomainEvent);
}

/// Sends the email-confirmation message to a newly registered user
#[async_trait]
pub trait ConfirmationMailer: Send + Sync {
    async fn send(&self, user: &User) -> DomainResult<()>;
}

/// Issues access tokens for authenticated users
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    async fn create(&self, user: &User) -> DomainResult<Token>;
}

/// Tells an owner their expense was registered
#[async_trait]
pub trait ExpenseNotifier: Send + Sync {
    async fn expense_registered(&self, event: &ExpenseWasRegistered) -> DomainResult<()>;
}
