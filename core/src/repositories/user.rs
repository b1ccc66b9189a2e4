//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;

use crate::domain::entities::User;
use crate::domain::value_objects::{Email, Id};
use crate::errors::DomainError;

/// Repository trait for User persistence operations
///
/// Lookups return `Ok(None)` on a miss; use cases turn that into
/// `DomainError::NotFound`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by id
    async fn find_by_id(&self, id: &Id) -> Result<Option<User>, DomainError>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError>;

    /// Persist a new user
    async fn save(&self, user: User) -> Result<User, DomainError>;

    /// Persist changes to an existing user
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Persist the confirmed email and the resulting status
    ///
    /// # Returns
    /// * `Ok(true)` - The stored user was updated
    /// * `Ok(false)` - No stored user matched
    async fn confirm_email(&self, user: &User) -> Result<bool, DomainError>;
}
