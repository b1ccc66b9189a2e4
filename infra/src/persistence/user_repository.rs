//! In-memory `UserRepository`

use async_trait::async_trait;
use std::sync::Arc;

use expense_core::{DomainError, Email, Id, User, UserError, UserRepository};

use super::store::InMemoryStore;

pub struct InMemoryUserRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryUserRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &Id) -> Result<Option<User>, DomainError> {
        Ok(self.store.read().await.users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        let state = self.store.read().await;
        Ok(state.users.values().find(|u| u.email() == email).cloned())
    }

    async fn save(&self, user: User) -> Result<User, DomainError> {
        let mut state = self.store.write().await;

        // Unique email, as a database constraint would enforce
        if state.users.values().any(|u| u.email() == user.email()) {
            return Err(UserError::EmailAlreadyExists.into());
        }

        state.users.insert(user.id(), user.clone());
        tracing::debug!(user_id = %user.id(), "User saved");
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut state = self.store.write().await;

        if !state.users.contains_key(&user.id()) {
            return Err(DomainError::not_found("user"));
        }
        if state
            .users
            .values()
            .any(|u| u.id() != user.id() && u.email() == user.email())
        {
            return Err(UserError::EmailAlreadyExists.into());
        }

        state.users.insert(user.id(), user.clone());
        tracing::debug!(user_id = %user.id(), "User updated");
        Ok(user)
    }

    async fn confirm_email(&self, user: &User) -> Result<bool, DomainError> {
        let mut state = self.store.write().await;

        match state.users.get_mut(&user.id()) {
            Some(stored) => {
                *stored = user.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
