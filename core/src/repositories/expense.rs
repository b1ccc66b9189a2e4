//! Expense repository trait

use async_trait::async_trait;

use crate::domain::entities::Expense;
use crate::domain::value_objects::Id;
use crate::errors::DomainError;

#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    async fn find_by_id(&self, id: &Id) -> Result<Option<Expense>, DomainError>;

    async fn save(&self, expense: Expense) -> Result<Expense, DomainError>;

    async fn update(&self, expense: Expense) -> Result<Expense, DomainError>;

    /// Delete by id, `Ok(false)` when nothing was stored under it
    async fn destroy(&self, id: &Id) -> Result<bool, DomainError>;
}
