//! Find-or-fail lookups shared by the use cases

use crate::domain::entities::{Expense, User};
use crate::domain::value_objects::Id;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{ExpenseRepository, UserRepository};

pub(crate) async fn user_or_fail<U>(users: &U, id: &Id) -> DomainResult<User>
where
    U: UserRepository + ?Sized,
{
    users.find_by_id(id).await?.ok_or_else(|| {
        tracing::debug!(user_id = %id, "User not found");
        DomainError::not_found("user")
    })
}

pub(crate) async fn expense_or_fail<E>(expenses: &E, id: &Id) -> DomainResult<Expense>
where
    E: ExpenseRepository + ?Sized,
{
    expenses.find_by_id(id).await?.ok_or_else(|| {
        tracing::debug!(expense_id = %id, "Expense not found");
        DomainError::not_found("expense")
    })
}
