//! In-memory `ExpenseRepository`

use async_trait::async_trait;
use std::sync::Arc;

use expense_core::{DomainError, Expense, ExpenseRepository, Id};

use super::store::InMemoryStore;

pub struct InMemoryExpenseRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryExpenseRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ExpenseRepository for InMemoryExpenseRepository {
    async fn find_by_id(&self, id: &Id) -> Result<Option<Expense>, DomainError> {
        Ok(self.store.read().await.expenses.get(id).cloned())
    }

    async fn save(&self, expense: Expense) -> Result<Expense, DomainError> {
        let mut state = self.store.write().await;

        // Owner foreign key
        if !state.users.contains_key(&expense.owner_id()) {
            return Err(DomainError::not_found("user"));
        }

        state.expenses.insert(expense.id(), expense.clone());
        Ok(expense)
    }

    async fn update(&self, expense: Expense) -> Result<Expense, DomainError> {
        let mut state = self.store.write().await;

        match state.expenses.get_mut(&expense.id()) {
            Some(stored) => {
                *stored = expense.clone();
                Ok(expense)
            }
            None => Err(DomainError::not_found("expense")),
        }
    }

    async fn destroy(&self, id: &Id) -> Result<bool, DomainError> {
        Ok(self.store.write().await.expenses.remove(id).is_some())
    }
}
