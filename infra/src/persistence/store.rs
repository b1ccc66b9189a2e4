//! Shared in-memory state

use std::collections::HashMap;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use expense_core::{Expense, Id, User};

#[derive(Debug, Clone, Default)]
pub(crate) struct StoreState {
    pub(crate) users: HashMap<Id, User>,
    pub(crate) expenses: HashMap<Id, Expense>,
}

/// Backing store for the in-memory repositories
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<StoreState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().await
    }

    pub(crate) async fn snapshot(&self) -> StoreState {
        self.state.read().await.clone()
    }

    pub(crate) async fn restore(&self, snapshot: StoreState) {
        *self.state.write().await = snapshot;
    }

    /// Restore without waiting; hands the snapshot back if the store is busy
    pub(crate) fn try_restore(&self, snapshot: StoreState) -> Result<(), StoreState> {
        match self.state.try_write() {
            Ok(mut state) => {
                *state = snapshot;
                Ok(())
            }
            Err(_) => Err(snapshot),
        }
    }

    pub async fn user_count(&self) -> usize {
        self.state.read().await.users.len()
    }

    pub async fn expense_count(&self) -> usize {
        self.state.read().await.expenses.len()
    }
}
