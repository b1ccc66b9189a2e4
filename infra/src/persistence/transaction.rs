//! Snapshot-based transaction manager
//!
//! Transactions are serialized: `begin` waits for the previous transaction
//! to finish, then snapshots the store. `rollback` restores the snapshot.
//! A transaction whose caller went away is undone through `abandon`; if the
//! store is busy at that moment the restore happens at the next `begin`.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::OwnedMutexGuard;

use expense_core::{DomainError, DomainResult, TransactionManager};

use super::store::{InMemoryStore, StoreState};

struct ActiveTransaction {
    snapshot: StoreState,
    _guard: OwnedMutexGuard<()>,
}

pub struct InMemoryTransactionManager {
    store: Arc<InMemoryStore>,
    serial: Arc<tokio::sync::Mutex<()>>,
    active: Mutex<Option<ActiveTransaction>>,
    deferred_restore: Mutex<Option<StoreState>>,
}

impl InMemoryTransactionManager {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self {
            store,
            serial: Arc::new(tokio::sync::Mutex::new(())),
            active: Mutex::new(None),
            deferred_restore: Mutex::new(None),
        }
    }

    pub fn in_transaction(&self) -> bool {
        self.active().is_some()
    }

    fn active(&self) -> MutexGuard<'_, Option<ActiveTransaction>> {
        self.active.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn deferred_restore(&self) -> MutexGuard<'_, Option<StoreState>> {
        self.deferred_restore
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn finish(&self) -> DomainResult<ActiveTransaction> {
        self.active().take().ok_or_else(|| DomainError::Transaction {
            message: "No active transaction".to_string(),
        })
    }
}

#[async_trait]
impl TransactionManager for InMemoryTransactionManager {
    async fn begin(&self) -> DomainResult<()> {
        let guard = self.serial.clone().lock_owned().await;

        let pending = self.deferred_restore().take();
        if let Some(snapshot) = pending {
            self.store.restore(snapshot).await;
            tracing::debug!("Abandoned transaction rolled back");
        }

        let snapshot = self.store.snapshot().await;
        *self.active() = Some(ActiveTransaction {
            snapshot,
            _guard: guard,
        });
        tracing::trace!("Transaction started");
        Ok(())
    }

    async fn commit(&self) -> DomainResult<()> {
        self.finish()?;
        tracing::trace!("Transaction committed");
        Ok(())
    }

    async fn rollback(&self) -> DomainResult<()> {
        let transaction = self.finish()?;
        self.store.restore(transaction.snapshot).await;
        tracing::debug!("Transaction rolled back");
        Ok(())
    }

    fn abandon(&self) {
        let Some(transaction) = self.active().take() else {
            return;
        };

        if let Err(snapshot) = self.store.try_restore(transaction.snapshot) {
            *self.deferred_restore() = Some(snapshot);
        }
        tracing::warn!(
            event = "transaction_abandoned",
            "Transaction dropped before completion, changes discarded"
        );
        // Dropping `transaction` releases the serial lock
    }
}
