//! Transaction boundary for use cases
//!
//! Use cases never call `begin`/`commit`/`rollback` directly; they wrap
//! their mutating work in [`atomic`].

use async_trait::async_trait;
use std::future::Future;

use crate::errors::DomainResult;

/// Unit-of-work primitive provided by the persistence layer
#[async_trait]
pub trait TransactionManager: Send + Sync {
    async fn begin(&self) -> DomainResult<()>;

    async fn commit(&self) -> DomainResult<()>;

    async fn rollback(&self) -> DomainResult<()>;

    /// Undo a transaction whose caller was dropped before commit or rollback
    ///
    /// Runs from `Drop`, so it cannot await. A no-op when no transaction is
    /// open.
    fn abandon(&self) {}
}

/// Calls `abandon` unless the transaction reached commit or rollback
struct AbandonOnDrop<'a, M: TransactionManager + ?Sized> {
    manager: &'a M,
    armed: bool,
}

impl<M: TransactionManager + ?Sized> Drop for AbandonOnDrop<'_, M> {
    fn drop(&mut self) {
        if self.armed {
            self.manager.abandon();
        }
    }
}

/// Execute a closure within a transaction scope
///
/// Commits when the closure returns `Ok`. On `Err` the transaction is
/// rolled back and the closure's error is returned unchanged. A failed
/// commit is rolled back as well and its error returned.
///
/// ```ignore
/// let saved = atomic(transactions.as_ref(), || async {
///     users.save(user).await
/// })
/// .await?;
/// ```
pub async fn atomic<M, F, Fut, T>(manager: &M, operation: F) -> DomainResult<T>
where
    M: TransactionManager + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    manager.begin().await?;
    let mut scope = AbandonOnDrop {
        manager,
        armed: true,
    };

    let error = match operation().await {
        Ok(value) => match manager.commit().await {
            Ok(()) => {
                scope.armed = false;
                return Ok(value);
            }
            Err(err) => err,
        },
        Err(err) => err,
    };

    let rolled_back = manager.rollback().await;
    scope.armed = false;

    if let Err(rollback_err) = rolled_back {
        tracing::error!(
            error = %rollback_err,
            event = "transaction_rollback_failed",
            "Rollback failed after: {}",
            error
        );
    }

    Err(error)
}
