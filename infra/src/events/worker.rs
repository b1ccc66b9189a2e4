//! Event worker

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use expense_core::{DomainEvent, ExpenseNotifier};

/// Spawn the task that consumes dispatched events
///
/// The task ends once every dispatcher holding the sender is dropped and
/// the queue is drained. Handler failures are logged and do not stop it.
pub fn spawn_event_worker<N>(mut receiver: mpsc::Receiver<DomainEvent>, notifier: Arc<N>) -> JoinHandle<()>
where
    N: ExpenseNotifier + 'static,
{
    tokio::spawn(async move {
        tracing::info!("Event worker started");

        while let Some(event) = receiver.recv().await {
            handle(notifier.as_ref(), event).await;
        }

        tracing::info!("Event worker stopped");
    })
}

async fn handle<N>(notifier: &N, event: DomainEvent)
where
    N: ExpenseNotifier + ?Sized,
{
    match event {
        DomainEvent::ExpenseWasRegistered(registered) => {
            if let Err(e) = notifier.expense_registered(&registered).await {
                tracing::error!(
                    expense_id = %registered.expense_id,
                    error = %e,
                    event = "expense_notification_failed",
                    "Failed to notify expense owner"
                );
            }
        }
    }
}
