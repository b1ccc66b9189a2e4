//! Expense registration notifier

use async_trait::async_trait;
use tokio::sync::RwLock;

use expense_core::{Amount, DomainResult, ExpenseNotifier, ExpenseWasRegistered};

/// Logs a notification for each registered expense and keeps the events
#[derive(Default)]
pub struct LoggingExpenseNotifier {
    notified: RwLock<Vec<ExpenseWasRegistered>>,
}

impl LoggingExpenseNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn notified(&self) -> Vec<ExpenseWasRegistered> {
        self.notified.read().await.clone()
    }
}

#[async_trait]
impl ExpenseNotifier for LoggingExpenseNotifier {
    async fn expense_registered(&self, event: &ExpenseWasRegistered) -> DomainResult<()> {
        let amount = Amount::from_cents(event.amount)?;

        tracing::info!(
            expense_id = %event.expense_id,
            owner_id = %event.owner_id,
            amount = %amount,
            event = "expense_owner_notified",
            "Expense registration notified"
        );

        self.notified.write().await.push(event.clone());
        Ok(())
    }
}
