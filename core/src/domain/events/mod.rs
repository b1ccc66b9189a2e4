//! Domain events raised by use cases and handed to the event dispatcher.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Expense;
use crate::domain::value_objects::Id;

/// Every event the domain can emit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DomainEvent {
    ExpenseWasRegistered(ExpenseWasRegistered),
}

impl DomainEvent {
    pub fn name(&self) -> &'static str {
        match self {
            DomainEvent::ExpenseWasRegistered(_) => "expense_was_registered",
        }
    }
}

/// A new expense was persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseWasRegistered {
    pub expense_id: Id,
    pub owner_id: Id,
    /// Amount in cents
    pub amount: i64,
    pub description: String,
    pub occurred_at: DateTime<Utc>,
}

impl ExpenseWasRegistered {
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            expense_id: expense.id(),
            owner_id: expense.owner_id(),
            amount: expense.amount().value(),
            description: expense.description().value().to_string(),
            occurred_at: Utc::now(),
        }
    }
}

impl From<ExpenseWasRegistered> for DomainEvent {
    fn from(event: ExpenseWasRegistered) -> Self {
        DomainEvent::ExpenseWasRegistered(event)
    }
}
