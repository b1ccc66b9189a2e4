//! Input for the expense use cases

use serde::Deserialize;

use crate::domain::value_objects::Id;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterExpenseCommand {
    pub user_id: Id,
    /// Decimal amount such as `"122.00"`
    pub amount: String,
    pub description: String,
}

/// Partial expense update; `None` keeps the stored value
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateExpenseCommand {
    pub user_id: Id,
    pub expense_id: Id,
    pub amount: Option<String>,
    pub description: Option<String>,
}
