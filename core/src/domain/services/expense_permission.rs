//! Who may register and touch expenses

use crate::domain::entities::{Expense, User};
use crate::errors::ExpenseError;

/// A user may register expenses once active with a confirmed email
pub fn can_user_register_expense(user: &User) -> bool {
    user.is_active() && user.is_email_already_confirmed()
}

/// Ownership check for expense reads and deletes
pub fn ensure_owns_expense(user: &User, expense: &Expense) -> Result<(), ExpenseError> {
    if expense.belongs_to(&user.id()) {
        Ok(())
    } else {
        Err(ExpenseError::AccessDenied)
    }
}
