//! Domain services: pure permission and ownership rules.

mod expense_permission;

pub use expense_permission::{can_user_register_expense, ensure_owns_expense};
