//! Domain entities: the user and expense aggregates.

pub mod expense;
pub mod user;

#[cfg(test)]
mod tests;

pub use expense::{Expense, ExpenseRecord};
pub use user::{User, UserRecord};
