//! Expense use cases: register, update, retrieve, destroy and review

mod commands;
mod service;

pub use commands::{RegisterExpenseCommand, UpdateExpenseCommand};
pub use service::ExpenseService;
