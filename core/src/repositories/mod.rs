//! Persistence and transaction contracts implemented by infrastructure.

pub mod expense;
pub mod transaction;
pub mod user;

pub use expense::ExpenseRepository;
pub use transaction::{atomic, TransactionManager};
pub use user::UserRepository;
