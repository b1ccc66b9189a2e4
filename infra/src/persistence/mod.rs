//! In-memory persistence adapters
//!
//! Both repositories share one [`InMemoryStore`]; the transaction manager
//! snapshots that store on `begin` and restores it on `rollback`.

mod expense_repository;
mod store;
mod transaction;
mod user_repository;

#[cfg(test)]
mod tests;

pub use expense_repository::InMemoryExpenseRepository;
pub use store::InMemoryStore;
pub use transaction::InMemoryTransactionManager;
pub use user_repository::InMemoryUserRepository;
