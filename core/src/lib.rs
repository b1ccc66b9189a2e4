//! # Expense Core
//!
//! Domain layer and use cases for the expense tracker backend: value
//! objects, status state machines, the user and expense aggregates,
//! repository and collaborator contracts, and the services that
//! orchestrate them.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::{atomic, ExpenseRepository, TransactionManager, UserRepository};
pub use services::{
    AuthService, AuthenticateCommand, ConfirmationMailer, EventDispatcher, ExpenseNotifier,
    ExpenseService, JwtTokenIssuer, RegisterExpenseCommand, RegisterUserCommand, TokenIssuer,
    UpdateExpenseCommand, UpdateUserCommand, UserService,
};
