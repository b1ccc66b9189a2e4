//! Use-case services coordinating entities, repositories, transactions
//! and side effects.

pub mod auth;
pub mod expense;
pub mod token;
pub mod traits;
pub mod user;

mod lookup;

#[cfg(test)]
mod tests;

pub use auth::{AuthService, AuthenticateCommand};
pub use expense::{ExpenseService, RegisterExpenseCommand, UpdateExpenseCommand};
pub use token::{Claims, JwtTokenIssuer};
pub use traits::{ConfirmationMailer, EventDispatcher, ExpenseNotifier, TokenIssuer};
pub use user::{RegisterUserCommand, UpdateUserCommand, UserService};
