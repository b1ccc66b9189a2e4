//! Status state machines and roles.
//!
//! Each machine is a plain enum with a table-driven `transition` function;
//! entities turn a rejected edge into the matching typed error.

pub mod expense_status;
pub mod role;
pub mod user_status;

pub use expense_status::{ExpenseStatus, ExpenseStatusOperation};
pub use role::Role;
pub use user_status::{UserStatus, UserStatusOperation};
