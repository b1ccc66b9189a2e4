//! User registration, email confirmation and profile use cases

mod commands;
mod service;

pub use commands::{RegisterUserCommand, UpdateUserCommand};
pub use service::UserService;
