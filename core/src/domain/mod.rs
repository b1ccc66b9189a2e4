//! Domain layer: value objects, status machines, entities, domain services
//! and domain events.

pub mod entities;
pub mod events;
pub mod services;
pub mod status;
pub mod value_objects;

pub use entities::{Expense, ExpenseRecord, User, UserRecord};
pub use events::{DomainEvent, ExpenseWasRegistered};
pub use status::{ExpenseStatus, ExpenseStatusOperation, Role, UserStatus, UserStatusOperation};
pub use value_objects::{Amount, Description, Email, Id, Name, Password, Token};
