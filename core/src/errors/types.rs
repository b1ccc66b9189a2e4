//! Specific error types for value objects, state machines and use cases
//!
//! Messages are the domain messages surfaced verbatim to callers, except
//! `AuthError::InvalidCredentials`, which is deliberately generic.

use thiserror::Error;

use crate::domain::status::{ExpenseStatus, Role, UserStatus};

/// Value object construction failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{message}")]
    InvalidArgument {
        field: &'static str,
        message: String,
    },
}

impl ValidationError {
    /// Build an `InvalidArgument` error for a field
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        ValidationError::InvalidArgument {
            field,
            message: message.into(),
        }
    }

    /// The field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidArgument { field, .. } => field,
        }
    }
}

/// User lifecycle and registration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("Invalid status transition from '{from}' to '{to}' on user: '{email}'.")]
    InvalidStatusTransition {
        from: UserStatus,
        to: UserStatus,
        email: String,
    },

    #[error("Invalid role transition from '{from}' to '{to}' on user '{email}'")]
    InvalidRoleTransition { from: Role, to: Role, email: String },

    #[error("User with provided e-mail already exists")]
    EmailAlreadyExists,
}

/// Expense lifecycle and business-rule errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpenseError {
    #[error("Invalid status transition from '{from}' to '{to}' on expense: '{expense_id}'.")]
    InvalidStatusTransition {
        from: ExpenseStatus,
        to: ExpenseStatus,
        expense_id: String,
    },

    #[error("User cannot register expense")]
    UserCannotRegisterExpense,

    #[error("{message}")]
    CanNotBeUpdated { message: String },

    #[error("You do not have permission to access this expense.")]
    AccessDenied,

    #[error("Only active administrators can review expenses.")]
    ReviewNotAllowed,
}

/// Authentication and token errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authentication failed. Please check your credentials.")]
    InvalidCredentials,

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Invalid token")]
    InvalidToken,
}
