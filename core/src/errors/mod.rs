//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{AuthError, ExpenseError, UserError, ValidationError};

use expense_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Transaction failed: {message}")]
    Transaction { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Expense(#[from] ExpenseError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Lookup miss for a resource kind
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    /// Stable code the transport layer maps to a status code
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::NotFound { .. } => error_codes::NOT_FOUND,
            DomainError::Transaction { .. } => error_codes::TRANSACTION_ERROR,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
            DomainError::Validation(_) => error_codes::VALIDATION_ERROR,
            DomainError::User(err) => match err {
                UserError::InvalidStatusTransition { .. } => error_codes::INVALID_STATUS_TRANSITION,
                UserError::InvalidRoleTransition { .. } => error_codes::INVALID_ROLE_TRANSITION,
                UserError::EmailAlreadyExists => error_codes::EMAIL_ALREADY_EXISTS,
            },
            DomainError::Expense(err) => match err {
                ExpenseError::InvalidStatusTransition { .. } => {
                    error_codes::INVALID_STATUS_TRANSITION
                }
                ExpenseError::UserCannotRegisterExpense => {
                    error_codes::USER_CANNOT_REGISTER_EXPENSE
                }
                ExpenseError::CanNotBeUpdated { .. } => error_codes::EXPENSE_CANNOT_BE_UPDATED,
                ExpenseError::AccessDenied | ExpenseError::ReviewNotAllowed => {
                    error_codes::ACCESS_DENIED
                }
            },
            DomainError::Auth(err) => match err {
                AuthError::InvalidCredentials => error_codes::INVALID_CREDENTIALS,
                AuthError::TokenGenerationFailed => error_codes::TOKEN_GENERATION_FAILED,
                AuthError::InvalidToken => error_codes::TOKEN_INVALID,
            },
        }
    }

    /// Whether this is an illegal state-machine edge
    pub fn is_invalid_transition(&self) -> bool {
        matches!(
            self,
            DomainError::User(UserError::InvalidStatusTransition { .. })
                | DomainError::User(UserError::InvalidRoleTransition { .. })
                | DomainError::Expense(ExpenseError::InvalidStatusTransition { .. })
        )
    }
}

impl IntoErrorResponse for DomainError {
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            // Lookups stay opaque to the caller
            DomainError::NotFound { .. } => ErrorResponse::new(self.error_code(), "Resource not found"),
            DomainError::Transaction { .. } | DomainError::Internal { .. } => {
                ErrorResponse::new(self.error_code(), "Internal server error")
            }
            DomainError::Validation(err) => {
                ErrorResponse::new(self.error_code(), err.to_string()).add_detail("field", err.field())
            }
            DomainError::User(UserError::InvalidStatusTransition { from, to, .. }) => {
                ErrorResponse::new(self.error_code(), self.to_string())
                    .add_detail("from", from.as_str())
                    .add_detail("to", to.as_str())
            }
            DomainError::User(UserError::InvalidRoleTransition { from, to, .. }) => {
                ErrorResponse::new(self.error_code(), self.to_string())
                    .add_detail("from", from.as_str())
                    .add_detail("to", to.as_str())
            }
            DomainError::Expense(ExpenseError::InvalidStatusTransition { from, to, .. }) => {
                ErrorResponse::new(self.error_code(), self.to_string())
                    .add_detail("from", from.as_str())
                    .add_detail("to", to.as_str())
            }
            _ => ErrorResponse::new(self.error_code(), self.to_string()),
        }
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        err.to_error_response()
    }
}
