//! Tests for error conversion and transport mapping

use expense_shared::errors::IntoErrorResponse;

use crate::domain::status::{ExpenseStatus, Role, UserStatus};
use crate::errors::{
    AuthError, DomainError, ExpenseError, UserError, ValidationError,
};

#[test]
fn test_from_conversions() {
    let err: DomainError = ValidationError::invalid("amount", "bad").into();
    assert!(matches!(err, DomainError::Validation(_)));

    let err: DomainError = UserError::EmailAlreadyExists.into();
    assert_eq!(err.to_string(), "User with provided e-mail already exists");

    let err: DomainError = AuthError::InvalidCredentials.into();
    assert_eq!(err.error_code(), "INVALID_CREDENTIALS");
}

#[test]
fn test_error_codes() {
    let cases: Vec<(DomainError, &str)> = vec![
        (DomainError::not_found("user"), "NOT_FOUND"),
        (ValidationError::invalid("name", "bad").into(), "VALIDATION_ERROR"),
        (UserError::EmailAlreadyExists.into(), "EMAIL_ALREADY_EXISTS"),
        (
            ExpenseError::UserCannotRegisterExpense.into(),
            "USER_CANNOT_REGISTER_EXPENSE",
        ),
        (
            ExpenseError::CanNotBeUpdated {
                message: "x".to_string(),
            }
            .into(),
            "EXPENSE_CANNOT_BE_UPDATED",
        ),
        (ExpenseError::AccessDenied.into(), "ACCESS_DENIED"),
        (ExpenseError::ReviewNotAllowed.into(), "ACCESS_DENIED"),
        (AuthError::InvalidToken.into(), "TOKEN_INVALID"),
        (
            DomainError::Transaction {
                message: "deadlock".to_string(),
            },
            "TRANSACTION_ERROR",
        ),
    ];

    for (err, code) in cases {
        assert_eq!(err.error_code(), code, "{err}");
    }
}

#[test]
fn test_not_found_response_is_opaque() {
    let response = DomainError::not_found("expense").to_error_response();

    assert_eq!(response.error, "NOT_FOUND");
    assert_eq!(response.message, "Resource not found");
    assert!(response.details.is_none());
}

#[test]
fn test_internal_details_are_hidden() {
    let response = DomainError::Internal {
        message: "connection refused".to_string(),
    }
    .to_error_response();

    assert_eq!(response.message, "Internal server error");
}

#[test]
fn test_validation_response_names_field() {
    let err: DomainError = ValidationError::invalid("email", "Invalid e-mail address given: 'x'").into();
    let response = err.to_error_response();

    assert_eq!(response.message, "Invalid e-mail address given: 'x'");
    assert_eq!(response.details.unwrap()["field"], "email");
}

#[test]
fn test_transition_response_carries_states() {
    let err: DomainError = UserError::InvalidStatusTransition {
        from: UserStatus::Banned,
        to: UserStatus::Active,
        email: "jane@x.com".to_string(),
    }
    .into();
    assert!(err.is_invalid_transition());

    let response = err.to_error_response();
    assert_eq!(response.error, "INVALID_STATUS_TRANSITION");
    let details = response.details.unwrap();
    assert_eq!(details["from"], "banned");
    assert_eq!(details["to"], "active");

    let err: DomainError = ExpenseError::InvalidStatusTransition {
        from: ExpenseStatus::Approved,
        to: ExpenseStatus::Rejected,
        expense_id: "e-1".to_string(),
    }
    .into();
    assert_eq!(
        err.to_string(),
        "Invalid status transition from 'approved' to 'rejected' on expense: 'e-1'."
    );

    let err: DomainError = UserError::InvalidRoleTransition {
        from: Role::User,
        to: Role::Admin,
        email: "jane@x.com".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), "INVALID_ROLE_TRANSITION");
    assert_eq!(
        err.to_string(),
        "Invalid role transition from 'user' to 'admin' on user 'jane@x.com'"
    );
}

#[test]
fn test_into_error_response() {
    let response: expense_shared::ErrorResponse = DomainError::from(AuthError::InvalidCredentials).into();
    assert_eq!(
        response.message,
        "Authentication failed. Please check your credentials."
    );
}
