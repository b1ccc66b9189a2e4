//! Expense lifecycle state machine
//!
//! `Pending` is the only state with outgoing edges: `reject` always succeeds
//! from it and `approve` succeeds when the reviewer holds the admin role.
//! `Approved` and `Rejected` are terminal, whatever the reviewer's role.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Role;
use crate::errors::ValidationError;

/// Lifecycle status of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Operations that drive the expense state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseStatusOperation {
    Pending,
    Approve { reviewer: Role },
    Reject,
}

impl ExpenseStatusOperation {
    /// Status the operation tries to reach
    pub fn target(self) -> ExpenseStatus {
        match self {
            ExpenseStatusOperation::Pending => ExpenseStatus::Pending,
            ExpenseStatusOperation::Approve { .. } => ExpenseStatus::Approved,
            ExpenseStatusOperation::Reject => ExpenseStatus::Rejected,
        }
    }
}

impl ExpenseStatus {
    pub const ALL: [ExpenseStatus; 3] = [
        ExpenseStatus::Pending,
        ExpenseStatus::Approved,
        ExpenseStatus::Rejected,
    ];

    /// Resulting status when `operation` is legal from `self`, `None` otherwise
    pub fn transition(self, operation: ExpenseStatusOperation) -> Option<ExpenseStatus> {
        use ExpenseStatusOperation as Op;

        match (self, operation) {
            (ExpenseStatus::Pending, Op::Reject) => Some(ExpenseStatus::Rejected),
            (ExpenseStatus::Pending, Op::Approve { reviewer }) if reviewer.is_admin() => {
                Some(ExpenseStatus::Approved)
            }
            (ExpenseStatus::Pending, Op::Approve { .. } | Op::Pending) => None,
            (ExpenseStatus::Approved | ExpenseStatus::Rejected, _) => None,
        }
    }

    /// Persisted code of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseStatus::Pending => "pending",
            ExpenseStatus::Approved => "approved",
            ExpenseStatus::Rejected => "rejected",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ExpenseStatus::Pending)
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, ExpenseStatus::Approved)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, ExpenseStatus::Rejected)
    }
}

impl fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExpenseStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid("status", format!("Invalid expense status: '{}'", s))
            })
    }
}
