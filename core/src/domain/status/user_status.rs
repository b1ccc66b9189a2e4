//! User lifecycle state machine
//!
//! | Operation            | Allowed from                          | Result    |
//! |----------------------|---------------------------------------|-----------|
//! | `activate`           | AwaitingActivation, Suspended         | Active    |
//! | `suspend`            | Active                                | Suspended |
//! | `ban`                | AwaitingActivation, Active, Suspended | Banned    |
//! | `awaiting_activation`| none                                  | -         |
//!
//! Self-transitions never succeed and `Banned` accepts nothing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

/// Lifecycle status of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// Registered, email not confirmed yet
    #[default]
    AwaitingActivation,
    Active,
    Suspended,
    /// Terminal
    Banned,
}

/// Operations that drive the user state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatusOperation {
    AwaitingActivation,
    Activate,
    Suspend,
    Ban,
}

impl UserStatusOperation {
    /// Status the operation tries to reach
    pub fn target(self) -> UserStatus {
        match self {
            UserStatusOperation::AwaitingActivation => UserStatus::AwaitingActivation,
            UserStatusOperation::Activate => UserStatus::Active,
            UserStatusOperation::Suspend => UserStatus::Suspended,
            UserStatusOperation::Ban => UserStatus::Banned,
        }
    }
}

impl UserStatus {
    pub const ALL: [UserStatus; 4] = [
        UserStatus::AwaitingActivation,
        UserStatus::Active,
        UserStatus::Suspended,
        UserStatus::Banned,
    ];

    /// Resulting status when `operation` is legal from `self`, `None` otherwise
    pub fn transition(self, operation: UserStatusOperation) -> Option<UserStatus> {
        use UserStatus::*;
        use UserStatusOperation as Op;

        match (self, operation) {
            (AwaitingActivation | Suspended, Op::Activate) => Some(Active),
            (Active, Op::Suspend) => Some(Suspended),
            (AwaitingActivation | Active | Suspended, Op::Ban) => Some(Banned),
            (_, Op::AwaitingActivation) => None,
            (_, Op::Activate | Op::Suspend | Op::Ban) => None,
        }
    }

    /// Persisted code of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::AwaitingActivation => "awaiting_activation",
            UserStatus::Active => "active",
            UserStatus::Suspended => "suspended",
            UserStatus::Banned => "banned",
        }
    }

    pub fn is_awaiting_activation(&self) -> bool {
        matches!(self, UserStatus::AwaitingActivation)
    }

    pub fn is_active(&self) -> bool {
        matches!(self, UserStatus::Active)
    }

    pub fn is_suspended(&self) -> bool {
        matches!(self, UserStatus::Suspended)
    }

    pub fn is_banned(&self) -> bool {
        matches!(self, UserStatus::Banned)
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ValidationError::invalid("status", format!("Invalid user status: '{}'", s)))
    }
}
