//! Expense aggregate

use chrono::{DateTime, Utc};

use crate::domain::entities::User;
use crate::domain::status::{ExpenseStatus, ExpenseStatusOperation};
use crate::domain::value_objects::{Amount, Description, Id};
use crate::errors::{DomainResult, ExpenseError};

/// Expense submitted by a user
///
/// The owner is fixed at creation. Amount and description can change in
/// any status; the update use case restricts that to pending expenses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    id: Id,
    owner_id: Id,
    amount: Amount,
    description: Description,
    status: ExpenseStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Stored state of an expense
#[derive(Debug, Clone)]
pub struct ExpenseRecord {
    pub id: Id,
    pub owner_id: Id,
    pub amount: Amount,
    pub description: Description,
    pub status: ExpenseStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// New pending expense owned by `owner`
    pub fn new(owner: &User, amount: Amount, description: Description) -> Self {
        let now = Utc::now();
        Self {
            id: Id::generate(),
            owner_id: owner.id(),
            amount,
            description,
            status: ExpenseStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn from_record(record: ExpenseRecord) -> Self {
        Self {
            id: record.id,
            owner_id: record.owner_id,
            amount: record.amount,
            description: record.description,
            status: record.status,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn owner_id(&self) -> Id {
        self.owner_id
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn status(&self) -> ExpenseStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn belongs_to(&self, user_id: &Id) -> bool {
        &self.owner_id == user_id
    }

    pub fn change_amount(&mut self, amount: Amount) {
        self.amount = amount;
        self.touch();
    }

    pub fn change_description(&mut self, description: Description) {
        self.description = description;
        self.touch();
    }

    pub fn pending(&mut self) -> DomainResult<()> {
        self.apply(ExpenseStatusOperation::Pending)
    }

    /// Approve on behalf of `reviewer`, who must hold the admin role
    pub fn approve(&mut self, reviewer: &User) -> DomainResult<()> {
        self.apply(ExpenseStatusOperation::Approve {
            reviewer: reviewer.role(),
        })
    }

    pub fn reject(&mut self) -> DomainResult<()> {
        self.apply(ExpenseStatusOperation::Reject)
    }

    fn apply(&mut self, operation: ExpenseStatusOperation) -> DomainResult<()> {
        let next = self.status.transition(operation).ok_or_else(|| {
            ExpenseError::InvalidStatusTransition {
                from: self.status,
                to: operation.target(),
                expense_id: self.id.value(),
            }
        })?;

        self.status = next;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
