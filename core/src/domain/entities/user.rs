//! User aggregate: profile, role and account status.

use chrono::{DateTime, Utc};

use crate::domain::status::{Role, UserStatus, UserStatusOperation};
use crate::domain::value_objects::{Email, Id, Name, Password};
use crate::errors::{DomainResult, UserError};

/// Registered user
///
/// Fields are private; status and role only change through the
/// transition methods below, and every mutation refreshes `updated_at`.
#[derive(Debug, Clone)]
pub struct User {
    id: Id,
    name: Name,
    email: Email,
    password: Password,
    role: Role,
    status: UserStatus,
    email_confirmed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Stored state of a user, used to rehydrate the aggregate
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Id,
    pub name: Name,
    pub email: Email,
    pub password: Password,
    pub role: Role,
    pub status: UserStatus,
    pub email_confirmed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// New account: role `user`, awaiting activation, email unconfirmed
    pub fn register(name: Name, email: Email, password: Password) -> Self {
        let now = Utc::now();
        Self {
            id: Id::generate(),
            name,
            email,
            password,
            role: Role::User,
            status: UserStatus::AwaitingActivation,
            email_confirmed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn from_record(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            password: record.password,
            role: record.role,
            status: record.status,
            email_confirmed_at: record.email_confirmed_at,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn status(&self) -> UserStatus {
        self.status
    }

    pub fn email_confirmed_at(&self) -> Option<DateTime<Utc>> {
        self.email_confirmed_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn is_email_already_confirmed(&self) -> bool {
        self.email_confirmed_at.is_some()
    }

    pub fn mark_email_as_confirmed(&mut self) {
        self.email_confirmed_at = Some(Utc::now());
        self.touch();
    }

    pub fn change_name(&mut self, name: Name) {
        self.name = name;
        self.touch();
    }

    pub fn change_email(&mut self, email: Email) {
        self.email = email;
        self.touch();
    }

    pub fn change_password(&mut self, password: Password) {
        self.password = password;
        self.touch();
    }

    pub fn awaiting_activation(&mut self) -> DomainResult<()> {
        self.apply(UserStatusOperation::AwaitingActivation)
    }

    pub fn activate(&mut self) -> DomainResult<()> {
        self.apply(UserStatusOperation::Activate)
    }

    pub fn suspend(&mut self) -> DomainResult<()> {
        self.apply(UserStatusOperation::Suspend)
    }

    pub fn ban(&mut self) -> DomainResult<()> {
        self.apply(UserStatusOperation::Ban)
    }

    /// Promote to admin; `acting` must itself be an active admin
    pub fn become_admin(&mut self, acting: &User) -> DomainResult<()> {
        if !acting.is_admin() || !acting.is_active() {
            return Err(UserError::InvalidRoleTransition {
                from: self.role,
                to: Role::Admin,
                email: self.email.value().to_string(),
            }
            .into());
        }

        self.role = Role::Admin;
        self.touch();
        Ok(())
    }

    pub fn become_user(&mut self) {
        self.role = Role::User;
        self.touch();
    }

    fn apply(&mut self, operation: UserStatusOperation) -> DomainResult<()> {
        let next = self.status.transition(operation).ok_or_else(|| {
            UserError::InvalidStatusTransition {
                from: self.status,
                to: operation.target(),
                email: self.email.value().to_string(),
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
