//! Tests for domain entities


use chrono::{Duration, Utc};

use crate::domain::entities::{User, UserRecord};
use crate::domain::status::{Role, UserStatus};
use crate::domain::value_objects::{Email, Id, Name, Password};

pub(super) fn registered_user(email: &str) -> User {
    User::register(
        Name::new("John Doe").unwrap(),
        Email::new(email).unwrap(),
        Password::with_cost("Str0ng!Pass", 4).unwrap(),
    )
}

/// User rehydrated in the given role and status, last touched a day ago
pub(super) fn stored_user(email: &str, role: Role, status: UserStatus) -> User {
    let yesterday = Utc::now() - Duration::days(1);
    User::from_record(UserRecord {
        id: Id::generate(),
        name: Name::new("Jane Roe").unwrap(),
        email: Email::new(email).unwrap(),
        password: Password::with_cost("Str0ng!Pass", 4).unwrap(),
        role,
        status,
        email_confirmed_at: Some(yesterday),
        created_at: yesterday,
        updated_at: yesterday,
    })
}
