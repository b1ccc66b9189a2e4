//! User use-case service

use std::sync::Arc;

use expense_shared::config::PasswordConfig;

use crate::domain::entities::User;
use crate::domain::value_objects::{Email, Id, Name, Password};
use crate::errors::{DomainError, DomainResult, UserError};
use crate::repositories::{atomic, TransactionManager, UserRepository};
use crate::services::lookup::user_or_fail;
use crate::services::traits::ConfirmationMailer;

use super::commands::{RegisterUserCommand, UpdateUserCommand};

/// Service for user registration and profile management
pub struct UserService<U, T, M>
where
    U: UserRepository,
    T: TransactionManager,
    M: ConfirmationMailer,
{
    /// User repository for persistence
    user_repository: Arc<U>,
    /// Transaction boundary for writes
    transaction_manager: Arc<T>,
    /// Confirmation mail sender
    mailer: Arc<M>,
    /// bcrypt settings for new passwords
    password_config: PasswordConfig,
}

impl<U, T, M> UserService<U, T, M>
where
    U: UserRepository,
    T: TransactionManager,
    M: ConfirmationMailer,
{
    pub fn new(
        user_repository: Arc<U>,
        transaction_manager: Arc<T>,
        mailer: Arc<M>,
        password_config: PasswordConfig,
    ) -> Self {
        Self {
            user_repository,
            transaction_manager,
            mailer,
            password_config,
        }
    }

    /// Register a new user account
    ///
    /// The account starts awaiting activation with the `user` role. The
    /// confirmation mail goes out after commit; a delivery failure is
    /// logged and does not undo the registration.
    ///
    /// # Errors
    ///
    /// * `Validation` - name, email or password is malformed
    /// * `User(EmailAlreadyExists)` - the email is already registered
    pub async fn register(&self, command: RegisterUserCommand) -> DomainResult<User> {
        // Step 1: Validate input into value objects
        let email = Email::new(&command.email)?;
        let name = Name::new(&command.name)?;
        let password = self.hash_password(&command.password)?;

        // Step 2: Verify the email is still available and persist the account
        let user = atomic(self.transaction_manager.as_ref(), || async move {
            self.verify_email_is_available(&email).await?;
            self.user_repository
                .save(User::register(name, email, password))
                .await
        })
        .await?;

        tracing::info!(
            user_id = %user.id(),
            event = "user_registered",
            "User registered"
        );

        // Step 3: Best-effort confirmation mail
        if let Err(e) = self.mailer.send(&user).await {
            tracing::warn!(
                user_id = %user.id(),
                error = %e,
                event = "confirmation_mail_failed",
                "Failed to send confirmation email"
            );
        }

        Ok(user)
    }

    /// Confirm a user's email and activate the account
    ///
    /// Idempotent: an already confirmed user is returned unchanged.
    pub async fn confirm_email(&self, user_id: &Id) -> DomainResult<User> {
        let user = atomic(self.transaction_manager.as_ref(), || async move {
            let mut user = user_or_fail(self.user_repository.as_ref(), user_id).await?;

            if user.is_email_already_confirmed() {
                tracing::debug!(user_id = %user_id, "Email already confirmed");
                return Ok(user);
            }

            user.mark_email_as_confirmed();
            user.activate()?;

            if !self.user_repository.confirm_email(&user).await? {
                return Err(DomainError::not_found("user"));
            }
            Ok::<_, DomainError>(user)
        })
        .await?;

        tracing::info!(
            user_id = %user.id(),
            status = %user.status(),
            event = "user_email_confirmed",
            "User email confirmed"
        );

        Ok(user)
    }

    /// Apply a partial profile update
    ///
    /// # Errors
    ///
    /// * `NotFound` - no user with this id
    /// * `Validation` - a supplied field is malformed
    /// * `User(EmailAlreadyExists)` - the new email belongs to another account
    pub async fn update(&self, user_id: &Id, command: UpdateUserCommand) -> DomainResult<User> {
        // Step 1: Validate supplied fields
        let name = command.name.as_deref().map(Name::new).transpose()?;
        let email = command.email.as_deref().map(Email::new).transpose()?;
        let password = command
            .password
            .as_deref()
            .map(|plain| self.hash_password(plain))
            .transpose()?;

        // Step 2: Load, check and write back within one transaction
        let user = atomic(self.transaction_manager.as_ref(), || async move {
            let mut user = user_or_fail(self.user_repository.as_ref(), user_id).await?;

            // Only a changed email needs an availability check
            if let Some(ref email) = email {
                if email != user.email() {
                    self.verify_email_is_available(email).await?;
                }
            }

            if let Some(name) = name {
                user.change_name(name);
            }
            if let Some(email) = email {
                user.change_email(email);
            }
            if let Some(password) = password {
                user.change_password(password);
            }

            self.user_repository.update(user).await
        })
        .await?;

        tracing::info!(user_id = %user.id(), event = "user_updated", "User profile updated");

        Ok(user)
    }

    /// Find-or-fail lookup used by the profile endpoint
    pub async fn find_by_id(&self, user_id: &Id) -> DomainResult<User> {
        user_or_fail(self.user_repository.as_ref(), user_id).await
    }

    async fn verify_email_is_available(&self, email: &Email) -> DomainResult<()> {
        if self.user_repository.find_by_email(email).await?.is_some() {
            tracing::warn!(event = "email_already_exists", "Registration with a taken email");
            return Err(UserError::EmailAlreadyExists.into());
        }
        Ok(())
    }

    fn hash_password(&self, plain: &str) -> DomainResult<Password> {
        Ok(Password::with_cost(plain, self.password_config.hash_cost)?)
    }
}
