//! Expense use-case service

use std::sync::Arc;

use crate::domain::entities::{Expense, User};
use crate::domain::events::ExpenseWasRegistered;
use crate::domain::services::{can_user_register_expense, ensure_owns_expense};
use crate::domain::value_objects::{Amount, Description, Id};
use crate::errors::{DomainError, DomainResult, ExpenseError};
use crate::repositories::{atomic, ExpenseRepository, TransactionManager, UserRepository};
use crate::services::lookup::{expense_or_fail, user_or_fail};
use crate::services::traits::EventDispatcher;

use super::commands::{RegisterExpenseCommand, UpdateExpenseCommand};

const ONLY_PENDING_MESSAGE: &str = "Only pending expenses can be updated.";
const NOT_OWNER_MESSAGE: &str = "The authenticated user does not own this expense.";

#[derive(Debug, Clone, Copy)]
enum Review {
    Approve,
    Reject,
}

/// Service for the expense lifecycle
pub struct ExpenseService<U, E, T, D>
where
    U: UserRepository,
    E: ExpenseRepository,
    T: TransactionManager,
    D: EventDispatcher,
{
    user_repository: Arc<U>,
    expense_repository: Arc<E>,
    transaction_manager: Arc<T>,
    /// Receives `ExpenseWasRegistered`
    event_dispatcher: Arc<D>,
}

impl<U, E, T, D> ExpenseService<U, E, T, D>
where
    U: UserRepository,
    E: ExpenseRepository,
    T: TransactionManager,
    D: EventDispatcher,
{
    pub fn new(
        user_repository: Arc<U>,
        expense_repository: Arc<E>,
        transaction_manager: Arc<T>,
        event_dispatcher: Arc<D>,
    ) -> Self {
        Self {
            user_repository,
            expense_repository,
            transaction_manager,
            event_dispatcher,
        }
    }

    /// Register a pending expense for an active, confirmed user
    ///
    /// # Errors
    ///
    /// * `Validation` - amount or description is malformed
    /// * `NotFound` - the user does not exist
    /// * `Expense(UserCannotRegisterExpense)` - the user is inactive or unconfirmed
    pub async fn register(&self, command: RegisterExpenseCommand) -> DomainResult<Expense> {
        // Step 1: Validate input
        let amount = Amount::parse(&command.amount)?;
        let description = Description::new(&command.description)?;

        // Step 2: Check the user may register, then persist and announce
        let (user, expense) = atomic(self.transaction_manager.as_ref(), || async move {
            let user = user_or_fail(self.user_repository.as_ref(), &command.user_id).await?;
            if !can_user_register_expense(&user) {
                tracing::warn!(
                    user_id = %user.id(),
                    status = %user.status(),
                    event = "expense_registration_denied",
                    "User cannot register expense"
                );
                return Err(ExpenseError::UserCannotRegisterExpense.into());
            }

            let expense = Expense::new(&user, amount, description);
            let expense = self.expense_repository.save(expense).await?;
            self.event_dispatcher
                .dispatch(ExpenseWasRegistered::from_expense(&expense).into())
                .await;
            Ok::<_, DomainError>((user, expense))
        })
        .await?;

        tracing::info!(
            expense_id = %expense.id(),
            user_id = %user.id(),
            amount_cents = expense.amount().value(),
            event = "expense_registered",
            "Expense registered"
        );

        Ok(expense)
    }

    /// Change amount and/or description of a pending expense owned by the user
    ///
    /// The pending check runs before the ownership check.
    pub async fn update(&self, command: UpdateExpenseCommand) -> DomainResult<Expense> {
        // Step 1: Validate supplied fields
        let amount = command.amount.as_deref().map(Amount::parse).transpose()?;
        let description = command
            .description
            .as_deref()
            .map(Description::new)
            .transpose()?;

        // Step 2: Load, check and write back within one transaction
        let expense = atomic(self.transaction_manager.as_ref(), || async move {
            let user = user_or_fail(self.user_repository.as_ref(), &command.user_id).await?;
            let mut expense =
                expense_or_fail(self.expense_repository.as_ref(), &command.expense_id).await?;

            if !expense.status().is_pending() {
                return Err(cannot_be_updated(&expense, ONLY_PENDING_MESSAGE));
            }
            if !expense.belongs_to(&user.id()) {
                return Err(cannot_be_updated(&expense, NOT_OWNER_MESSAGE));
            }

            if let Some(amount) = amount {
                expense.change_amount(amount);
            }
            if let Some(description) = description {
                expense.change_description(description);
            }

            self.expense_repository.update(expense).await
        })
        .await?;

        tracing::info!(expense_id = %expense.id(), event = "expense_updated", "Expense updated");

        Ok(expense)
    }

    /// Fetch an expense on behalf of its owner
    pub async fn retrieve(&self, user_id: &Id, expense_id: &Id) -> DomainResult<Expense> {
        let (_, expense) = self.owned_expense(user_id, expense_id).await?;
        Ok(expense)
    }

    /// Delete an expense on behalf of its owner, in any status
    pub async fn destroy(&self, user_id: &Id, expense_id: &Id) -> DomainResult<()> {
        atomic(self.transaction_manager.as_ref(), || async move {
            let (_, expense) = self.owned_expense(user_id, expense_id).await?;

            if self.expense_repository.destroy(&expense.id()).await? {
                Ok(())
            } else {
                Err(DomainError::not_found("expense"))
            }
        })
        .await?;

        tracing::info!(expense_id = %expense_id, event = "expense_destroyed", "Expense destroyed");

        Ok(())
    }

    /// Approve a pending expense
    ///
    /// The reviewer must be active; the admin role is enforced by the
    /// expense state machine, so a non-admin gets `InvalidStatusTransition`.
    pub async fn approve(&self, reviewer_id: &Id, expense_id: &Id) -> DomainResult<Expense> {
        self.review(reviewer_id, expense_id, Review::Approve).await
    }

    /// Reject a pending expense; the reviewer must be an active admin
    pub async fn reject(&self, reviewer_id: &Id, expense_id: &Id) -> DomainResult<Expense> {
        self.review(reviewer_id, expense_id, Review::Reject).await
    }

    async fn review(&self, reviewer_id: &Id, expense_id: &Id, review: Review) -> DomainResult<Expense> {
        let (reviewer, expense) = atomic(self.transaction_manager.as_ref(), || async move {
            let (reviewer, mut expense) =
                self.reviewable_expense(reviewer_id, expense_id, review).await?;

            match review {
                Review::Approve => expense.approve(&reviewer)?,
                Review::Reject => expense.reject()?,
            }

            let expense = self.expense_repository.update(expense).await?;
            Ok::<_, DomainError>((reviewer, expense))
        })
        .await?;

        tracing::info!(
            expense_id = %expense.id(),
            reviewer_id = %reviewer.id(),
            status = %expense.status(),
            event = "expense_reviewed",
            "Expense reviewed"
        );

        Ok(expense)
    }

    async fn owned_expense(&self, user_id: &Id, expense_id: &Id) -> DomainResult<(User, Expense)> {
        let user = user_or_fail(self.user_repository.as_ref(), user_id).await?;
        let expense = expense_or_fail(self.expense_repository.as_ref(), expense_id).await?;

        if let Err(e) = ensure_owns_expense(&user, &expense) {
            tracing::warn!(
                user_id = %user_id,
                expense_id = %expense_id,
                event = "expense_access_denied",
                "Expense accessed by non-owner"
            );
            return Err(e.into());
        }

        Ok((user, expense))
    }

    async fn reviewable_expense(
        &self,
        reviewer_id: &Id,
        expense_id: &Id,
        review: Review,
    ) -> DomainResult<(User, Expense)> {
        let reviewer = user_or_fail(self.user_repository.as_ref(), reviewer_id).await?;
        let expense = expense_or_fail(self.expense_repository.as_ref(), expense_id).await?;

        let allowed = match review {
            Review::Approve => reviewer.is_active(),
            Review::Reject => reviewer.is_active() && reviewer.is_admin(),
        };
        if !allowed {
            tracing::warn!(
                user_id = %reviewer_id,
                expense_id = %expense_id,
                event = "expense_review_denied",
                "Expense review not allowed"
            );
            return Err(ExpenseError::ReviewNotAllowed.into());
        }

        Ok((reviewer, expense))
    }
}

fn cannot_be_updated(expense: &Expense, message: &str) -> DomainError {
    tracing::warn!(
        expense_id = %expense.id(),
        status = %expense.status(),
        event = "expense_update_denied",
        "{}",
        message
    );
    ExpenseError::CanNotBeUpdated {
        message: message.to_string(),
    }
    .into()
}
