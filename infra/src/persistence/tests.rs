//! Tests for the in-memory persistence adapters

use std::sync::Arc;
use std::time::Duration;

use expense_core::{
    atomic, Amount, Description, DomainError, DomainResult, Email, Expense, ExpenseRepository,
    Id, Name, Password, TransactionManager, User, UserError, UserRepository,
};

use super::*;

fn user(email: &str) -> User {
    User::register(
        Name::new("Dana Scully").unwrap(),
        Email::new(email).unwrap(),
        Password::with_cost("Str0ng!Pass", 4).unwrap(),
    )
}

fn adapters() -> (
    Arc<InMemoryStore>,
    InMemoryUserRepository,
    InMemoryExpenseRepository,
    InMemoryTransactionManager,
) {
    let store = Arc::new(InMemoryStore::new());
    (
        store.clone(),
        InMemoryUserRepository::new(store.clone()),
        InMemoryExpenseRepository::new(store.clone()),
        InMemoryTransactionManager::new(store),
    )
}

#[tokio::test]
async fn test_user_lookup_by_id_and_email() {
    let (_, users, _, _) = adapters();
    let saved = users.save(user("dana@x.com")).await.unwrap();

    let by_id = users.find_by_id(&saved.id()).await.unwrap().unwrap();
    let by_email = users
        .find_by_email(&Email::new("dana@x.com").unwrap())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(by_id.id(), saved.id());
    assert_eq!(by_email.id(), saved.id());
    assert!(users.find_by_id(&Id::generate()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let (_, users, _, _) = adapters();
    users.save(user("dana@x.com")).await.unwrap();

    let err = users.save(user("dana@x.com")).await.unwrap_err();

    assert!(matches!(err, DomainError::User(UserError::EmailAlreadyExists)));
}

#[tokio::test]
async fn test_confirm_email_reports_missing_user() {
    let (_, users, _, _) = adapters();
    assert!(!users.confirm_email(&user("ghost@x.com")).await.unwrap());
}

#[tokio::test]
async fn test_expense_crud() {
    let (store, users, expenses, _) = adapters();
    let owner = users.save(user("dana@x.com")).await.unwrap();

    let mut expense = expenses
        .save(Expense::new(
            &owner,
            Amount::parse("12.50").unwrap(),
            Description::new("Taxi ride").unwrap(),
        ))
        .await
        .unwrap();
    assert_eq!(store.expense_count().await, 1);

    expense.change_amount(Amount::parse("13.00").unwrap());
    expenses.update(expense.clone()).await.unwrap();
    let stored = expenses.find_by_id(&expense.id()).await.unwrap().unwrap();
    assert_eq!(stored.amount().value(), 1300);

    assert!(expenses.destroy(&expense.id()).await.unwrap());
    assert!(!expenses.destroy(&expense.id()).await.unwrap());
    assert_eq!(store.expense_count().await, 0);
}

#[tokio::test]
async fn test_expense_requires_stored_owner() {
    let (_, _, expenses, _) = adapters();
    let ghost = user("ghost@x.com");

    let err = expenses
        .save(Expense::new(
            &ghost,
            Amount::from_int(1).unwrap(),
            Description::new("Coffee").unwrap(),
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_rollback_restores_snapshot() {
    let (store, users, _, transactions) = adapters();
    users.save(user("kept@x.com")).await.unwrap();

    let result = atomic(&transactions, || async {
        users.save(user("discarded@x.com")).await?;
        Err::<(), _>(DomainError::Internal {
            message: "boom".to_string(),
        })
    })
    .await;

    assert!(result.is_err());
    assert_eq!(store.user_count().await, 1);
    assert!(!transactions.in_transaction());
}

#[tokio::test]
async fn test_commit_keeps_writes() {
    let (store, users, _, transactions) = adapters();

    atomic(&transactions, || async {
        users.save(user("kept@x.com")).await?;
        Ok::<_, DomainError>(())
    })
    .await
    .unwrap();

    assert_eq!(store.user_count().await, 1);
}

#[tokio::test]
async fn test_commit_without_begin_fails() {
    let (_, _, _, transactions) = adapters();

    assert!(matches!(
        transactions.commit().await,
        Err(DomainError::Transaction { .. })
    ));
    assert!(transactions.rollback().await.is_err());
}


#[tokio::test(start_paused = true)]
async fn test_dropped_transaction_is_undone_and_unblocks_next() {
    let (store, users, _, transactions) = adapters();

    let timed_out = tokio::time::timeout(
        Duration::from_millis(50),
        atomic(&transactions, || async {
            users.save(user("dropped@x.com")).await?;
            std::future::pending::<DomainResult<()>>().await
        }),
    )
    .await;

    assert!(timed_out.is_err());
    assert!(!transactions.in_transaction());
    assert_eq!(store.user_count().await, 0);

    let next = tokio::time::timeout(
        Duration::from_secs(2),
        atomic(&transactions, || async { Ok::<_, DomainError>(1) }),
    )
    .await
    .expect("next transaction must not wait on the dropped one");
    assert_eq!(next.unwrap(), 1);
}

#[tokio::test]
async fn test_abandon_on_busy_store_restores_at_next_begin() {
    let (store, users, _, transactions) = adapters();

    transactions.begin().await.unwrap();
    users.save(user("dropped@x.com")).await.unwrap();

    let busy = store.read().await;
    transactions.abandon();
    drop(busy);
    assert_eq!(store.user_count().await, 1);

    transactions.begin().await.unwrap();
    assert_eq!(store.user_count().await, 0);
    transactions.commit().await.unwrap();
}
