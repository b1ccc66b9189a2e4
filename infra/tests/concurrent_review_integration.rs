//! Integration tests for expense updates racing with reviews

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::{oneshot, Mutex};

    use expense_core::{
        DomainError, DomainResult, Email, Expense, ExpenseError, ExpenseRepository,
        ExpenseService, ExpenseStatus, Id, Name, Password, RegisterExpenseCommand, Role,
        UpdateExpenseCommand, User, UserRecord, UserRepository, UserStatus,
    };
    use expense_infra::{
        ChannelEventDispatcher, InMemoryExpenseRepository, InMemoryStore,
        InMemoryTransactionManager, InMemoryUserRepository,
    };

    struct Pause {
        reached: oneshot::Sender<()>,
        release: oneshot::Receiver<()>,
    }

    /// Holds the next `find_by_id` caller after its read until released
    struct PausingExpenses {
        inner: InMemoryExpenseRepository,
        pause: Mutex<Option<Pause>>,
    }

    impl PausingExpenses {
        async fn pause_next_lookup(&self) -> (oneshot::Receiver<()>, oneshot::Sender<()>) {
            let (reached_tx, reached_rx) = oneshot::channel();
            let (release_tx, release_rx) = oneshot::channel();
            *self.pause.lock().await = Some(Pause {
                reached: reached_tx,
                release: release_rx,
            });
            (reached_rx, release_tx)
        }
    }

    #[async_trait]
    impl ExpenseRepository for PausingExpenses {
        async fn find_by_id(&self, id: &Id) -> DomainResult<Option<Expense>> {
            let found = self.inner.find_by_id(id).await?;

            let pause = self.pause.lock().await.take();
            if let Some(pause) = pause {
                let _ = pause.reached.send(());
                let _ = pause.release.await;
            }
            Ok(found)
        }

        async fn save(&self, expense: Expense) -> DomainResult<Expense> {
            self.inner.save(expense).await
        }

        async fn update(&self, expense: Expense) -> DomainResult<Expense> {
            self.inner.update(expense).await
        }

        async fn destroy(&self, id: &Id) -> DomainResult<bool> {
            self.inner.destroy(id).await
        }
    }

    type Service = ExpenseService<
        InMemoryUserRepository,
        PausingExpenses,
        InMemoryTransactionManager,
        ChannelEventDispatcher,
    >;

    struct Fixture {
        service: Arc<Service>,
        expenses: Arc<PausingExpenses>,
        owner_id: Id,
        admin_id: Id,
        expense_id: Id,
    }

    fn active_user(email: &str, role: Role) -> User {
        let now = Utc::now();
        User::from_record(UserRecord {
            id: Id::generate(),
            name: Name::new("Monica Reyes").unwrap(),
            email: Email::new(email).unwrap(),
            password: Password::with_cost("Str0ng!Pass", 4).unwrap(),
            role,
            status: UserStatus::Active,
            email_confirmed_at: Some(now),
            created_at: now,
            updated_at: now,
        })
    }

    async fn fixture() -> Fixture {
        let store = Arc::new(InMemoryStore::new());
        let users = Arc::new(InMemoryUserRepository::new(store.clone()));
        let expenses = Arc::new(PausingExpenses {
            inner: InMemoryExpenseRepository::new(store.clone()),
            pause: Mutex::new(None),
        });
        let (dispatcher, receiver) = ChannelEventDispatcher::new();
        drop(receiver);

        let owner = users.save(active_user("owner@x.com", Role::User)).await.unwrap();
        let admin = users.save(active_user("admin@x.com", Role::Admin)).await.unwrap();

        let service = Arc::new(ExpenseService::new(
            users,
            expenses.clone(),
            Arc::new(InMemoryTransactionManager::new(store)),
            Arc::new(dispatcher),
        ));

        let expense = service
            .register(RegisterExpenseCommand {
                user_id: owner.id(),
                amount: "50.00".to_string(),
                description: "Hotel night".to_string(),
            })
            .await
            .unwrap();

        Fixture {
            service,
            expenses,
            owner_id: owner.id(),
            admin_id: admin.id(),
            expense_id: expense.id(),
        }
    }

    fn update_command(f: &Fixture) -> UpdateExpenseCommand {
        UpdateExpenseCommand {
            user_id: f.owner_id,
            expense_id: f.expense_id,
            amount: Some("99.00".to_string()),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_approval_waits_for_inflight_update() {
        let f = fixture().await;
        let (reached, release) = f.expenses.pause_next_lookup().await;

        let update = tokio::spawn({
            let service = f.service.clone();
            let command = update_command(&f);
            async move { service.update(command).await }
        });
        reached.await.unwrap();

        let approve = tokio::spawn({
            let service = f.service.clone();
            let (admin_id, expense_id) = (f.admin_id, f.expense_id);
            async move { service.approve(&admin_id, &expense_id).await }
        });
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!approve.is_finished());

        release.send(()).unwrap();

        let updated = update.await.unwrap().unwrap();
        assert_eq!(updated.status(), ExpenseStatus::Pending);
        assert_eq!(updated.amount().value(), 9900);

        let approved = approve.await.unwrap().unwrap();
        assert_eq!(approved.status(), ExpenseStatus::Approved);

        let stored = f.expenses.find_by_id(&f.expense_id).await.unwrap().unwrap();
        assert_eq!(stored.status(), ExpenseStatus::Approved);
        assert_eq!(stored.amount().value(), 9900);
    }

    #[tokio::test]
    async fn test_update_after_concurrent_approval_is_refused() {
        let f = fixture().await;
        let (reached, release) = f.expenses.pause_next_lookup().await;

        let approve = tokio::spawn({
            let service = f.service.clone();
            let (admin_id, expense_id) = (f.admin_id, f.expense_id);
            async move { service.approve(&admin_id, &expense_id).await }
        });
        reached.await.unwrap();

        let update = tokio::spawn({
            let service = f.service.clone();
            let command = update_command(&f);
            async move { service.update(command).await }
        });
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!update.is_finished());

        release.send(()).unwrap();
        approve.await.unwrap().unwrap();

        let err = update.await.unwrap().unwrap_err();
        assert!(matches!(
            err,
            DomainError::Expense(ExpenseError::CanNotBeUpdated { .. })
        ));

        let stored = f.expenses.find_by_id(&f.expense_id).await.unwrap().unwrap();
        assert_eq!(stored.status(), ExpenseStatus::Approved);
        assert_eq!(stored.amount().value(), 5000);
    }
}
