//! Application wiring
//!
//! Builds every use-case service on top of the in-memory adapters and
//! owns the event worker for the lifetime of the application.

use std::sync::Arc;
use tokio::task::JoinHandle;

use expense_core::{AuthService, ExpenseService, JwtTokenIssuer, UserService};
use expense_shared::AppConfig;

use crate::events::{spawn_event_worker, ChannelEventDispatcher};
use crate::notifications::{LoggingConfirmationMailer, LoggingExpenseNotifier};
use crate::persistence::{
    InMemoryExpenseRepository, InMemoryStore, InMemoryTransactionManager, InMemoryUserRepository,
};
use crate::telemetry::init_tracing;
use crate::InfrastructureError;

pub type Users =
    UserService<InMemoryUserRepository, InMemoryTransactionManager, LoggingConfirmationMailer>;

pub type Auth = AuthService<InMemoryUserRepository, JwtTokenIssuer>;

pub type Expenses = ExpenseService<
    InMemoryUserRepository,
    InMemoryExpenseRepository,
    InMemoryTransactionManager,
    ChannelEventDispatcher,
>;

pub struct Application {
    pub config: AppConfig,
    pub store: Arc<InMemoryStore>,
    pub users: Users,
    pub auth: Auth,
    pub expenses: Expenses,
    pub token_issuer: Arc<JwtTokenIssuer>,
    pub mailer: Arc<LoggingConfirmationMailer>,
    pub notifier: Arc<LoggingExpenseNotifier>,
    worker: JoinHandle<()>,
}

impl Application {
    /// Load configuration, install tracing and build the application
    pub fn start() -> Result<Self, InfrastructureError> {
        let config = AppConfig::load()?;
        init_tracing(&config.logging)?;
        Ok(Self::build(config))
    }

    /// Wire the services for `config`
    ///
    /// Spawns the event worker, so it must be called from within a tokio
    /// runtime.
    pub fn build(config: AppConfig) -> Self {
        let store = Arc::new(InMemoryStore::new());
        let user_repository = Arc::new(InMemoryUserRepository::new(store.clone()));
        let expense_repository = Arc::new(InMemoryExpenseRepository::new(store.clone()));
        let transaction_manager = Arc::new(InMemoryTransactionManager::new(store.clone()));

        let token_issuer = Arc::new(JwtTokenIssuer::new(config.auth.jwt.clone()));
        let mailer = Arc::new(LoggingConfirmationMailer::new(config.mail.clone()));
        let notifier = Arc::new(LoggingExpenseNotifier::new());

        let (dispatcher, receiver) = ChannelEventDispatcher::new();
        let worker = spawn_event_worker(receiver, notifier.clone());

        let users = UserService::new(
            user_repository.clone(),
            transaction_manager.clone(),
            mailer.clone(),
            config.auth.password.clone(),
        );
        let auth = AuthService::new(user_repository.clone(), token_issuer.clone());
        let expenses = ExpenseService::new(
            user_repository,
            expense_repository,
            transaction_manager,
            Arc::new(dispatcher),
        );

        tracing::info!(
            environment = %config.environment,
            event = "application_started",
            "Application services ready"
        );

        Self {
            config,
            store,
            users,
            auth,
            expenses,
            token_issuer,
            mailer,
            notifier,
            worker,
        }
    }

    /// Stop accepting work and wait until queued events are handled
    pub async fn shutdown(self) -> anyhow::Result<()> {
        let Application {
            users,
            auth,
            expenses,
            worker,
            ..
        } = self;

        // Dropping the expense service drops the last event sender
        drop(expenses);
        drop(auth);
        drop(users);

        worker.await?;
        tracing::info!(event = "application_stopped", "Application stopped");
        Ok(())
    }
}
