//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborator contracts declared in
//! `expense_core`:
//!
//! - **Persistence**: in-memory user and expense repositories sharing one
//!   store, with a snapshot-based transaction manager
//! - **Events**: channel-backed event dispatcher and the worker that
//!   notifies expense owners
//! - **Notifications**: logging confirmation mailer and expense notifier
//! - **Telemetry**: `tracing-subscriber` initialisation
//! - **Bootstrap**: wiring of the use-case services from `AppConfig`

pub mod bootstrap;
pub mod events;
pub mod notifications;
pub mod persistence;
pub mod telemetry;

pub use bootstrap::Application;
pub use events::{spawn_event_worker, ChannelEventDispatcher};
pub use notifications::{LoggingConfirmationMailer, LoggingExpenseNotifier, SentMail};
pub use persistence::{
    InMemoryExpenseRepository, InMemoryStore, InMemoryTransactionManager, InMemoryUserRepository,
};
pub use telemetry::init_tracing;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] expense_shared::ConfigError),

    /// Tracing subscriber could not be installed
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}
