//! Outgoing notifications
//!
//! Mail delivery itself is out of scope; these adapters render the
//! messages, log them and keep an outbox that callers can inspect.

mod mailer;
mod notifier;

pub use mailer::{LoggingConfirmationMailer, SentMail};
pub use notifier::LoggingExpenseNotifier;
