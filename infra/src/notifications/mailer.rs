//! Confirmation mailer

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use expense_core::{ConfirmationMailer, DomainError, DomainResult, User};
use expense_shared::config::MailConfig;

/// A rendered message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

pub struct LoggingConfirmationMailer {
    config: MailConfig,
    outbox: RwLock<Vec<SentMail>>,
    available: AtomicBool,
}

impl LoggingConfirmationMailer {
    pub fn new(config: MailConfig) -> Self {
        Self {
            config,
            outbox: RwLock::new(Vec::new()),
            available: AtomicBool::new(true),
        }
    }

    /// Simulate the mail transport going down or coming back
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub async fn sent(&self) -> Vec<SentMail> {
        self.outbox.read().await.clone()
    }

    fn render(&self, user: &User) -> SentMail {
        let link = self.config.confirmation_link(&user.id().value());
        SentMail {
            from: self.config.from_address.clone(),
            to: user.email().value().to_string(),
            subject: "Confirm your e-mail address".to_string(),
            body: format!(
                "Hello {},\n\nPlease confirm your e-mail address by visiting:\n{}\n",
                user.name(),
                link
            ),
        }
    }
}

#[async_trait]
impl ConfirmationMailer for LoggingConfirmationMailer {
    async fn send(&self, user: &User) -> DomainResult<()> {
        if !self.available.load(Ordering::SeqCst) {
            return Err(DomainError::Internal {
                message: "Mail transport unavailable".to_string(),
            });
        }

        let mail = self.render(user);
        tracing::info!(
            user_id = %user.id(),
            subject = %mail.subject,
            event = "confirmation_mail_sent",
            "Confirmation email sent"
        );
        self.outbox.write().await.push(mail);
        Ok(())
    }
}
