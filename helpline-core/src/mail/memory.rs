//! In-memory mailer for development and tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{EmailMessage, MailError, Mailer};

/// Records outbound messages instead of delivering them.
#[derive(Debug, Default)]
pub struct MemoryMailer {
    sent: RwLock<Vec<EmailMessage>>,
}

impl MemoryMailer {
    /// Creates a mailer with an empty outbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every message sent so far.
    pub async fn sent(&self) -> Vec<EmailMessage> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl Mailer for MemoryMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError> {
        self.sent.write().await.push(message.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_sent_messages() {
        let mailer = MemoryMailer::new();
        assert!(mailer.sent().await.is_empty());

        let message = EmailMessage {
            to: "ada@example.com".to_string(),
            cc: None,
            subject: "hello".to_string(),
            html_body: "<p>hi</p>".to_string(),
        };
        mailer.send(&message).await.unwrap();

        let sent = mailer.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], message);
    }
}
