//! SendGrid mailer for production use.

use async_trait::async_trait;
use serde_json::json;

use super::{EmailMessage, MailError, Mailer};
use crate::config::MailConfig;

/// Mailer backed by the SendGrid `v3/mail/send` REST API.
#[derive(Debug)]
pub struct SendGridMailer {
    client: reqwest::Client,
    config: MailConfig,
}

impl SendGridMailer {
    /// Creates a mailer from mail configuration.
    ///
    /// # Errors
    /// - `MailError::NotConfigured` - API key or sender address missing
    pub fn new(config: MailConfig) -> Result<Self, MailError> {
        if !config.is_configured() {
            return Err(MailError::NotConfigured {
                reason: "API key and sender address are required".to_string(),
            });
        }

        Ok(Self {
            client: reqwest::Client::new(),
            config,
        })
    }

    /// Builds the SendGrid request body for a message.
    ///
    /// CC is an empty list rather than omitted when no manager address is
    /// configured; SendGrid accepts both.
    fn payload(&self, message: &EmailMessage) -> serde_json::Value {
        let cc: Vec<serde_json::Value> = message
            .cc
            .iter()
            .map(|address| json!({ "email": address }))
            .collect();

        json!({
            "personalizations": [{
                "to": [{ "email": message.to }],
                "cc": cc,
            }],
            "from": { "email": self.config.from_email },
            "subject": message.subject,
            "content": [{
                "type": "text/html",
                "value": message.html_body,
            }],
        })
    }
}

#[async_trait]
impl Mailer for SendGridMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError> {
        let url = format!("{}/v3/mail/send", self.config.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&self.payload(message))
            .send()
            .await
            .map_err(|e| MailError::RequestFailed {
                reason: format!("send request failed: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(MailError::ApiError {
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mailer() -> SendGridMailer {
        SendGridMailer::new(MailConfig {
            api_key: "SG.key".to_string(),
            from_email: "support@example.com".to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_rejects_missing_configuration() {
        let result = SendGridMailer::new(MailConfig::default());
        assert!(matches!(result, Err(MailError::NotConfigured { .. })));
    }

    #[test]
    fn test_payload_shape() {
        let message = EmailMessage {
            to: "ada@example.com".to_string(),
            cc: Some("manager@example.com".to_string()),
            subject: "Ticket Created: TKT-1".to_string(),
            html_body: "<p>hi</p>".to_string(),
        };

        let payload = mailer().payload(&message);

        assert_eq!(
            payload["personalizations"][0]["to"][0]["email"],
            "ada@example.com"
        );
        assert_eq!(
            payload["personalizations"][0]["cc"][0]["email"],
            "manager@example.com"
        );
        assert_eq!(payload["from"]["email"], "support@example.com");
        assert_eq!(payload["subject"], "Ticket Created: TKT-1");
        assert_eq!(payload["content"][0]["type"], "text/html");
        assert_eq!(payload["content"][0]["value"], "<p>hi</p>");
    }

    #[test]
    fn test_payload_without_cc() {
        let message = EmailMessage {
            to: "ada@example.com".to_string(),
            cc: None,
            subject: "s".to_string(),
            html_body: "b".to_string(),
        };

        let payload = mailer().payload(&message);
        assert_eq!(
            payload["personalizations"][0]["cc"],
            serde_json::json!([])
        );
    }
}
