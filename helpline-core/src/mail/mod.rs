//! Outbound email for ticket notifications.
//!
//! Sends are best-effort: callers log failures and carry on, so a ticket
//! whose row is already written is never failed by a mail problem.

mod memory;
mod sendgrid;

pub use memory::MemoryMailer;
pub use sendgrid::SendGridMailer;

use async_trait::async_trait;
use thiserror::Error;

use crate::ticket::Ticket;

/// Errors that can occur while sending mail.
#[derive(Debug, Error)]
pub enum MailError {
    /// The HTTP request to the mail service could not be completed.
    #[error("Mail request failed: {reason}")]
    RequestFailed {
        /// The reason the request failed
        reason: String,
    },

    /// The mail service answered with a non-success status.
    #[error("Mail API returned HTTP {status}")]
    ApiError {
        /// The HTTP status code returned
        status: u16,
    },

    /// The mailer is missing required configuration.
    #[error("Mail is not configured: {reason}")]
    NotConfigured {
        /// What is missing from the configuration
        reason: String,
    },
}

/// One outbound email.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
    pub to: String,
    pub cc: Option<String>,
    pub subject: String,
    pub html_body: String,
}

/// Sends a single email message.
#[async_trait]
pub trait Mailer: Send + Sync + std::fmt::Debug {
    /// Delivers one message; the sender address comes from configuration.
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError>;
}

/// Builds the confirmation email sent to the requester.
///
/// The manager address, when present, is CC'd so support sees every
/// confirmation that went out.
pub fn confirmation_email(ticket: &Ticket, manager_cc: Option<&str>) -> EmailMessage {
    EmailMessage {
        to: ticket.email.clone(),
        cc: manager_cc.map(str::to_string),
        subject: format!("Ticket Created: {}", ticket.ticket_id),
        html_body: format!(
            "<h3>Helpline Support</h3>\
             <p>Hello <b>{}</b>,</p>\
             <p>Your ticket has been created.</p>\
             <p><b>Ticket ID:</b> {}</p>\
             <p><b>Category:</b> {}</p>\
             <p>{}</p>\
             <br/>\
             <p>We will get back to you shortly.</p>",
            ticket.name, ticket.ticket_id, ticket.category, ticket.description
        ),
    }
}

/// Builds the new-ticket notification sent to the manager.
pub fn manager_notification(ticket: &Ticket, manager: &str) -> EmailMessage {
    EmailMessage {
        to: manager.to_string(),
        cc: None,
        subject: format!("New Ticket: {} ({})", ticket.ticket_id, ticket.category),
        html_body: format!(
            "<h3>New support ticket</h3>\
             <p><b>Ticket ID:</b> {}</p>\
             <p><b>From:</b> {} &lt;{}&gt;</p>\
             <p><b>Category:</b> {}</p>\
             <p>{}</p>",
            ticket.ticket_id, ticket.name, ticket.email, ticket.category, ticket.description
        ),
    }
}

/// Sends the requester confirmation and the manager notification.
///
/// A row that is already written is never rolled back because a
/// notification did not go out; failures are logged and swallowed.
pub async fn send_ticket_notifications(
    mailer: &dyn Mailer,
    ticket: &Ticket,
    manager: Option<&str>,
) {
    let confirmation = confirmation_email(ticket, manager);
    if let Err(e) = mailer.send(&confirmation).await {
        tracing::warn!("confirmation email failed for {}: {e}", ticket.ticket_id);
    }

    if let Some(manager) = manager {
        let notification = manager_notification(ticket, manager);
        if let Err(e) = mailer.send(&notification).await {
            tracing::warn!("manager notification failed for {}: {e}", ticket.ticket_id);
        }
    }
}
