//! Helpline Core - ticket intake building blocks
//!
//! This crate provides the pieces the Helpline service is assembled from:
//! the ticket model and its spreadsheet row mapping, configuration,
//! spreadsheet-backed storage, and outbound mail clients.

pub mod config;
pub mod mail;
pub mod mode;
pub mod sheet;
pub mod ticket;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use config::HelplineConfig;
pub use mail::{MailError, Mailer};
pub use mode::RuntimeMode;
pub use sheet::{SheetError, SheetStore};
pub use ticket::{NewTicket, Ticket};

/// Core errors that can bubble up from any Helpline subsystem.
#[derive(Debug, thiserror::Error)]
pub enum HelplineError {
    #[error("Sheet error: {0}")]
    Sheet(#[from] SheetError),

    #[error("Mail error: {0}")]
    Mail(#[from] MailError),

    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HelplineError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            HelplineError::Sheet(e) => match e {
                SheetError::NotConfigured { .. } => {
                    "Spreadsheet access is not configured".to_string()
                }
                _ => "Could not reach the ticket spreadsheet".to_string(),
            },
            HelplineError::Mail(_) => "Could not send notification email".to_string(),
            HelplineError::Configuration { reason } => {
                format!("Configuration problem: {reason}")
            }
            HelplineError::Io(_) => "I/O error occurred".to_string(),
        }
    }
}

/// Convenience result type for core operations.
pub type Result<T> = std::result::Result<T, HelplineError>;
