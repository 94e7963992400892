//! Spreadsheet-backed ticket storage.
//!
//! Tickets persist as rows in an external spreadsheet. The store trait is
//! row-oriented: append whole rows, read back the configured range.

mod google;
mod memory;

pub use google::GoogleSheetStore;
pub use memory::MemorySheetStore;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during spreadsheet store operations.
#[derive(Debug, Error)]
pub enum SheetError {
    /// The HTTP request to the sheet service could not be completed.
    #[error("Sheet request failed: {reason}")]
    RequestFailed {
        /// The reason the request failed
        reason: String,
    },

    /// The sheet service answered with a non-success status.
    #[error("Sheet API returned HTTP {status}")]
    ApiError {
        /// The HTTP status code returned
        status: u16,
    },

    /// The sheet service's response could not be decoded.
    #[error("Failed to parse sheet response: {reason}")]
    ParseError {
        /// The reason decoding failed
        reason: String,
    },

    /// The store is missing required configuration.
    #[error("Sheet access is not configured: {reason}")]
    NotConfigured {
        /// What is missing from the configuration
        reason: String,
    },
}

/// Row-oriented spreadsheet storage.
///
/// Rows are positional string cells with no schema beyond column order;
/// ordering of concurrent appends is whatever the backing service does.
#[async_trait]
pub trait SheetStore: Send + Sync + std::fmt::Debug {
    /// Appends a single row after the existing data.
    async fn append_row(&self, row: Vec<String>) -> Result<(), SheetError>;

    /// Fetches every data row in the configured read range.
    async fn fetch_rows(&self) -> Result<Vec<Vec<String>>, SheetError>;
}
