//! In-memory sheet store for development and tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{SheetError, SheetStore};

/// Stores rows in process memory.
///
/// Mirrors the production store's append/read contract without any
/// external service, so development mode and tests exercise the same
/// call paths as production.
#[derive(Debug, Default)]
pub struct MemorySheetStore {
    rows: RwLock<Vec<Vec<String>>>,
}

impl MemorySheetStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with rows.
    pub fn with_rows(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }
}

#[async_trait]
impl SheetStore for MemorySheetStore {
    async fn append_row(&self, row: Vec<String>) -> Result<(), SheetError> {
        self.rows.write().await.push(row);
        Ok(())
    }

    async fn fetch_rows(&self) -> Result<Vec<Vec<String>>, SheetError> {
        Ok(self.rows.read().await.clone())
    }
}
