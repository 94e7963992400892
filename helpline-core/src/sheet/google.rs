//! Google Sheets store for production use.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::{SheetError, SheetStore};
use crate::config::SheetConfig;

/// Ticket store backed by the Google Sheets `values` REST API.
///
/// Appends rows with `values:append` (`valueInputOption=RAW`) and reads
/// them back with `values.get`, authenticating with a pre-issued OAuth
/// bearer token from the configuration.
#[derive(Debug)]
pub struct GoogleSheetStore {
    client: reqwest::Client,
    config: SheetConfig,
}

/// Response body of a `values.get` call.
#[derive(Debug, Deserialize)]
struct ValueRange {
    /// Absent entirely when the range holds no data
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl GoogleSheetStore {
    /// Creates a store from sheet configuration.
    ///
    /// # Errors
    /// - `SheetError::NotConfigured` - Spreadsheet id or API token missing
    pub fn new(config: SheetConfig) -> Result<Self, SheetError> {
        if !config.is_configured() {
            return Err(SheetError::NotConfigured {
                reason: "spreadsheet id and API token are required".to_string(),
            });
        }

        Ok(Self {
            client: reqwest::Client::new(),
            config,
        })
    }

    /// Builds the `values` endpoint URL for a range.
    ///
    /// Ranges like `Tickets!A1` carry characters that are not path-safe,
    /// so the range segment is percent-encoded.
    fn values_url(&self, range: &str, suffix: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}{}",
            self.config.base_url,
            self.config.spreadsheet_id,
            urlencoding::encode(range),
            suffix
        )
    }
}

#[async_trait]
impl SheetStore for GoogleSheetStore {
    async fn append_row(&self, row: Vec<String>) -> Result<(), SheetError> {
        let url = self.values_url(&self.config.append_range, ":append");

        let response = self
            .client
            .post(&url)
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(&self.config.api_token)
            .json(&json!({ "values": [row] }))
            .send()
            .await
            .map_err(|e| SheetError::RequestFailed {
                reason: format!("append request failed: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(SheetError::ApiError {
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }

    async fn fetch_rows(&self) -> Result<Vec<Vec<String>>, SheetError> {
        let url = self.values_url(&self.config.read_range, "");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.config.api_token)
            .send()
            .await
            .map_err(|e| SheetError::RequestFailed {
                reason: format!("read request failed: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(SheetError::ApiError {
                status: response.status().as_u16(),
            });
        }

        let range: ValueRange =
            response
                .json()
                .await
                .map_err(|e| SheetError::ParseError {
                    reason: format!("value range decoding failed: {e}"),
                })?;

        Ok(range.values)
    }
}
