//! Axum server wiring for the Helpline web app.
//!
//! Wires the store and mailer according to the runtime mode, builds the
//! router, and serves until the listener fails.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use helpline_core::HelplineError;
use helpline_core::config::HelplineConfig;
use helpline_core::mail::{Mailer, MemoryMailer, SendGridMailer};
use helpline_core::mode::RuntimeMode;
use helpline_core::sheet::{GoogleSheetStore, MemorySheetStore, SheetStore};
use tower_http::cors::CorsLayer;

use crate::handlers::{api_create_ticket, api_list_tickets};
use crate::pages::{dashboard_page, intake_page};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SheetStore>,
    pub mailer: Option<Arc<dyn Mailer>>,
    pub config: HelplineConfig,
}

impl AppState {
    /// Builds state with collaborators chosen by the runtime mode.
    ///
    /// Production requires sheet configuration; mail stays optional and is
    /// disabled with a warning when not configured.
    ///
    /// # Errors
    /// - `HelplineError::Sheet` - Production mode without sheet credentials
    /// - `HelplineError::Mail` - Mail configured but the mailer rejected it
    pub fn from_config(config: HelplineConfig) -> Result<Self, HelplineError> {
        let (store, mailer): (Arc<dyn SheetStore>, Option<Arc<dyn Mailer>>) =
            match config.runtime_mode {
                RuntimeMode::Production => {
                    let store = Arc::new(GoogleSheetStore::new(config.sheet.clone())?);
                    let mailer = if config.mail.is_configured() {
                        let mailer = SendGridMailer::new(config.mail.clone())?;
                        Some(Arc::new(mailer) as Arc<dyn Mailer>)
                    } else {
                        tracing::warn!("mail not configured; ticket notifications disabled");
                        None
                    };
                    (store, mailer)
                }
                RuntimeMode::Development => (
                    Arc::new(MemorySheetStore::new()),
                    Some(Arc::new(MemoryMailer::new())),
                ),
            };

        Ok(Self {
            store,
            mailer,
            config,
        })
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(intake_page))
        .route("/dashboard", get(dashboard_page))
        // JSON API
        .route("/api/ticket", get(api_list_tickets).post(api_create_ticket))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Runs the web server with the given configuration.
pub async fn run_server(config: HelplineConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let mode = config.runtime_mode;

    let state = AppState::from_config(config)?;
    let app = router(state);

    tracing::info!("Helpline ({mode}) running on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_state_wires_memory_collaborators() {
        let state = AppState::from_config(HelplineConfig::for_testing()).unwrap();
        assert!(state.mailer.is_some());
    }

    #[test]
    fn test_production_state_requires_sheet_config() {
        let mut config = HelplineConfig::default();
        config.runtime_mode = RuntimeMode::Production;

        let result = AppState::from_config(config);
        assert!(matches!(result, Err(HelplineError::Sheet(_))));
    }

    #[test]
    fn test_production_state_without_mail_config() {
        let mut config = HelplineConfig::default();
        config.runtime_mode = RuntimeMode::Production;
        config.sheet.spreadsheet_id = "sheet123".to_string();
        config.sheet.api_token = "token".to_string();

        let state = AppState::from_config(config).unwrap();
        assert!(state.mailer.is_none());
    }
}
