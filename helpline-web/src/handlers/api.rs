//! JSON API handlers for ticket creation and listing

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use helpline_core::mail;
use helpline_core::ticket::{NewTicket, Ticket};
use serde_json::json;

use crate::server::AppState;

type ApiError = (StatusCode, Json<serde_json::Value>);

fn internal_error(message: String) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
}

/// Creates a ticket from an intake submission.
///
/// Appends one spreadsheet row, then fires the notification emails
/// best-effort. Only a store failure fails the request.
pub async fn api_create_ticket(
    State(state): State<AppState>,
    Json(submission): Json<NewTicket>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let ticket = Ticket::from_submission(&state.config.ticket.id_prefix, submission);

    if let Err(e) = state.store.append_row(ticket.to_row()).await {
        tracing::error!("ticket append failed: {e}");
        return Err(internal_error(e.to_string()));
    }

    notify(&state, &ticket).await;

    Ok(Json(json!({
        "success": true,
        "ticketId": ticket.ticket_id,
    })))
}

/// Lists every ticket currently in the spreadsheet.
///
/// Rows map positionally to ticket fields; short rows fill with empty
/// strings rather than failing the whole listing.
pub async fn api_list_tickets(
    State(state): State<AppState>,
) -> Result<Json<Vec<Ticket>>, ApiError> {
    match state.store.fetch_rows().await {
        Ok(rows) => {
            let tickets = rows.iter().map(|row| Ticket::from_row(row)).collect();
            Ok(Json(tickets))
        }
        Err(e) => {
            tracing::error!("ticket fetch failed: {e}");
            Err(internal_error(e.to_string()))
        }
    }
}

/// Sends the ticket notifications when a mailer is wired.
async fn notify(state: &AppState, ticket: &Ticket) {
    let Some(mailer) = &state.mailer else { return };
    mail::send_ticket_notifications(
        mailer.as_ref(),
        ticket,
        state.config.mail.manager_email.as_deref(),
    )
    .await;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use helpline_core::config::HelplineConfig;
    use helpline_core::mail::{EmailMessage, MailError, Mailer, MemoryMailer};
    use helpline_core::sheet::{MemorySheetStore, SheetError, SheetStore};

    use super::*;

    /// Store double whose every call fails.
    #[derive(Debug)]
    struct FailingStore;

    #[async_trait]
    impl SheetStore for FailingStore {
        async fn append_row(&self, _row: Vec<String>) -> Result<(), SheetError> {
            Err(SheetError::ApiError { status: 503 })
        }

        async fn fetch_rows(&self) -> Result<Vec<Vec<String>>, SheetError> {
            Err(SheetError::ApiError { status: 503 })
        }
    }

    /// Mailer double whose every call fails.
    #[derive(Debug)]
    struct FailingMailer;

    #[async_trait]
    impl Mailer for FailingMailer {
        async fn send(&self, _message: &EmailMessage) -> Result<(), MailError> {
            Err(MailError::ApiError { status: 401 })
        }
    }

    fn memory_state(store: Arc<MemorySheetStore>, mailer: Arc<MemoryMailer>) -> AppState {
        let mut config = HelplineConfig::for_testing();
        config.mail.manager_email = Some("manager@example.com".to_string());
        AppState {
            store,
            mailer: Some(mailer),
            config,
        }
    }

    fn submission() -> NewTicket {
        NewTicket {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            category: "Network".to_string(),
            description: "VPN drops every hour".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_returns_ticket_id_and_appends_row() {
        let store = Arc::new(MemorySheetStore::new());
        let mailer = Arc::new(MemoryMailer::new());
        let state = memory_state(store.clone(), mailer.clone());

        let response = api_create_ticket(State(state), Json(submission()))
            .await
            .unwrap();

        assert_eq!(response.0["success"], true);
        let ticket_id = response.0["ticketId"].as_str().unwrap().to_string();
        assert!(ticket_id.starts_with("TST-"));

        let rows = store.fetch_rows().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], ticket_id);
        assert_eq!(rows[0][5], "OPEN");
    }

    #[tokio::test]
    async fn test_create_sends_confirmation_and_manager_notification() {
        let store = Arc::new(MemorySheetStore::new());
        let mailer = Arc::new(MemoryMailer::new());
        let state = memory_state(store, mailer.clone());

        api_create_ticket(State(state), Json(submission()))
            .await
            .unwrap();

        let sent = mailer.sent().await;
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, "ada@example.com");
        assert_eq!(sent[0].cc.as_deref(), Some("manager@example.com"));
        assert_eq!(sent[1].to, "manager@example.com");
    }

    #[tokio::test]
    async fn test_created_ticket_shows_up_in_listing() {
        let store = Arc::new(MemorySheetStore::new());
        let mailer = Arc::new(MemoryMailer::new());
        let state = memory_state(store, mailer);

        let response = api_create_ticket(State(state.clone()), Json(submission()))
            .await
            .unwrap();
        let ticket_id = response.0["ticketId"].as_str().unwrap().to_string();

        let listing = api_list_tickets(State(state)).await.unwrap();
        assert!(listing.0.iter().any(|t| t.ticket_id == ticket_id));
    }

    #[tokio::test]
    async fn test_store_failure_returns_500_with_error() {
        let state = AppState {
            store: Arc::new(FailingStore),
            mailer: None,
            config: HelplineConfig::for_testing(),
        };

        let result = api_create_ticket(State(state.clone()), Json(submission())).await;
        let (status, body) = result.unwrap_err();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.0["error"].as_str().unwrap().contains("503"));

        let result = api_list_tickets(State(state)).await;
        let (status, _) = result.unwrap_err();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_mail_failure_does_not_fail_creation() {
        let store = Arc::new(MemorySheetStore::new());
        let mut config = HelplineConfig::for_testing();
        config.mail.manager_email = Some("manager@example.com".to_string());
        let state = AppState {
            store: store.clone(),
            mailer: Some(Arc::new(FailingMailer)),
            config,
        };

        let response = api_create_ticket(State(state), Json(submission()))
            .await
            .unwrap();

        assert_eq!(response.0["success"], true);
        assert_eq!(store.fetch_rows().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_listing_tolerates_short_rows() {
        let store = Arc::new(MemorySheetStore::with_rows(vec![vec![
            "TKT-1".to_string(),
            "Ada".to_string(),
        ]]));
        let state = AppState {
            store,
            mailer: None,
            config: HelplineConfig::for_testing(),
        };

        let listing = api_list_tickets(State(state)).await.unwrap();
        assert_eq!(listing.0.len(), 1);
        assert_eq!(listing.0[0].ticket_id, "TKT-1");
        assert_eq!(listing.0[0].status, "");
    }
}
