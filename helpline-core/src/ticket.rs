//! Ticket model and spreadsheet row mapping.
//!
//! A ticket is stored as one spreadsheet row; cells are positional strings
//! in a fixed column order. Reads trust the sheet: cells are never parsed
//! or validated, and short rows fill with empty strings.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Status assigned to every newly created ticket.
pub const DEFAULT_STATUS: &str = "OPEN";

/// Categories offered by the intake form.
///
/// The backend accepts any category string; these only drive the form's
/// select options.
pub const CATEGORIES: [&str; 3] = ["Network", "Server", "Application"];

/// Number of spreadsheet columns a ticket occupies.
pub const COLUMN_COUNT: usize = 7;

/// A user-submitted support request.
///
/// JSON field names are camelCase to match what the intake form and
/// dashboard exchange with the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub ticket_id: String,
    pub name: String,
    pub email: String,
    pub category: String,
    pub description: String,
    pub status: String,
    /// RFC 3339 timestamp, kept as a string end to end
    pub created_at: String,
}

/// Fields accepted from the intake form when creating a ticket.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTicket {
    pub name: String,
    pub email: String,
    pub category: String,
    pub description: String,
}

impl Ticket {
    /// Creates a ticket from an intake submission.
    ///
    /// The id is the configured prefix plus the current Unix time in
    /// milliseconds. Ids are not collision-checked; two submissions in the
    /// same millisecond collide.
    pub fn from_submission(id_prefix: &str, submission: NewTicket) -> Self {
        let now = Utc::now();
        Self {
            ticket_id: format!("{}{}", id_prefix, now.timestamp_millis()),
            name: submission.name,
            email: submission.email,
            category: submission.category,
            description: submission.description,
            status: DEFAULT_STATUS.to_string(),
            created_at: now.to_rfc3339(),
        }
    }

    /// Encodes the ticket as a spreadsheet row in storage column order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.ticket_id.clone(),
            self.name.clone(),
            self.email.clone(),
            self.category.clone(),
            self.description.clone(),
            self.status.clone(),
            self.created_at.clone(),
        ]
    }

    /// Decodes a spreadsheet row read back from the store.
    ///
    /// Mapping is positional; missing trailing cells become empty strings
    /// and extra cells are ignored.
    pub fn from_row(row: &[String]) -> Self {
        let cell = |index: usize| row.get(index).cloned().unwrap_or_default();
        Self {
            ticket_id: cell(0),
            name: cell(1),
            email: cell(2),
            category: cell(3),
            description: cell(4),
            status: cell(5),
            created_at: cell(6),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> NewTicket {
        NewTicket {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            category: "Network".to_string(),
            description: "VPN drops every hour".to_string(),
        }
    }

    #[test]
    fn test_id_is_prefix_plus_millis() {
        let ticket = Ticket::from_submission("TKT-", submission());

        let suffix = ticket.ticket_id.strip_prefix("TKT-").unwrap();
        assert_eq!(suffix.len(), 13);
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_new_ticket_defaults() {
        let ticket = Ticket::from_submission("TKT-", submission());

        assert_eq!(ticket.status, DEFAULT_STATUS);
        assert!(chrono::DateTime::parse_from_rfc3339(&ticket.created_at).is_ok());
    }

    #[test]
    fn test_row_order_is_stable() {
        let ticket = Ticket::from_submission("TKT-", submission());
        let row = ticket.to_row();

        assert_eq!(row.len(), COLUMN_COUNT);
        assert_eq!(row[0], ticket.ticket_id);
        assert_eq!(row[1], "Ada");
        assert_eq!(row[2], "ada@example.com");
        assert_eq!(row[3], "Network");
        assert_eq!(row[4], "VPN drops every hour");
        assert_eq!(row[5], "OPEN");
        assert_eq!(row[6], ticket.created_at);
    }

    #[test]
    fn test_row_round_trip() {
        let ticket = Ticket::from_submission("BHN-", submission());
        assert_eq!(Ticket::from_row(&ticket.to_row()), ticket);
    }

    #[test]
    fn test_short_row_fills_empty() {
        let row = vec!["TKT-1".to_string(), "Ada".to_string()];
        let ticket = Ticket::from_row(&row);

        assert_eq!(ticket.ticket_id, "TKT-1");
        assert_eq!(ticket.name, "Ada");
        assert_eq!(ticket.email, "");
        assert_eq!(ticket.status, "");
        assert_eq!(ticket.created_at, "");
    }

    #[test]
    fn test_json_field_names_are_camel_case() {
        let ticket = Ticket::from_submission("TKT-", submission());
        let json = serde_json::to_value(&ticket).unwrap();

        assert!(json.get("ticketId").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("ticket_id").is_none());
    }
}
