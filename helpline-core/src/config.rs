//! Centralized configuration for Helpline.
//!
//! All tunable parameters live here so the rest of the codebase never
//! reads environment variables directly.

use crate::mode::RuntimeMode;

/// Central configuration for all Helpline components.
///
/// Groups related settings into logical sections and supports environment
/// variable overrides for runtime customization.
#[derive(Debug, Clone, Default)]
pub struct HelplineConfig {
    pub server: ServerConfig,
    pub ticket: TicketConfig,
    pub sheet: SheetConfig,
    pub mail: MailConfig,
    pub runtime_mode: RuntimeMode,
}

/// HTTP server bind settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Ticket identity settings.
#[derive(Debug, Clone)]
pub struct TicketConfig {
    /// Prefix prepended to generated ticket ids
    pub id_prefix: String,
}

impl Default for TicketConfig {
    fn default() -> Self {
        Self {
            id_prefix: "TKT-".to_string(),
        }
    }
}

/// Google Sheets store settings.
///
/// The store authenticates with a pre-issued OAuth bearer token; the base
/// URL is overridable so tests can point at a local stand-in.
#[derive(Debug, Clone)]
pub struct SheetConfig {
    /// Base URL of the Sheets API
    pub base_url: String,
    /// Id of the spreadsheet holding ticket rows
    pub spreadsheet_id: String,
    /// OAuth bearer token with spreadsheet scope
    pub api_token: String,
    /// Range new rows are appended after
    pub append_range: String,
    /// Range read back when listing tickets
    pub read_range: String,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            base_url: "https://sheets.googleapis.com".to_string(),
            spreadsheet_id: String::new(),
            api_token: String::new(),
            append_range: "Tickets!A1".to_string(),
            read_range: "Tickets!A2:G".to_string(),
        }
    }
}

impl SheetConfig {
    /// True when the production store has everything it needs.
    pub fn is_configured(&self) -> bool {
        !self.spreadsheet_id.is_empty() && !self.api_token.is_empty()
    }
}

/// SendGrid mailer settings.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// Base URL of the SendGrid API
    pub base_url: String,
    /// SendGrid API key
    pub api_key: String,
    /// Sender address for all outbound mail
    pub from_email: String,
    /// Address CC'd on confirmations and notified of new tickets
    pub manager_email: Option<String>,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.sendgrid.com".to_string(),
            api_key: String::new(),
            from_email: String::new(),
            manager_email: None,
        }
    }
}

impl MailConfig {
    /// True when outbound mail can actually be sent.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.from_email.is_empty()
    }
}

impl HelplineConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// External-service variables keep the names the deployment already
    /// uses (`SHEET_ID`, `SENDGRID_API_KEY`, ...); Helpline-specific knobs
    /// are prefixed with `HELPLINE_`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("HELPLINE_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("HELPLINE_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                config.server.port = port;
            }
        }
        if let Ok(prefix) = std::env::var("HELPLINE_TICKET_PREFIX") {
            config.ticket.id_prefix = prefix;
        }
        if let Ok(mode) = std::env::var("HELPLINE_MODE") {
            if let Ok(mode) = mode.parse::<RuntimeMode>() {
                config.runtime_mode = mode;
            }
        }

        if let Ok(id) = std::env::var("SHEET_ID") {
            config.sheet.spreadsheet_id = id;
        }
        if let Ok(token) = std::env::var("SHEET_TOKEN") {
            config.sheet.api_token = token;
        }
        if let Ok(range) = std::env::var("SHEET_APPEND_RANGE") {
            config.sheet.append_range = range;
        }
        if let Ok(range) = std::env::var("SHEET_READ_RANGE") {
            config.sheet.read_range = range;
        }

        if let Ok(key) = std::env::var("SENDGRID_API_KEY") {
            config.mail.api_key = key;
        }
        if let Ok(from) = std::env::var("FROM_EMAIL") {
            config.mail.from_email = from;
        }
        if let Ok(manager) = std::env::var("MANAGER_EMAIL") {
            config.mail.manager_email = Some(manager);
        }

        config
    }

    /// Creates a configuration suitable for tests.
    ///
    /// Development mode with a distinct ticket prefix so test artifacts
    /// are recognizable.
    pub fn for_testing() -> Self {
        Self {
            ticket: TicketConfig {
                id_prefix: "TST-".to_string(),
            },
            runtime_mode: RuntimeMode::Development,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = HelplineConfig::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.ticket.id_prefix, "TKT-");
        assert_eq!(config.sheet.append_range, "Tickets!A1");
        assert_eq!(config.sheet.read_range, "Tickets!A2:G");
        assert!(!config.sheet.is_configured());
        assert!(!config.mail.is_configured());
        assert!(config.runtime_mode.is_development());
    }

    #[test]
    fn test_configured_flags() {
        let mut config = HelplineConfig::default();
        config.sheet.spreadsheet_id = "abc123".to_string();
        config.sheet.api_token = "ya29.token".to_string();
        config.mail.api_key = "SG.key".to_string();
        config.mail.from_email = "support@example.com".to_string();

        assert!(config.sheet.is_configured());
        assert!(config.mail.is_configured());
    }

    #[test]
    fn test_env_override() {
        unsafe {
            std::env::set_var("HELPLINE_PORT", "8080");
            std::env::set_var("HELPLINE_TICKET_PREFIX", "BHN-");
            std::env::set_var("HELPLINE_MODE", "production");
            std::env::set_var("SHEET_ID", "sheet-id");
            std::env::set_var("SHEET_TOKEN", "sheet-token");
            std::env::set_var("MANAGER_EMAIL", "manager@example.com");
        }

        let config = HelplineConfig::from_env();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.ticket.id_prefix, "BHN-");
        assert!(config.runtime_mode.is_production());
        assert_eq!(config.sheet.spreadsheet_id, "sheet-id");
        assert_eq!(config.sheet.api_token, "sheet-token");
        assert_eq!(
            config.mail.manager_email.as_deref(),
            Some("manager@example.com")
        );

        // Cleanup
        unsafe {
            std::env::remove_var("HELPLINE_PORT");
            std::env::remove_var("HELPLINE_TICKET_PREFIX");
            std::env::remove_var("HELPLINE_MODE");
            std::env::remove_var("SHEET_ID");
            std::env::remove_var("SHEET_TOKEN");
            std::env::remove_var("MANAGER_EMAIL");
        }
    }

    #[test]
    fn test_testing_preset() {
        let config = HelplineConfig::for_testing();
        assert_eq!(config.ticket.id_prefix, "TST-");
        assert!(config.runtime_mode.is_development());
    }
}
