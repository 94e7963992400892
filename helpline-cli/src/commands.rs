//! CLI command implementations

use clap::Subcommand;
use helpline_core::config::HelplineConfig;
use helpline_core::mail;
use helpline_core::mode::RuntimeMode;
use helpline_core::ticket::{NewTicket, Ticket};
use helpline_web::AppState;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
        /// Use the in-memory store instead of the configured spreadsheet
        #[arg(long)]
        memory: bool,
    },
    /// Submit a ticket from the terminal
    Submit {
        /// Requester name
        #[arg(long)]
        name: String,
        /// Requester email
        #[arg(long)]
        email: String,
        /// Ticket category
        #[arg(long, default_value = "Network")]
        category: String,
        /// Problem description
        #[arg(long)]
        description: String,
    },
    /// List tickets currently in the spreadsheet
    List,
}

/// Dispatches a parsed command.
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    let mut config = HelplineConfig::from_env();

    match command {
        Commands::Serve { host, port, memory } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if memory {
                config.runtime_mode = RuntimeMode::Development;
            }

            helpline_web::run_server(config)
                .await
                .map_err(|e| anyhow::anyhow!("server error: {e}"))
        }
        Commands::Submit {
            name,
            email,
            category,
            description,
        } => {
            let state = AppState::from_config(config)?;
            let ticket = submit_ticket(
                &state,
                NewTicket {
                    name,
                    email,
                    category,
                    description,
                },
            )
            .await?;

            println!("Created ticket {}", ticket.ticket_id);
            Ok(())
        }
        Commands::List => {
            let state = AppState::from_config(config)?;
            let rows = state.store.fetch_rows().await?;

            if rows.is_empty() {
                println!("No tickets.");
                return Ok(());
            }

            println!(
                "{:<18} {:<20} {:<12} {:<8} CREATED",
                "TICKET", "NAME", "CATEGORY", "STATUS"
            );
            for row in &rows {
                let ticket = Ticket::from_row(row);
                println!(
                    "{:<18} {:<20} {:<12} {:<8} {}",
                    ticket.ticket_id, ticket.name, ticket.category, ticket.status,
                    ticket.created_at
                );
            }
            Ok(())
        }
    }
}

/// Creates a ticket via the shared state, matching the web create flow:
/// append the row, then send both notification emails best-effort.
async fn submit_ticket(state: &AppState, submission: NewTicket) -> anyhow::Result<Ticket> {
    let ticket = Ticket::from_submission(&state.config.ticket.id_prefix, submission);

    state.store.append_row(ticket.to_row()).await?;

    if let Some(mailer) = &state.mailer {
        mail::send_ticket_notifications(
            mailer.as_ref(),
            &ticket,
            state.config.mail.manager_email.as_deref(),
        )
        .await;
    }

    Ok(ticket)
}
