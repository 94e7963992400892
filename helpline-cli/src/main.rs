//! Helpline CLI - Command-line interface
//!
//! Provides command-line access to the Helpline ticket service.

mod commands;

use clap::Parser;
use helpline_core::tracing_setup::{self, CliLogLevel};

#[derive(Parser)]
#[command(name = "helpline")]
#[command(about = "A support-ticket intake service")]
struct Cli {
    /// Console log level
    #[arg(long, value_enum, default_value_t = CliLogLevel::Info)]
    log_level: CliLogLevel,

    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_setup::init_tracing(cli.log_level.as_tracing_level(), None)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    commands::handle_command(cli.command).await
}
