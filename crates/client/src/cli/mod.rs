//! CLI command definitions.

pub mod health;
pub mod journals;
pub mod login;
pub mod todos;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the logbook API.
#[derive(Debug, Parser)]
#[command(name = "logbook-client")]
#[command(about = "CLI client for the logbook API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "LOGBOOK_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Journal management.
    Journals(journals::JournalsCommand),
    /// Todo management.
    Todos(todos::TodosCommand),
    /// Check credentials against the server.
    Login(login::LoginCommand),
    /// Server health checks.
    Health(health::HealthCommand),
}
