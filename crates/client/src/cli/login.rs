//! Login CLI command.

use clap::Parser;

/// Check a username and password against the server.
#[derive(Debug, Parser)]
pub struct LoginCommand {
    /// Username.
    #[arg(long, default_value = "admin")]
    pub username: String,
    /// Password.
    #[arg(long, env = "LOGBOOK_PASSWORD")]
    pub password: String,
}
