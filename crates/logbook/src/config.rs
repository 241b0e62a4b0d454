use std::{env, path::PathBuf};

use logbook_core::auth::Credentials;

/// Default base URL of the Cloudflare REST API.
pub const DEFAULT_D1_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Connection settings for a Cloudflare D1 database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct D1Config {
    pub account_id: String,
    pub database_id: String,
    pub api_token: String,
    /// Base URL of the REST API (default: [`DEFAULT_D1_API_BASE`])
    pub api_base: String,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database file (default: "logbook.db")
    pub sqlite_path: PathBuf,
    /// Present only when the full D1 binding is configured.
    pub d1: Option<D1Config>,
    /// Username accepted by the login endpoint (default: "admin")
    pub auth_username: String,
    /// Password accepted by the login endpoint (default: "password12345")
    pub auth_password: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "logbook.db")
    /// - `D1_ACCOUNT_ID`, `D1_DATABASE_ID`, `D1_API_TOKEN` - D1 binding; all three
    ///   must be set for D1 to be used
    /// - `D1_API_BASE` - Cloudflare API base URL
    /// - `LOGBOOK_USERNAME` / `LOGBOOK_PASSWORD` - login credentials
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let d1 = match (
            non_empty("D1_ACCOUNT_ID"),
            non_empty("D1_DATABASE_ID"),
            non_empty("D1_API_TOKEN"),
        ) {
            (Some(account_id), Some(database_id), Some(api_token)) => Some(D1Config {
                account_id,
                database_id,
                api_token,
                api_base: non_empty("D1_API_BASE")
                    .unwrap_or_else(|| DEFAULT_D1_API_BASE.to_string()),
            }),
            _ => None,
        };

        Self {
            sqlite_path: non_empty("SQLITE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("logbook.db")),
            d1,
            auth_username: non_empty("LOGBOOK_USERNAME").unwrap_or_else(|| "admin".to_string()),
            auth_password: non_empty("LOGBOOK_PASSWORD")
                .unwrap_or_else(|| "password12345".to_string()),
        }
    }

    /// The credentials the login endpoint accepts.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.auth_username, &self.auth_password)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
