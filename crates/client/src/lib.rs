//! logbook_client - typed client and CLI for the logbook API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::LogbookClient;
pub use error::{ClientError, Result};
