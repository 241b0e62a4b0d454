use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use logbook_core::storage::{ExecOutcome, RepositoryError, Result, SqlEngine, SqlRow, SqlValue};

use super::error::{map_api_errors, map_reqwest_error, D1Message};
use crate::config::D1Config;

/// Request body for the D1 query endpoint.
#[derive(Debug, Serialize)]
struct D1Query<'a> {
    sql: &'a str,
    params: Vec<SqlValue>,
}

/// Response envelope returned by every Cloudflare API call.
#[derive(Debug, Deserialize)]
struct D1Envelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    errors: Vec<D1Message>,
    #[serde(default)]
    result: Option<Vec<D1Result>>,
}

/// The result of one statement.
#[derive(Debug, Deserialize)]
struct D1Result {
    #[serde(default)]
    results: Vec<SqlRow>,
    #[serde(default = "default_success")]
    success: bool,
    #[serde(default)]
    meta: D1Meta,
}

#[derive(Debug, Default, Deserialize)]
struct D1Meta {
    #[serde(default)]
    changes: u64,
    #[serde(default)]
    last_row_id: Option<i64>,
}

fn default_success() -> bool {
    true
}

/// Extracts the single statement result from a decoded envelope.
fn first_result(envelope: D1Envelope) -> Result<D1Result> {
    if !envelope.success || !envelope.errors.is_empty() {
        return Err(map_api_errors(&envelope.errors));
    }

    let result = envelope
        .result
        .into_iter()
        .flatten()
        .next()
        .ok_or_else(|| RepositoryError::Serialization("D1 returned no result".to_string()))?;

    if !result.success {
        return Err(RepositoryError::QueryFailed(
            "D1 statement did not succeed".to_string(),
        ));
    }

    Ok(result)
}

/// Engine backed by a Cloudflare D1 database.
pub struct D1Engine {
    client: reqwest::Client,
    query_url: String,
    api_token: String,
}

impl D1Engine {
    /// Creates an engine for the configured D1 database.
    pub fn new(config: &D1Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        let query_url = format!(
            "{}/accounts/{}/d1/database/{}/query",
            config.api_base.trim_end_matches('/'),
            config.account_id,
            config.database_id
        );

        Ok(Self {
            client,
            query_url,
            api_token: config.api_token.clone(),
        })
    }

    async fn run(&self, sql: &str, params: Vec<SqlValue>) -> Result<D1Result> {
        let response = self
            .client
            .post(&self.query_url)
            .bearer_auth(&self.api_token)
            .json(&D1Query { sql, params })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_reqwest_error)?;

        // Failed calls usually still carry an envelope with the real error.
        let envelope: D1Envelope = serde_json::from_str(&body).map_err(|e| {
            if status.is_success() {
                RepositoryError::Serialization(format!("Invalid D1 response: {e}"))
            } else {
                RepositoryError::QueryFailed(format!("D1 returned HTTP {status}: {body}"))
            }
        })?;

        tracing::debug!(%status, "D1 statement completed");

        first_result(envelope)
    }
}

#[async_trait]
impl SqlEngine for D1Engine {
    fn name(&self) -> &'static str {
        "d1"
    }

    async fn query(&self, sql: &str, params: Vec<SqlValue>) -> Result<Vec<SqlRow>> {
        Ok(self.run(sql, params).await?.results)
    }

    async fn execute(&self, sql: &str, params: Vec<SqlValue>) -> Result<ExecOutcome> {
        let meta = self.run(sql, params).await?.meta;

        Ok(ExecOutcome {
            changes: meta.changes,
            last_insert_id: meta
                .last_row_id
                .filter(|id| *id > 0 && meta.changes > 0),
        })
    }
}
