//! Harvest API v2 client for time entries.
//!
//! Wraps the `/time_entries` endpoints used by the commands: create, list by
//! date range, fetch one, update and delete. Responses are decoded into wire
//! types and converted into the core [`crate::libs::entry::TimeEntry`] that
//! the reporting code consumes.
//!
//! ## Authentication
//!
//! Every request carries a personal access token and the account id:
//!
//! ```text
//! Authorization: Bearer <token>
//! Harvest-Account-ID: <account id>
//! User-Agent: Harvest CLI Utility
//! Accept: application/json
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use harvest_cli::api::harvest::Harvest;
//! use harvest_cli::libs::config::ApiConfig;
//!
//! # async fn run(config: ApiConfig) -> anyhow::Result<()> {
//! let client = Harvest::new(&config)?;
//! let entries = client.time_entries("2024-01-01", "2024-01-31").await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::config::{ApiConfig, ConfigError};
use crate::libs::entry;
use chrono::NaiveDate;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT},
    Client, RequestBuilder,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

const TIME_ENTRIES_URL: &str = "time_entries";
const USER_AGENT_VALUE: &str = "Harvest CLI Utility";
const ACCOUNT_ID_HEADER: &str = "harvest-account-id";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors returned by the Harvest client.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid header value: {0}")]
    Header(#[from] InvalidHeaderValue),

    #[error("failed to send request: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("API error: {message} (status code: {status})")]
    Api { status: u16, message: String },

    #[error("invalid spent_date '{value}' in time entry {id}")]
    InvalidDate { id: i64, value: String },
}

/// An `{id, name}` reference embedded in API responses.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Reference {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// A time entry as returned by the API.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TimeEntryRecord {
    pub id: i64,
    pub spent_date: String,
    #[serde(default)]
    pub hours: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    pub project: Reference,
    pub task: Reference,
}

impl TryFrom<TimeEntryRecord> for entry::TimeEntry {
    type Error = HarvestError;

    fn try_from(record: TimeEntryRecord) -> Result<Self, Self::Error> {
        let date = NaiveDate::parse_from_str(&record.spent_date, "%Y-%m-%d").map_err(|_| HarvestError::InvalidDate {
            id: record.id,
            value: record.spent_date.clone(),
        })?;
        Ok(entry::TimeEntry {
            id: record.id,
            date,
            project_id: record.project.id,
            project_name: record.project.name,
            task_id: record.task.id,
            task_name: record.task.name,
            hours: record.hours.unwrap_or(0.0),
            notes: record.notes.unwrap_or_default(),
        })
    }
}

/// One page of `GET /time_entries`.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeEntriesPage {
    pub time_entries: Vec<TimeEntryRecord>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub next_page: Option<u32>,
}

/// Body of `POST /time_entries`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewTimeEntry {
    pub project_id: i64,
    pub task_id: i64,
    pub spent_date: NaiveDate,
    pub hours: f64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

/// Body of `PATCH /time_entries/{id}`; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TimeEntryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spent_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TimeEntryUpdate {
    pub fn is_empty(&self) -> bool {
        *self == TimeEntryUpdate::default()
    }
}

/// Harvest API client.
#[derive(Debug, Clone)]
pub struct Harvest {
    client: Client,
    base_url: String,
}

impl Harvest {
    /// Builds a client with authentication headers and a 10 second timeout.
    pub fn new(config: &ApiConfig) -> Result<Self, HarvestError> {
        config.ensure_credentials()?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", config.token.trim()))?);
        headers.insert(HeaderName::from_static(ACCOUNT_ID_HEADER), HeaderValue::from_str(config.account_id.trim())?);
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Sends a request and returns the body, mapping status >= 400 to [`HarvestError::Api`].
    async fn send(&self, request: RequestBuilder) -> Result<String, HarvestError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "harvest response");

        if status.as_u16() >= 400 {
            return Err(HarvestError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }
        Ok(body)
    }

    pub async fn create_time_entry(&self, new_entry: &NewTimeEntry) -> Result<entry::TimeEntry, HarvestError> {
        let url = self.url(TIME_ENTRIES_URL);
        tracing::debug!(%url, project_id = new_entry.project_id, task_id = new_entry.task_id, "POST time entry");
        let body = self.send(self.client.post(&url).json(new_entry)).await?;
        serde_json::from_str::<TimeEntryRecord>(&body)?.try_into()
    }

    /// Fetches every entry with `spent_date` in `[from, to]`, following pagination.
    pub async fn time_entries(&self, from: &str, to: &str) -> Result<Vec<entry::TimeEntry>, HarvestError> {
        let url = self.url(TIME_ENTRIES_URL);
        let mut entries: Vec<entry::TimeEntry> = Vec::new();
        let mut page = 1u32;

        loop {
            tracing::debug!(%url, from, to, page, "GET time entries");
            let page_param = page.to_string();
            let request = self.client.get(&url).query(&[("from", from), ("to", to), ("page", page_param.as_str())]);
            let body = self.send(request).await?;
            let response: TimeEntriesPage = serde_json::from_str(&body)?;

            for record in response.time_entries {
                entries.push(record.try_into()?);
            }

            match response.next_page {
                Some(next) if next > page => page = next,
                _ => break,
            }
        }

        Ok(entries)
    }

    pub async fn time_entry(&self, id: i64) -> Result<entry::TimeEntry, HarvestError> {
        let url = self.url(&format!("{}/{}", TIME_ENTRIES_URL, id));
        tracing::debug!(%url, "GET time entry");
        let body = self.send(self.client.get(&url)).await?;
        serde_json::from_str::<TimeEntryRecord>(&body)?.try_into()
    }

    pub async fn update_time_entry(&self, id: i64, update: &TimeEntryUpdate) -> Result<entry::TimeEntry, HarvestError> {
        let url = self.url(&format!("{}/{}", TIME_ENTRIES_URL, id));
        tracing::debug!(%url, "PATCH time entry");
        let body = self.send(self.client.patch(&url).json(update)).await?;
        serde_json::from_str::<TimeEntryRecord>(&body)?.try_into()
    }

    pub async fn delete_time_entry(&self, id: i64) -> Result<(), HarvestError> {
        let url = self.url(&format!("{}/{}", TIME_ENTRIES_URL, id));
        tracing::debug!(%url, "DELETE time entry");
        self.send(self.client.delete(&url)).await?;
        Ok(())
    }
}

/// Extracts a readable message from an error response body.
///
/// Harvest answers with `{"message": ...}` for most failures and with
/// `{"error": ..., "error_description": ...}` for authentication problems.
pub(crate) fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["message", "error_description", "error"] {
            if let Some(text) = value.get(key).and_then(Value::as_str) {
                return text.to_string();
            }
        }
    }
    let body = body.trim();
    if body.is_empty() {
        "empty response body".to_string()
    } else {
        body.to_string()
    }
}
