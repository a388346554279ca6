//! # Domain Types
//!
//! Common data structures used across the application logic: the raw HTTP result,
//! the request payloads we send to Sensu and typed views over the records it returns.
//!
//! The record types only name the fields the bot reads. Everything else is kept in
//! `extra` so unknown upstream fields survive a round trip.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Status and body of a single API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// A silence duration in seconds plus the label shown back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expiration {
    pub seconds: u64,
    pub label: String,
}

/// Body of `POST /silenced`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SilenceRequest {
    pub creator: String,
    pub expire: u64,
    pub reason: String,
    pub subscription: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<String>,
}

/// Body of `POST /resolve`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResolveRequest {
    pub client: String,
    pub check: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub subscriptions: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of `GET /clients/:name/history`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub check: String,
    #[serde(default)]
    pub history: Vec<i64>,
    #[serde(default)]
    pub last_execution: Option<i64>,
    #[serde(default)]
    pub last_status: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventClient {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCheck {
    pub name: String,
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub client: EventClient,
    pub check: EventCheck,
    #[serde(default)]
    pub occurrences: Option<u64>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of `GET /silenced`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Silence {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub subscription: Option<String>,
    #[serde(default)]
    pub check: Option<String>,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    /// Seconds left, or `-1` when the silence never expires.
    #[serde(default)]
    pub expire: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stash {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub content: Value,
    #[serde(default)]
    pub expire: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Stash {
    /// The stash's display key; Sensu 1.x stashes carry `path`, older ones `name`.
    pub fn key(&self) -> &str {
        self.name
            .as_deref()
            .or(self.path.as_deref())
            .unwrap_or("?")
    }
}
