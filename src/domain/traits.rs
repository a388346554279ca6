//! # Domain Traits
//!
//! Abstract interfaces for core system components (Chat, Sensu API, Rendering).
//! Allows for pluggable implementations in the Infrastructure layer.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::types::HttpResponse;
use crate::infrastructure::sensu::SensuError;
use crate::infrastructure::templates::RenderError;

/// Abstract interface for a Chat Provider (e.g., Matrix, Slack, Console)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a message to the room
    async fn send_message(&self, content: &str) -> Result<String, String>;

    /// Send a notification (not tracked/editable)
    async fn send_notification(&self, content: &str) -> Result<(), String>;

    /// Send a typing indicator
    async fn typing(&self, active: bool) -> Result<(), String>;

    /// Get the current room ID
    fn room_id(&self) -> String;
}

/// Raw access to the Sensu HTTP API.
///
/// Every call performs exactly one request and hands back whatever status and
/// body the server sent. Only transport failures are errors.
#[async_trait]
pub trait SensuApi: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, SensuError>;

    async fn delete(&self, url: &str) -> Result<HttpResponse, SensuError>;

    async fn post(&self, url: &str, body: &str) -> Result<HttpResponse, SensuError>;
}

/// Turns a named template plus data into reply text.
pub trait Renderer: Send + Sync {
    fn render(&self, template: &str, data: &Value) -> Result<String, RenderError>;
}
