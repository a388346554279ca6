//! # Command Handlers
//!
//! Contains specific handler functions for each supported Sensu command
//! (e.g., `sensu client`, `sensu silence`, `sensu events`).
//! These handlers are invoked by the Router and return the reply text.
//!
//! Every handler has the same shape: qualify its inputs, make one API call, then
//! branch on the status code. Upstream failures are logged here, once, at `warn`.

pub mod client;
pub mod events;
pub mod help;
pub mod misc;
pub mod silence;

use serde_json::{Map, Value};
use std::sync::Arc;

use crate::domain::config::SensuConfig;
use crate::domain::traits::{Renderer, SensuApi};
use crate::domain::types::HttpResponse;
use crate::infrastructure::sensu::SensuError;
use crate::strings::logs;

/// Everything a handler needs to talk to Sensu.
#[derive(Clone)]
pub struct SensuContext {
    pub config: Arc<SensuConfig>,
    pub api: Arc<dyn SensuApi>,
    pub renderer: Arc<dyn Renderer>,
}

impl SensuContext {
    pub fn new(
        config: Arc<SensuConfig>,
        api: Arc<dyn SensuApi>,
        renderer: Arc<dyn Renderer>,
    ) -> Self {
        Self {
            config,
            api,
            renderer,
        }
    }

    pub fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    /// Hostname with the configured domain applied.
    pub fn qualify(&self, host: &str) -> String {
        crate::application::sensu::qualify(host, self.config.domain())
    }
}

/// Logs a request that never got an HTTP answer.
pub(crate) fn warn_transport(url: &str, err: &SensuError) {
    if err.is_timeout() {
        tracing::warn!("{}", logs::transport_timeout(url));
    } else {
        tracing::warn!("{}", logs::transport_error(url, &err.to_string()));
    }
}

/// Parses a success body as JSON, logging when it is not.
pub(crate) fn parse_body(url: &str, resp: &HttpResponse) -> Option<Value> {
    match serde_json::from_str(&resp.body) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("{}", logs::unexpected_body(url, &e.to_string()));
            None
        }
    }
}

/// Shared flow of the list commands: GET, sort, render.
///
/// Any failure along the way is logged and answered with `error_reply`.
pub(crate) async fn fetch_list(
    ctx: &SensuContext,
    url: &str,
    template: &str,
    key: &str,
    sort: impl Fn(&mut [Value]),
    error_reply: String,
) -> String {
    let resp = match ctx.api.get(url).await {
        Ok(resp) => resp,
        Err(e) => {
            warn_transport(url, &e);
            return error_reply;
        }
    };

    if resp.status != 200 {
        tracing::warn!("{}", logs::internal_error("fetching", url));
        return error_reply;
    }

    let mut items = match parse_body(url, &resp) {
        Some(Value::Array(items)) => items,
        Some(_) => {
            tracing::warn!("{}", logs::unexpected_body(url, "expected a JSON array"));
            return error_reply;
        }
        None => return error_reply,
    };
    sort(&mut items);

    let mut data = Map::new();
    data.insert(key.to_string(), Value::Array(items));
    match ctx.renderer.render(template, &Value::Object(data)) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("{}", logs::render_failed(template, &e.to_string()));
            error_reply
        }
    }
}

/// Pretty-printed JSON reply for single-object lookups.
pub(crate) fn pretty(value: &Value) -> String {
    let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    crate::strings::messages::json_block(&text)
}
