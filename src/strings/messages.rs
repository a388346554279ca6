//! # Messages
//!
//! Contains constant strings and format functions for user-facing replies.
//! Includes not-found, validation and upstream error replies for every Sensu command.

/// Shown when a command fails hard and the router has to answer for it.
pub const REQUEST_FAILED: &str = "An error occurred while processing your request";

pub const FETCH_CLIENTS_FAILED: &str = "An error occurred fetching clients";
pub const FETCH_EVENTS_FAILED: &str = "An error occurred fetching events";
pub const FETCH_INFO_FAILED: &str = "An error occurred fetching info";
pub const FETCH_SILENCES_FAILED: &str = "An error occurred fetching silences";
pub const FETCH_STASHES_FAILED: &str = "An error occurred fetching stashes";

/// Pretty JSON fenced so Markdown clients keep the layout.
pub fn json_block(pretty: &str) -> String {
    format!("```json\n{pretty}\n```")
}

pub fn not_found(target: &str) -> String {
    format!("{target} was not found")
}

pub fn fetch_client_failed(client: &str) -> String {
    format!("An error occurred fetching client {client}")
}

pub fn fetch_history_failed(client: &str) -> String {
    format!("An error occurred fetching client {client} history")
}

pub fn client_removed(client: &str) -> String {
    format!("{client} removed")
}

pub fn remove_client_failed(client: &str) -> String {
    format!("An error occurred removing {client}")
}

pub fn event_resolved(client: &str, check: &str) -> String {
    format!("{client}/{check} resolved")
}

pub fn resolve_malformed(payload: &str) -> String {
    format!("Resolve message was malformed: {payload}")
}

pub fn resolve_failed(client: &str, check: &str) -> String {
    format!("There was an error resolving {client}/{check}")
}

pub fn silenced(key: &str, duration: &str) -> String {
    format!("{key} silenced for {duration}")
}

pub fn silence_failed(key: &str) -> String {
    format!("An error occurred silencing {key}")
}

pub fn unknown_unit(unit: &str) -> String {
    format!("Unknown unit ({unit}). I know s (seconds), m (minutes), h (hours), and d (days)")
}

pub fn invalid_duration(amount: &str) -> String {
    format!("Duration {amount} is too large")
}
