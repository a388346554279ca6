//! # Log Messages
//!
//! Format functions for log lines written by the bot and its commands.

pub fn config_read_error(path: &str) -> String {
    format!("Failed to read {path}")
}

pub const CONFIG_PARSE_ERROR: &str = "Failed to parse YAML";
pub const PARTIAL_CREDENTIALS: &str =
    "Only one of sensu.api_user / sensu.api_pass is set; requests will be sent without auth";

pub fn starting(version: &str) -> String {
    format!("Starting sensubot {version}...")
}

pub fn sensu_endpoint(url: &str, auth: bool) -> String {
    format!("Using Sensu API at {url} (basic auth: {auth})")
}

pub fn logged_in(user: &str) -> String {
    format!("Logged in as {user}")
}

pub fn setting_display_name(name: &str) -> String {
    format!("Setting display name to: {name}")
}

pub fn set_display_name_fail(err: &str) -> String {
    format!("Failed to set display name: {err}")
}

pub fn message_received(sender: &str, body: &str) -> String {
    format!("Received message from {sender}: {body}")
}

pub fn route_failed(err: &str) -> String {
    format!("Failed to route message: {err}")
}

pub fn dispatching(command: &str, sender: &str) -> String {
    format!("Router dispatching cmd='{command}' sender='{sender}'")
}

pub fn command_failed(command: &str, err: &str) -> String {
    format!("Command '{command}' failed: {err}")
}

pub fn internal_error(action: &str, url: &str) -> String {
    format!("Sensu returned an internal error {action} {url}")
}

pub fn internal_error_with_payload(action: &str, url: &str, payload: &str) -> String {
    format!("Sensu returned an internal error {action} {url} with {payload}")
}

pub fn transport_error(url: &str, err: &str) -> String {
    format!("Could not reach Sensu at {url}: {err}")
}

pub fn transport_timeout(url: &str) -> String {
    format!("Timed out waiting for Sensu at {url}")
}

pub fn unexpected_body(url: &str, err: &str) -> String {
    format!("Sensu returned an unexpected body from {url}: {err}")
}

pub fn render_failed(template: &str, err: &str) -> String {
    format!("Failed to render {template}: {err}")
}

pub fn invite_received(room_id: &str) -> String {
    format!("Received invite for room {room_id}")
}

pub fn join_invite_fail(err: &str) -> String {
    format!("Failed to join room after invite: {err}")
}

pub fn sync_loop_fail(err: &str) -> String {
    format!("Sync loop failed: {err}")
}
