//! # Templates
//!
//! Markdown layouts for the list-style replies (clients, history, events, silences, stashes).
//! Each function receives the already sorted records and returns the reply body.

use chrono::DateTime;

use crate::domain::types::{Client, Event, HistoryEntry, Silence, Stash};

pub const CLIENTS: &str = "clients";
pub const CLIENT_HISTORY: &str = "client_history";
pub const EVENTS: &str = "events";
pub const SILENCES: &str = "silences";
pub const STASHES: &str = "stashes";

/// Sensu check status code to its conventional name.
pub fn status_label(status: i64) -> String {
    match status {
        0 => "OK".to_string(),
        1 => "WARNING".to_string(),
        2 => "CRITICAL".to_string(),
        other => format!("UNKNOWN({other})"),
    }
}

/// Unix timestamp as `YYYY-MM-DD HH:MM:SS UTC`.
pub fn timestamp(ts: i64) -> String {
    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| ts.to_string())
}

/// Compact duration such as `1d2h`, `5m30s` or `45s`.
pub fn duration(seconds: i64) -> String {
    if seconds <= 0 {
        return "0s".to_string();
    }
    let units = [(86_400, "d"), (3_600, "h"), (60, "m"), (1, "s")];
    let mut rest = seconds;
    let mut out = String::new();
    for (size, suffix) in units {
        if rest >= size {
            out.push_str(&format!("{}{}", rest / size, suffix));
            rest %= size;
        }
    }
    out
}

fn expiry(expire: Option<i64>) -> String {
    match expire {
        Some(secs) if secs >= 0 => format!("expires in {}", duration(secs)),
        _ => "never expires".to_string(),
    }
}

pub fn clients(clients: &[Client]) -> String {
    if clients.is_empty() {
        return "No clients found.".to_string();
    }
    let mut out = format!("**Clients** ({})\n", clients.len());
    for client in clients {
        out.push_str(&format!("* **{}**", client.name));
        if let Some(address) = &client.address {
            out.push_str(&format!(" ({address})"));
        }
        if let Some(version) = &client.version {
            out.push_str(&format!(" v{version}"));
        }
        if let Some(ts) = client.timestamp {
            out.push_str(&format!(", last seen {}", timestamp(ts)));
        }
        if !client.subscriptions.is_empty() {
            out.push_str(&format!(" `{}`", client.subscriptions.join(",")));
        }
        out.push('\n');
    }
    out
}

pub fn client_history(history: &[HistoryEntry]) -> String {
    if history.is_empty() {
        return "No history found.".to_string();
    }
    let mut out = String::from("**History**\n");
    for entry in history {
        let status = entry
            .last_status
            .map(status_label)
            .unwrap_or_else(|| "PENDING".to_string());
        out.push_str(&format!("* **{}**: {}", entry.check, status));
        if let Some(ts) = entry.last_execution {
            out.push_str(&format!(", last run {}", timestamp(ts)));
        }
        if !entry.history.is_empty() {
            let codes: Vec<String> = entry.history.iter().map(i64::to_string).collect();
            out.push_str(&format!(" `[{}]`", codes.join(",")));
        }
        out.push('\n');
    }
    out
}

pub fn events(events: &[Event]) -> String {
    if events.is_empty() {
        return "No events found.".to_string();
    }
    let mut out = format!("**Events** ({})\n", events.len());
    for event in events {
        let status = event
            .check
            .status
            .map(status_label)
            .unwrap_or_else(|| "UNKNOWN".to_string());
        out.push_str(&format!(
            "* **{}** ({}) {}",
            event.client.name, event.check.name, status
        ));
        if let Some(output) = &event.check.output {
            let output = output.trim();
            if !output.is_empty() {
                out.push_str(&format!(": {output}"));
            }
        }
        if let Some(n) = event.occurrences {
            out.push_str(&format!(" (x{n})"));
        }
        // "create" is the normal case
        if let Some(action) = event.action.as_deref().filter(|a| *a != "create") {
            out.push_str(&format!(" [{action}]"));
        }
        out.push('\n');
    }
    out
}

pub fn silences(silences: &[Silence]) -> String {
    if silences.is_empty() {
        return "No silences found.".to_string();
    }
    let mut out = format!("**Silences** ({})\n", silences.len());
    for silence in silences {
        let id = silence.id.clone().unwrap_or_else(|| {
            format!(
                "{}:{}",
                silence.subscription.as_deref().unwrap_or("*"),
                silence.check.as_deref().unwrap_or("*")
            )
        });
        out.push_str(&format!("* **{}** {}", id, expiry(silence.expire)));
        if let Some(creator) = &silence.creator {
            out.push_str(&format!(", by {creator}"));
        }
        if let Some(reason) = &silence.reason {
            out.push_str(&format!(": {reason}"));
        }
        out.push('\n');
    }
    out
}

pub fn stashes(stashes: &[Stash]) -> String {
    if stashes.is_empty() {
        return "No stashes found.".to_string();
    }
    let mut out = format!("**Stashes** ({})\n", stashes.len());
    for stash in stashes {
        out.push_str(&format!(
            "* **{}** `{}` {}\n",
            stash.key(),
            stash.content,
            expiry(stash.expire)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_label() {
        assert_eq!(status_label(0), "OK");
        assert_eq!(status_label(2), "CRITICAL");
        assert_eq!(status_label(7), "UNKNOWN(7)");
    }

    #[test]
    fn test_duration() {
        assert_eq!(duration(45), "45s");
        assert_eq!(duration(3600), "1h");
        assert_eq!(duration(90_061), "1d1h1m1s");
        assert_eq!(duration(-1), "0s");
    }

    #[test]
    fn test_timestamp() {
        assert_eq!(timestamp(0), "1970-01-01 00:00:00 UTC");
    }

    #[test]
    fn test_events_layout() {
        let events: Vec<Event> = serde_json::from_value(json!([
            {"client": {"name": "web1"}, "check": {"name": "cpu", "status": 2, "output": "load 9\n"}, "occurrences": 3}
        ]))
        .unwrap();
        assert_eq!(
            super::events(&events),
            "**Events** (1)\n* **web1** (cpu) CRITICAL: load 9 (x3)\n"
        );
    }

    #[test]
    fn test_events_layout_shows_unusual_action() {
        let events: Vec<Event> = serde_json::from_value(json!([
            {"client": {"name": "web1"}, "check": {"name": "cpu", "status": 0}, "action": "resolve"},
            {"client": {"name": "web2"}, "check": {"name": "cpu", "status": 1}, "action": "create"}
        ]))
        .unwrap();
        assert_eq!(
            super::events(&events),
            "**Events** (2)\n* **web1** (cpu) OK [resolve]\n* **web2** (cpu) WARNING\n"
        );
    }

    #[test]
    fn test_clients_layout_lists_subscriptions() {
        let clients: Vec<Client> = serde_json::from_value(json!([
            {"name": "web1", "address": "10.0.0.1", "subscriptions": ["linux", "web"]},
            {"name": "db1"}
        ]))
        .unwrap();
        assert_eq!(
            super::clients(&clients),
            "**Clients** (2)\n* **web1** (10.0.0.1) `linux,web`\n* **db1**\n"
        );
    }

    #[test]
    fn test_silences_layout() {
        let silences: Vec<Silence> = serde_json::from_value(json!([
            {"id": "client:web1:*", "expire": 300, "creator": "alice", "reason": "deploy"},
            {"subscription": "client:db1", "expire": -1}
        ]))
        .unwrap();
        let text = super::silences(&silences);
        assert!(text.contains("* **client:web1:*** expires in 5m, by alice: deploy"));
        assert!(text.contains("* **client:db1:*** never expires"));
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(clients(&[]), "No clients found.");
        assert_eq!(stashes(&[]), "No stashes found.");
    }
}
