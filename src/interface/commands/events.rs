//! # Event Commands
//!
//! Handles `sensu events [for <client>]` and `resolve event <client>/<check>`.

use anyhow::Result;

use super::{SensuContext, fetch_list, warn_transport};
use crate::application::sensu::sort_events;
use crate::domain::types::ResolveRequest;
use crate::strings::{logs, messages, templates};

pub async fn handle_events(ctx: &SensuContext, client: Option<&str>) -> Result<String> {
    let path = match client.filter(|c| !c.is_empty()) {
        Some(client) => format!("/events/{}", ctx.qualify(client)),
        None => "/events".to_string(),
    };
    let url = ctx.url(&path);
    Ok(fetch_list(
        ctx,
        &url,
        templates::EVENTS,
        "events",
        sort_events,
        messages::FETCH_EVENTS_FAILED.to_string(),
    )
    .await)
}

pub async fn handle_resolve(ctx: &SensuContext, client: &str, check: &str) -> Result<String> {
    let client = ctx.qualify(client);
    let url = ctx.url("/resolve");
    let payload = serde_json::to_string(&ResolveRequest {
        client: client.clone(),
        check: check.to_string(),
    })?;

    let resp = match ctx.api.post(&url, &payload).await {
        Ok(resp) => resp,
        Err(e) => {
            warn_transport(&url, &e);
            return Ok(messages::resolve_failed(&client, check));
        }
    };

    let reply = match resp.status {
        202 => messages::event_resolved(&client, check),
        400 => messages::resolve_malformed(&payload),
        404 => messages::not_found(&format!("{client}/{check}")),
        _ => {
            tracing::warn!(
                "{}",
                logs::internal_error_with_payload("resolving", &url, &payload)
            );
            messages::resolve_failed(&client, check)
        }
    };
    Ok(reply)
}
