//! # Silence Commands
//!
//! Handles `silence <host>[/<check>][ for <n><unit>]` and `sensu silences`.
//! A duration with a unit we do not know is rejected before anything is sent.

use anyhow::Result;

use super::{SensuContext, fetch_list, warn_transport};
use crate::application::sensu::{parse_expiration, silence_key, sort_by_field};
use crate::domain::types::SilenceRequest;
use crate::strings::{logs, messages, templates};

pub const SILENCE_REASON: &str = "Because sensubot says so!";

/// `amount` and `unit` are both `None` when no `for <duration>` was typed.
pub async fn handle_silence(
    ctx: &SensuContext,
    creator: &str,
    host: &str,
    check: &str,
    amount: Option<&str>,
    unit: Option<&str>,
) -> Result<String> {
    let client = ctx.qualify(host);
    let key = silence_key(&client, check);

    let raw = amount.unwrap_or("0");
    let Ok(amount) = raw.parse::<u64>() else {
        return Ok(messages::invalid_duration(raw));
    };
    let Some(expiration) = parse_expiration(amount, unit) else {
        return Ok(match unit {
            Some("s" | "m" | "h" | "d") => messages::invalid_duration(raw),
            other => messages::unknown_unit(other.unwrap_or_default()),
        });
    };

    let url = ctx.url("/silenced");
    let payload = serde_json::to_string(&SilenceRequest {
        creator: creator.to_string(),
        expire: expiration.seconds,
        reason: SILENCE_REASON.to_string(),
        subscription: format!("client:{client}"),
        check: Some(check.to_string()).filter(|c| !c.is_empty()),
    })?;

    let resp = match ctx.api.post(&url, &payload).await {
        Ok(resp) => resp,
        Err(e) => {
            warn_transport(&url, &e);
            return Ok(messages::silence_failed(&key));
        }
    };

    if resp.status == 201 {
        Ok(messages::silenced(&key, &expiration.label))
    } else {
        tracing::warn!(
            "{}",
            logs::internal_error_with_payload("posting", &url, &payload)
        );
        Ok(messages::silence_failed(&key))
    }
}

pub async fn handle_silences(ctx: &SensuContext) -> Result<String> {
    let url = ctx.url("/silenced");
    Ok(fetch_list(
        ctx,
        &url,
        templates::SILENCES,
        "silences",
        |items| sort_by_field(items, "subscription"),
        messages::FETCH_SILENCES_FAILED.to_string(),
    )
    .await)
}
