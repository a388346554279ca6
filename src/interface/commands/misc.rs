//! # Miscellaneous Commands
//!
//! Handles `sensu info` and `sensu stashes`.
//!
//! `info` is the one command that treats a non-200 answer as a hard failure: it
//! returns an error and leaves the reply to the router.

use anyhow::Result;

use super::{SensuContext, fetch_list, pretty, warn_transport};
use crate::application::sensu::sort_by_field;
use crate::infrastructure::sensu::SensuError;
use crate::strings::{messages, templates};

pub async fn handle_info(ctx: &SensuContext) -> Result<String> {
    let url = ctx.url("/info");
    let resp = match ctx.api.get(&url).await {
        Ok(resp) => resp,
        Err(e) => {
            warn_transport(&url, &e);
            return Ok(messages::FETCH_INFO_FAILED.to_string());
        }
    };

    if resp.status != 200 {
        return Err(SensuError::RequestFailed {
            url,
            status: resp.status,
        }
        .into());
    }

    let info: serde_json::Value =
        serde_json::from_str(&resp.body).map_err(|e| SensuError::Decode {
            url,
            message: e.to_string(),
        })?;
    Ok(pretty(&info))
}

pub async fn handle_stashes(ctx: &SensuContext) -> Result<String> {
    let url = ctx.url("/stashes");
    Ok(fetch_list(
        ctx,
        &url,
        templates::STASHES,
        "stashes",
        |items| sort_by_field(items, "name"),
        messages::FETCH_STASHES_FAILED.to_string(),
    )
    .await)
}
