//! # Client Commands
//!
//! Handles `sensu client <name>`, `sensu client <name> history`, `sensu clients`
//! and `remove client <name>`.

use anyhow::Result;

use super::{SensuContext, fetch_list, parse_body, pretty, warn_transport};
use crate::application::sensu::sort_by_field;
use crate::strings::{logs, messages, templates};

pub async fn handle_client(ctx: &SensuContext, name: &str) -> Result<String> {
    let client = ctx.qualify(name);
    let url = ctx.url(&format!("/clients/{client}"));

    let resp = match ctx.api.get(&url).await {
        Ok(resp) => resp,
        Err(e) => {
            warn_transport(&url, &e);
            return Ok(messages::fetch_client_failed(&client));
        }
    };

    let reply = match resp.status {
        200 => match parse_body(&url, &resp) {
            Some(value) => pretty(&value),
            None => messages::fetch_client_failed(&client),
        },
        404 => messages::not_found(&client),
        _ => {
            tracing::warn!("{}", logs::internal_error("fetching", &url));
            messages::fetch_client_failed(&client)
        }
    };
    Ok(reply)
}

pub async fn handle_client_history(ctx: &SensuContext, name: &str) -> Result<String> {
    let client = ctx.qualify(name);
    let url = ctx.url(&format!("/clients/{client}/history"));
    Ok(fetch_list(
        ctx,
        &url,
        templates::CLIENT_HISTORY,
        "history",
        |items| sort_by_field(items, "check"),
        messages::fetch_history_failed(&client),
    )
    .await)
}

pub async fn handle_clients(ctx: &SensuContext) -> Result<String> {
    let url = ctx.url("/clients");
    Ok(fetch_list(
        ctx,
        &url,
        templates::CLIENTS,
        "clients",
        |items| sort_by_field(items, "name"),
        messages::FETCH_CLIENTS_FAILED.to_string(),
    )
    .await)
}

pub async fn handle_remove_client(ctx: &SensuContext, name: &str) -> Result<String> {
    let client = ctx.qualify(name);
    let url = ctx.url(&format!("/clients/{client}"));

    let resp = match ctx.api.delete(&url).await {
        Ok(resp) => resp,
        Err(e) => {
            warn_transport(&url, &e);
            return Ok(messages::remove_client_failed(&client));
        }
    };

    let reply = match resp.status {
        202 => messages::client_removed(&client),
        404 => messages::not_found(&client),
        _ => {
            tracing::warn!("{}", logs::internal_error("deleting", &url));
            messages::remove_client_failed(&client)
        }
    };
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::logging::capture::CapturedLogs;
    use crate::interface::commands::test_support::{FakeApi, context};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_client_found_is_pretty_json() {
        let api = Arc::new(FakeApi::respond(200, r#"{"name":"web1","address":"10.0.0.1"}"#));
        let ctx = context(api.clone(), None);

        let reply = handle_client(&ctx, "web1").await.unwrap();

        assert!(reply.contains("\"name\": \"web1\""));
        assert!(reply.contains('\n'));
        assert_eq!(api.calls()[0].url, "http://127.0.0.1:4567/clients/web1");
    }

    #[tokio::test]
    async fn test_client_not_found_uses_qualified_name() {
        let api = Arc::new(FakeApi::respond(404, ""));
        let ctx = context(api.clone(), Some("example.com"));

        let reply = handle_client(&ctx, "web1").await.unwrap();

        assert_eq!(reply, "web1.example.com was not found");
        assert_eq!(
            api.calls()[0].url,
            "http://127.0.0.1:4567/clients/web1.example.com"
        );
    }

    #[tokio::test]
    async fn test_client_server_error_warns_once() {
        let logs = CapturedLogs::install();
        let ctx = context(Arc::new(FakeApi::respond(500, "boom")), None);

        let reply = handle_client(&ctx, "web1").await.unwrap();

        assert_eq!(reply, "An error occurred fetching client web1");
        assert_eq!(logs.warnings().len(), 1);
        assert!(logs.warnings()[0].contains("/clients/web1"));
    }

    #[tokio::test]
    async fn test_client_history_sorted_by_check() {
        let body = r#"[{"check":"mem","last_status":0},{"check":"cpu","last_status":2}]"#;
        let api = Arc::new(FakeApi::respond(200, body));
        let ctx = context(api.clone(), Some(".lan"));

        let reply = handle_client_history(&ctx, "web1").await.unwrap();

        assert_eq!(reply, "**History**\n* **cpu**: CRITICAL\n* **mem**: OK\n");
        assert_eq!(
            api.calls()[0].url,
            "http://127.0.0.1:4567/clients/web1.lan/history"
        );
    }

    #[tokio::test]
    async fn test_clients_sorted_by_name() {
        let body = r#"[{"name":"web2"},{"name":"db1"},{"name":"web1"}]"#;
        let ctx = context(Arc::new(FakeApi::respond(200, body)), None);

        let reply = handle_clients(&ctx).await.unwrap();

        assert_eq!(reply, "**Clients** (3)\n* **db1**\n* **web1**\n* **web2**\n");
    }

    #[tokio::test]
    async fn test_clients_bad_body_is_generic_error() {
        let logs = CapturedLogs::install();
        let ctx = context(Arc::new(FakeApi::respond(200, "<html>")), None);

        let reply = handle_clients(&ctx).await.unwrap();

        assert_eq!(reply, messages::FETCH_CLIENTS_FAILED);
        assert_eq!(logs.warnings().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_client() {
        let api = Arc::new(FakeApi::respond(202, ""));
        let ctx = context(api.clone(), None);

        assert_eq!(handle_remove_client(&ctx, "web1").await.unwrap(), "web1 removed");
        assert_eq!(api.calls()[0].method, "DELETE");

        let ctx = context(Arc::new(FakeApi::respond(404, "")), None);
        assert_eq!(
            handle_remove_client(&ctx, "web1").await.unwrap(),
            "web1 was not found"
        );

    }

    #[tokio::test]
    async fn test_remove_client_server_error_warns_once() {
        let logs = CapturedLogs::install();
        let ctx = context(Arc::new(FakeApi::respond(500, "")), Some("example.com"));

        let reply = handle_remove_client(&ctx, "web1").await.unwrap();

        assert_eq!(reply, "An error occurred removing web1.example.com");
        let warnings = logs.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("deleting"));
        assert!(warnings[0].contains("/clients/web1.example.com"));
    }
}
