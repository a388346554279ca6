#![recursion_limit = "256"]
//! # Main Entry Point
//!
//! Wires the bot together:
//! - Domain: Configuration and Types
//! - Infrastructure: Matrix, Sensu API client, Templates
//! - Application: Router, Sensu helpers, Logging
//! - Interface: Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::Result;
use clap::Parser;
use matrix_sdk::{
    Client,
    config::SyncSettings,
    room::Room,
    ruma::events::room::{
        member::{MembershipState, StrippedRoomMemberEvent},
        message::{MessageType, SyncRoomMessageEvent},
    },
};
use std::sync::Arc;

use crate::application::router::CommandRouter;
use crate::domain::config::{AppConfig, SensuConfig};
use crate::infrastructure::matrix::MatrixService;
use crate::infrastructure::sensu::SensuClient;
use crate::infrastructure::templates::TemplateRenderer;
use crate::strings::logs;

#[derive(Parser, Debug)]
#[command(version, about = "Matrix bot for the Sensu monitoring API")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(long, short, env = "SENSUBOT_CONFIG", default_value = "data/config.yaml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load Configuration
    let config = AppConfig::load(&args.config)?;

    // 2. Logging Setup
    let _guard = application::logging::init(&config.system)?;
    tracing::info!("{}", logs::starting(env!("CARGO_PKG_VERSION")));

    // 3. Sensu API
    let sensu = Arc::new(config.sensu.clone());
    log_sensu_settings(&sensu);
    let api = Arc::new(SensuClient::new(&sensu)?);
    let router = Arc::new(CommandRouter::new(
        sensu,
        api,
        Arc::new(TemplateRenderer::new()),
    )?);

    // 4. Matrix Setup
    let matrix = &config.services.matrix;
    let client = Client::builder()
        .homeserver_url(&matrix.homeserver)
        .build()
        .await?;

    client
        .matrix_auth()
        .login_username(&matrix.username, &matrix.password)
        .send()
        .await?;

    tracing::info!("{}", logs::logged_in(&matrix.username));

    if let Some(name) = &matrix.display_name {
        tracing::info!("{}", logs::setting_display_name(name));
        if let Err(e) = client.account().set_display_name(Some(name.as_str())).await {
            tracing::warn!("{}", logs::set_display_name_fail(&e.to_string()));
        }
    }

    // 5. Event Handlers
    let start_time = std::time::SystemTime::now();
    let loop_router = router.clone();

    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let router = loop_router.clone();

        async move {
            let Some(original_msg) = ev.as_original() else {
                return;
            };

            // Ignore events older than start_time
            let ts = ev.origin_server_ts();
            let event_time =
                std::time::UNIX_EPOCH + std::time::Duration::from_millis(ts.get().into());
            if event_time < start_time {
                return;
            }

            let MessageType::Text(text_content) = &original_msg.content.msgtype else {
                return;
            };
            if original_msg.sender == room.own_user_id() {
                return;
            }

            let body = &text_content.body;
            tracing::info!("{}", logs::message_received(original_msg.sender.as_str(), body));

            let chat = MatrixService::new(room);
            let sender = chat.sender_name(&original_msg.sender).await;

            if let Err(e) = router.route(&chat, body, &sender).await {
                tracing::error!("{}", logs::route_failed(&e.to_string()));
            }
        }
    });

    // Handle Invites
    client.add_event_handler(|ev: StrippedRoomMemberEvent, room: Room| async move {
        if ev.content.membership == MembershipState::Invite {
            tracing::info!("{}", logs::invite_received(room.room_id().as_str()));
            if let Err(e) = room.join().await {
                tracing::warn!("{}", logs::join_invite_fail(&e.to_string()));
            }
        }
    });

    // 6. Sync until the process is stopped
    if let Err(e) = client.sync(SyncSettings::default()).await {
        tracing::error!("{}", logs::sync_loop_fail(&e.to_string()));
        return Err(e.into());
    }

    Ok(())
}

/// Reports the Sensu endpoint once logging is up, warning when auth is half configured.
fn log_sensu_settings(sensu: &SensuConfig) {
    tracing::info!(
        "{}",
        logs::sensu_endpoint(&sensu.base_url(), sensu.credentials().is_some())
    );
    if sensu.partial_credentials() {
        tracing::warn!("{}", logs::PARTIAL_CREDENTIALS);
    }
}
