//! # Command Router
//!
//! Routes incoming messages to the appropriate command handler (in `interface/commands`).
//! Each route is an anchored pattern tried in table order; the first match wins and its
//! captures become the handler's arguments. Messages matching nothing get no reply.

use anyhow::Result;
use regex::{Captures, Regex};
use std::sync::Arc;

use crate::domain::config::SensuConfig;
use crate::domain::traits::{ChatProvider, Renderer, SensuApi};
use crate::interface::commands::{self, SensuContext};
use crate::strings::{logs, messages};

/// Handler tag attached to each route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Client,
    ClientHistory,
    Clients,
    Events,
    Info,
    RemoveClient,
    Resolve,
    Silence,
    Silences,
    Stashes,
    Help,
}

/// Pattern, handler and help entry, in evaluation order.
///
/// The patterns must stay mutually exclusive: `client <name>` cannot see a space in
/// `<name>`, and `silence ` needs the space that `silences` lacks. Names end up in URL
/// paths, so they never contain `/`, `?` or `#`.
const ROUTES: &[(&str, Command, &str, &str)] = &[
    (
        r"^sensu client ([^\s/?#]+)$",
        Command::Client,
        "sensu client <client>",
        "Shows information on a specific client",
    ),
    (
        r"^sensu client ([^\s/?#]+) history$",
        Command::ClientHistory,
        "sensu client <client> history",
        "Shows history information for a specific client",
    ),
    (
        r"^sensu clients$",
        Command::Clients,
        "sensu clients",
        "List sensu clients",
    ),
    (
        r"^sensu events(?: for ([^\s/?#]+))?$",
        Command::Events,
        "sensu events [for <client>]",
        "Shows current events, optionally for a specific client",
    ),
    (
        r"^sensu info$",
        Command::Info,
        "sensu info",
        "Displays sensu information",
    ),
    (
        r"^(?:sensu\s+)?remove client ([^\s/?#]+)$",
        Command::RemoveClient,
        "sensu remove client <client>",
        "Remove client from sensu",
    ),
    (
        r"^(?:sensu\s+)?resolve event ([^\s/?#]+)/([^\s/?#]+)$",
        Command::Resolve,
        "sensu resolve event <client>/<check>",
        "Resolve an event",
    ),
    (
        r"^(?:sensu\s+)?silence ([^\s/?#]+)(?:/([^\s/?#]*))?(?: for (\d+)([A-Za-z]*))?$",
        Command::Silence,
        "sensu silence <hostname>[/<check>][ for <duration><units>]",
        "Silence a client or one of its checks (default 1h)",
    ),
    (
        r"^sensu silences$",
        Command::Silences,
        "sensu silences",
        "Displays current sensu silences",
    ),
    (
        r"^sensu stash(?:es)?$",
        Command::Stashes,
        "sensu stashes",
        "Displays current sensu stashes",
    ),
    (
        r"^sensu help$",
        Command::Help,
        "sensu help",
        "Shows this list",
    ),
];

pub struct Route {
    pattern: Regex,
    pub command: Command,
    pub usage: &'static str,
    pub description: &'static str,
}

pub struct CommandRouter {
    routes: Vec<Route>,
    ctx: SensuContext,
}

/// Text of capture group `i`, empty when the group did not take part.
fn group<'t>(caps: &Captures<'t>, i: usize) -> &'t str {
    caps.get(i).map_or("", |m| m.as_str())
}

impl CommandRouter {
    pub fn new(
        config: Arc<SensuConfig>,
        api: Arc<dyn SensuApi>,
        renderer: Arc<dyn Renderer>,
    ) -> Result<Self> {
        let routes = ROUTES
            .iter()
            .map(|&(pattern, command, usage, description)| {
                Ok(Route {
                    pattern: Regex::new(pattern)?,
                    command,
                    usage,
                    description,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            routes,
            ctx: SensuContext::new(config, api, renderer),
        })
    }

    /// First route matching the trimmed message, with its captures.
    pub fn find<'m>(&self, message: &'m str) -> Option<(&Route, Captures<'m>)> {
        let msg = message.trim();
        self.routes
            .iter()
            .find_map(|route| route.pattern.captures(msg).map(|caps| (route, caps)))
    }

    pub fn help(&self) -> String {
        commands::help::handle_help(self.routes.iter().map(|r| (r.usage, r.description)))
    }

    /// Runs the matching handler and returns its reply.
    ///
    /// `Ok(None)` when nothing matched. `Err` only when a handler fails hard.
    pub async fn dispatch(&self, message: &str, sender: &str) -> Result<Option<String>> {
        match self.find(message) {
            Some((route, caps)) => self.execute(route, &caps, sender).await.map(Some),
            None => Ok(None),
        }
    }

    async fn execute(&self, route: &Route, caps: &Captures<'_>, sender: &str) -> Result<String> {
        tracing::info!("{}", logs::dispatching(route.usage, sender));
        let ctx = &self.ctx;

        match route.command {
            Command::Client => commands::client::handle_client(ctx, group(caps, 1)).await,
            Command::ClientHistory => {
                commands::client::handle_client_history(ctx, group(caps, 1)).await
            }
            Command::Clients => commands::client::handle_clients(ctx).await,
            Command::Events => {
                let client = caps.get(1).map(|m| m.as_str());
                commands::events::handle_events(ctx, client).await
            }
            Command::Info => commands::misc::handle_info(ctx).await,
            Command::RemoveClient => {
                commands::client::handle_remove_client(ctx, group(caps, 1)).await
            }
            Command::Resolve => {
                commands::events::handle_resolve(ctx, group(caps, 1), group(caps, 2)).await
            }
            Command::Silence => {
                commands::silence::handle_silence(
                    ctx,
                    sender,
                    group(caps, 1),
                    group(caps, 2),
                    caps.get(3).map(|m| m.as_str()),
                    caps.get(4).map(|m| m.as_str()),
                )
                .await
            }
            Command::Silences => commands::silence::handle_silences(ctx).await,
            Command::Stashes => commands::misc::handle_stashes(ctx).await,
            Command::Help => Ok(self.help()),
        }
    }

    /// Handles one chat message end to end and posts the reply, if any.
    ///
    /// A hard handler failure is logged and answered with a generic message; it never
    /// escapes to the chat loop.
    pub async fn route<C>(&self, chat: &C, message: &str, sender: &str) -> Result<()>
    where
        C: ChatProvider + ?Sized,
    {
        let Some((route, caps)) = self.find(message) else {
            return Ok(());
        };

        let _ = chat.typing(true).await;
        let result = self.execute(route, &caps, sender).await;
        let _ = chat.typing(false).await;

        let sent = match result {
            Ok(reply) => chat.send_message(&reply).await.map(|_| ()),
            Err(e) => {
                tracing::error!("{}", logs::command_failed(route.usage, &format!("{e:#}")));
                chat.send_notification(messages::REQUEST_FAILED).await
            }
        };
        sent.map_err(|e| anyhow::anyhow!(e))
    }
}
