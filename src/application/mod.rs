//! # Application Layer
//!
//! Contains the core logic and orchestration of the bot.
//! This includes command routing, the Sensu helpers (hostname qualification, durations,
//! ordering) and logging setup.

pub mod logging;
pub mod router;
pub mod sensu;
