//! # Interface Layer
//!
//! Entry points invoked by the router: one handler per chat command.

pub mod commands;
