//! # Strings Module
//!
//! Centralizes user-facing strings, log lines, help text and reply templates.
//! Ensures consistency in messaging and easier localization/updates.

pub mod help;
pub mod logs;
pub mod messages;
pub mod templates;
