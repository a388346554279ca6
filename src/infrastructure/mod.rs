//! # Infrastructure Layer
//!
//! Handles interactions with external systems and services.
//! Implements the traits defined in the Domain layer (ChatProvider, SensuApi, Renderer).

pub mod matrix;
pub mod sensu;
pub mod templates;
