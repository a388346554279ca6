//! # Sensu API Adapter
//!
//! Implements the `SensuApi` trait over HTTP.

pub mod client;
pub mod error;

pub use client::SensuClient;
pub use error::SensuError;
