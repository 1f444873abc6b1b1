//! Sora - Similar TV shows, localized and paginated
//!
//! This library crate exposes the core functionality for integration testing.

pub mod client;
pub mod config;
pub mod metadata;
pub mod server;
pub mod similar;
