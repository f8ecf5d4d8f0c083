//! # chatproxy_core
//!
//! Core domain logic for ChatProxy.

pub mod chat;
pub mod config;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
