//! Proxy configuration.

use std::env;

/// Default upstream provider endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";

/// Default chat model.
pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// Configuration for the chat proxy.
///
/// Built once at startup and passed into [`crate::chat::ChatProxy`];
/// nothing reads the environment at request time.
#[derive(Clone, Debug)]
pub struct ProxyConfig {
    /// Upstream API key. Chat requests fail until one is configured.
    pub api_key: Option<String>,
    /// Base URL of the upstream provider (no trailing path).
    pub base_url: String,
    /// Model name sent with every completion request.
    pub model: String,
}

impl ProxyConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable        | Default                    |
    /// |-----------------|----------------------------|
    /// | `CHAT_API_KEY`  | none (required for chat)   |
    /// | `CHAT_BASE_URL` | `https://api.deepseek.com` |
    /// | `CHAT_MODEL`    | `deepseek-chat`            |
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("CHAT_API_KEY").ok().filter(|k| !k.is_empty()),
            base_url: env::var("CHAT_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
            model: env::var("CHAT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
        }
    }
}
