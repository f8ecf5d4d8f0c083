//! Chat proxying — one inbound request, one upstream completion call.
//!
//! # Public API
//!
//! - [`ChatProxy`] — the proxy itself, built from a [`crate::config::ProxyConfig`]
//! - [`ChatRequest`] / [`ChatResponse`] — caller-facing request/response pair
//! - [`Classifier`] — pluggable mapping from upstream HTTP failures to [`ChatError`]

pub mod models;
pub mod proxy;
pub mod upstream;

use reqwest::StatusCode;
use thiserror::Error;

pub use models::{ChatRequest, ChatResponse, Message, Role};
pub use proxy::{ChatProxy, EnvReport};
pub use upstream::{Classifier, default_classifier};

/// Errors that can occur while proxying a chat request.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("CHAT_API_KEY is not configured")]
    MissingApiKey,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream provider rejected the request: insufficient account balance")]
    InsufficientBalance,

    #[error("Upstream error ({status}): {body}")]
    UpstreamHttp { status: StatusCode, body: String },

    #[error("Unexpected upstream response format: {0}")]
    UnexpectedFormat(String),
}

impl ChatError {
    /// Stable machine-readable code, surfaced to callers as a GraphQL
    /// error extension.
    pub fn code(&self) -> &'static str {
        match self {
            ChatError::MissingApiKey => "MISSING_API_KEY",
            ChatError::Validation(_) => "VALIDATION_ERROR",
            ChatError::Request(_) => "UPSTREAM_ERROR",
            ChatError::InsufficientBalance => "INSUFFICIENT_BALANCE",
            ChatError::UpstreamHttp { .. } => "UPSTREAM_ERROR",
            ChatError::UnexpectedFormat(_) => "BAD_UPSTREAM_FORMAT",
        }
    }
}
