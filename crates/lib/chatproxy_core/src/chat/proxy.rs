//! The chat proxy: validation, outbound message assembly, response shaping.

use tracing::info;
use uuid::Uuid;

use super::ChatError;
use super::models::{ChatRequest, ChatResponse, Message, Role};
use super::upstream::{Classifier, UpstreamClient, default_classifier};
use crate::config::ProxyConfig;

/// Stateless proxy from one inbound chat request to one upstream
/// completion call. Holds no per-conversation state; the conversation id
/// is echoed or synthesized, never stored.
pub struct ChatProxy {
    config: ProxyConfig,
    upstream: UpstreamClient,
}

/// Diagnostic view of the configuration, without secret values.
#[derive(Debug, Clone)]
pub struct EnvReport {
    pub api_key_configured: bool,
    pub base_url: String,
    pub model: String,
}

impl ChatProxy {
    pub fn new(config: ProxyConfig) -> Self {
        Self::with_classifier(config, default_classifier)
    }

    /// Build a proxy with a provider-specific error classifier.
    pub fn with_classifier(config: ProxyConfig, classify: Classifier) -> Self {
        Self {
            config,
            upstream: UpstreamClient::new(classify),
        }
    }

    /// Reports whether required configuration is present. Never includes
    /// the API key value.
    pub fn env_report(&self) -> EnvReport {
        EnvReport {
            api_key_configured: self.config.api_key.is_some(),
            base_url: self.config.base_url.clone(),
            model: self.config.model.clone(),
        }
    }

    /// Proxy one chat request.
    ///
    /// Fails with [`ChatError::Validation`] on an empty message and with
    /// [`ChatError::MissingApiKey`] before any outbound call when no API
    /// key is configured.
    pub async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ChatError> {
        if request.message.trim().is_empty() {
            return Err(ChatError::Validation("message must not be empty".into()));
        }
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ChatError::MissingApiKey)?;

        let outbound = outbound_messages(&request);
        info!(
            model = %self.config.model,
            outbound = outbound.len(),
            "proxying chat request"
        );

        let content = self
            .upstream
            .complete(&self.config.base_url, api_key, &self.config.model, &outbound)
            .await?;

        let conversation_id = request
            .conversation_id
            .unwrap_or_else(generate_conversation_id);

        Ok(ChatResponse {
            messages: vec![
                Message {
                    role: Role::User,
                    content: request.message,
                },
                Message {
                    role: Role::Assistant,
                    content,
                },
            ],
            conversation_id,
        })
    }
}

/// Outbound sequence: system prompt first when supplied, then the user message.
fn outbound_messages(request: &ChatRequest) -> Vec<Message> {
    let mut messages = Vec::with_capacity(2);
    if let Some(prompt) = request.system_prompt.as_deref() {
        messages.push(Message {
            role: Role::System,
            content: prompt.to_string(),
        });
    }
    messages.push(Message {
        role: Role::User,
        content: request.message.clone(),
    });
    messages
}

/// Generate a fresh conversation id (UUIDv7, timestamp-sortable).
fn generate_conversation_id() -> String {
    Uuid::now_v7().to_string()
}
