//! Upstream completion client.
//!
//! Sends a single `POST {base_url}/v1/chat/completions` with bearer auth.
//! No retry and no timeout override; failures surface directly to the caller.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ChatError;
use super::models::Message;

const COMPLETIONS_PATH: &str = "/v1/chat/completions";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 1024;

/// Maps a non-2xx upstream response to a [`ChatError`].
///
/// Pluggable so alternate providers can supply their own classification
/// rules; see [`default_classifier`].
pub type Classifier = fn(StatusCode, &str) -> ChatError;

/// Default classification: a body mentioning insufficient balance becomes
/// [`ChatError::InsufficientBalance`], anything else a generic upstream error.
pub fn default_classifier(status: StatusCode, body: &str) -> ChatError {
    if body.to_lowercase().contains("insufficient balance") {
        ChatError::InsufficientBalance
    } else {
        ChatError::UpstreamHttp {
            status,
            body: body.to_string(),
        }
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Thin client over `reqwest` for the chat-completions endpoint.
pub struct UpstreamClient {
    client: Client,
    classify: Classifier,
}

impl UpstreamClient {
    pub fn new(classify: Classifier) -> Self {
        Self {
            client: Client::new(),
            classify,
        }
    }

    /// Request one completion and return the assistant content.
    pub async fn complete(
        &self,
        base_url: &str,
        api_key: &str,
        model: &str,
        messages: &[Message],
    ) -> Result<String, ChatError> {
        let url = format!("{}{}", base_url.trim_end_matches('/'), COMPLETIONS_PATH);
        debug!(%url, model, count = messages.len(), "requesting completion");

        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&CompletionRequest {
                model,
                messages,
                temperature: TEMPERATURE,
                max_tokens: MAX_TOKENS,
                stream: false,
            })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err((self.classify)(status, &body));
        }

        let data: CompletionResponse = resp
            .json()
            .await
            .map_err(|e| ChatError::UnexpectedFormat(format!("response parse error: {e}")))?;

        data.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| {
                ChatError::UnexpectedFormat("missing choices[0].message.content".into())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::models::Role;

    #[test]
    fn balance_body_classifies_as_insufficient_balance() {
        let err = default_classifier(
            StatusCode::PAYMENT_REQUIRED,
            "Insufficient Balance. Please top up your account.",
        );
        assert!(matches!(err, ChatError::InsufficientBalance));
    }

    #[test]
    fn balance_match_is_case_insensitive() {
        let err = default_classifier(StatusCode::FORBIDDEN, "error: insufficient balance");
        assert!(matches!(err, ChatError::InsufficientBalance));
    }

    #[test]
    fn other_bodies_classify_as_upstream_http() {
        let err = default_classifier(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        match err {
            ChatError::UpstreamHttp { status, body } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn completion_request_carries_fixed_parameters() {
        let messages = vec![Message {
            role: Role::User,
            content: "Hello".into(),
        }];
        let req = CompletionRequest {
            model: "test-model",
            messages: &messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            stream: false,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "test-model");
        assert_eq!(json["stream"], false);
        assert_eq!(json["max_tokens"], 1024);
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn response_without_choices_is_empty() {
        let data: CompletionResponse = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
        assert!(data.choices.is_empty());
    }
}
