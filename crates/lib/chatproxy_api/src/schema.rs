//! GraphQL schema — queries, the chat mutation, and error-code mapping.

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, Schema, SimpleObject};

use chatproxy_core::chat::{ChatError, ChatProxy, ChatRequest};

pub type ProxySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(proxy: Arc<ChatProxy>) -> ProxySchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(proxy)
        .finish()
}

/// One chat message as seen by the caller.
#[derive(SimpleObject)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Result of the chat mutation: the echoed user message, the assistant
/// reply, and a conversation id.
#[derive(SimpleObject)]
pub struct ChatReply {
    pub messages: Vec<ChatMessage>,
    pub conversation_id: String,
}

/// Configuration diagnostic. Never carries secret values.
#[derive(SimpleObject)]
pub struct EnvCheck {
    pub api_key_configured: bool,
    pub base_url: String,
    pub model: String,
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Liveness check.
    async fn ping(&self) -> &'static str {
        "pong"
    }

    /// Reports whether required configuration is present.
    async fn env_check(&self, ctx: &Context<'_>) -> EnvCheck {
        let report = ctx.data_unchecked::<Arc<ChatProxy>>().env_report();
        EnvCheck {
            api_key_configured: report.api_key_configured,
            base_url: report.base_url,
            model: report.model,
        }
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Send one message to the upstream chat model and return the echoed
    /// user message plus the assistant reply.
    #[graphql(name = "chatWithAI")]
    async fn chat_with_ai(
        &self,
        ctx: &Context<'_>,
        message: String,
        conversation_id: Option<String>,
        system_prompt: Option<String>,
    ) -> async_graphql::Result<ChatReply> {
        let proxy = ctx.data_unchecked::<Arc<ChatProxy>>();
        let response = proxy
            .chat(ChatRequest {
                message,
                conversation_id,
                system_prompt,
            })
            .await
            .map_err(graphql_error)?;

        Ok(ChatReply {
            messages: response
                .messages
                .into_iter()
                .map(|m| ChatMessage {
                    role: m.role.as_str().to_string(),
                    content: m.content,
                })
                .collect(),
            conversation_id: response.conversation_id,
        })
    }
}

/// Attach the stable error code as a `code` extension.
fn graphql_error(err: ChatError) -> async_graphql::Error {
    let code = err.code();
    async_graphql::Error::new(err.to_string()).extend_with(|_, ext| ext.set("code", code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphql_error_carries_code_extension() {
        let err = graphql_error(ChatError::InsufficientBalance);
        assert!(err.extensions.is_some());
        assert!(err.message.contains("insufficient account balance"));
    }
}
