//! Caller-facing chat types.

use serde::{Deserialize, Serialize};

/// Role of a chat message on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// Inbound chat request.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// The user message. Required, must be non-empty.
    pub message: String,
    /// Opaque caller token, echoed back unchanged when supplied.
    pub conversation_id: Option<String>,
    /// Instruction prepended as a `system` message when supplied.
    pub system_prompt: Option<String>,
}

/// Chat result returned to the caller: the echoed user message, the
/// assistant reply, and a conversation id.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub messages: Vec<Message>,
    pub conversation_id: String,
}
