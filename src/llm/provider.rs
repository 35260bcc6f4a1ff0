use async_trait::async_trait;

use crate::types::LLMMessage;

/// Ways a single chat completion round trip can fail. None are retried.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// No credential configured; detected before any network activity.
    #[error("API key not configured on server.")]
    MissingApiKey,

    /// Connection failure or timeout.
    #[error("Failed to call chat API: {0}")]
    Transport(#[source] reqwest::Error),

    /// Non-success status; `body` is the raw response text.
    #[error("Chat API returned an error.")]
    Upstream { status: u16, body: String },

    #[error("Invalid response from chat API: {0}")]
    MalformedResponse(String),
}

#[async_trait]
pub trait LLMAdapter: Send + Sync {
    /// Send the assembled messages and return the answer text.
    async fn create_chat_completion(&self, messages: &[LLMMessage]) -> Result<String, GatewayError>;

    /// Model identifier sent with every request
    fn model(&self) -> &str;
}
