// DeepSeek adapter implementation
// DeepSeek speaks the OpenAI chat completion format, so any compatible
// endpoint works by pointing `api_base` at it.
// API Reference: https://api-docs.deepseek.com/api/create-chat-completion

use crate::config::LLMConfig;
use crate::llm::provider::{GatewayError, LLMAdapter};
use crate::types::{LLMMessage, LLMRequest};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

pub struct DeepSeekAdapter {
    client: Client,
    api_key: Option<String>,
    api_base: String,
    model: String,
}

// Response types, only the path to the answer is required
#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl DeepSeekAdapter {
    pub fn new(config: &LLMConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            api_base: config.api_base.clone(),
            model: config.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }

    fn parse_answer(body: &str) -> Result<String, GatewayError> {
        let response: ChatCompletionResponse = serde_json::from_str(body)
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| GatewayError::MalformedResponse("response contained no choices".to_string()))
    }
}

#[async_trait]
impl LLMAdapter for DeepSeekAdapter {
    async fn create_chat_completion(&self, messages: &[LLMMessage]) -> Result<String, GatewayError> {
        let api_key = self.api_key.as_deref().ok_or(GatewayError::MissingApiKey)?;

        let request = LLMRequest {
            model: self.model.clone(),
            messages: messages.to_vec(),
            stream: false,
        };

        debug!(
            model = %self.model,
            messages = messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(GatewayError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(GatewayError::Transport)?;

        if !status.is_success() {
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let answer = Self::parse_answer(&body)?;
        info!(answer_len = answer.len(), "Chat completion received");

        Ok(answer)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
