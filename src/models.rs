use std::sync::Arc;

use crate::config::Config;
use crate::context::ContextAssembler;
use crate::llm::{DeepSeekAdapter, LLMAdapter};
use crate::session::{SessionState, SharedSession};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub session: SharedSession,
    pub assembler: ContextAssembler,
    pub llm: Arc<dyn LLMAdapter>,
}

impl AppState {
    /// Build the state with the DeepSeek adapter configured from `config.llm`
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let llm = Arc::new(DeepSeekAdapter::new(&config.llm)?);
        Ok(Self::with_adapter(config, llm))
    }

    /// Build the state around an arbitrary adapter
    pub fn with_adapter(config: Config, llm: Arc<dyn LLMAdapter>) -> Self {
        Self {
            assembler: ContextAssembler::new(&config.context),
            session: SessionState::shared(),
            config,
            llm,
        }
    }
}

// API Request/Response types

#[derive(Debug, Default, serde::Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, serde::Serialize)]
pub struct AskResponse {
    pub answer: String,
}

#[derive(Debug, serde::Serialize)]
pub struct UploadResponse {
    pub message: String,
    /// First characters of the extracted text
    pub preview: String,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub document_loaded: bool,
    pub history_len: usize,
    pub model: String,
}
