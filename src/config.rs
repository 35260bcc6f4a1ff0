use anyhow::Result;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "https://api.deepseek.com";
pub const DEFAULT_MODEL: &str = "deepseek-chat";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LLMConfig,
    pub context: ContextConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub static_dir: PathBuf,
    pub max_upload_bytes: usize,
}

#[derive(Clone, Deserialize)]
pub struct LLMConfig {
    /// Bearer credential for the chat API. `None` is only reported when a
    /// question is asked.
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
    pub timeout_secs: u64,
}

// Keep the credential out of `info!("{:?}", config)`.
impl std::fmt::Debug for LLMConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LLMConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContextConfig {
    /// Character budget for the document text embedded in each request.
    pub max_context_chars: usize,
    /// Optional cap on the number of history entries replayed to the model.
    /// Unset means the whole conversation is sent.
    pub max_history_messages: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "0.0.0.0".to_string(),
            static_dir: PathBuf::from("static"),
            max_upload_bytes: 25 * 1024 * 1024,
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 60,
        }
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            max_context_chars: 8000,
            max_history_messages: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value source, falling back to the
    /// defaults for missing keys.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            server: ServerConfig {
                port: get("PORT")
                    .unwrap_or_else(|| defaults.server.port.to_string())
                    .parse()?,
                host: get("HOST").unwrap_or(defaults.server.host),
                static_dir: get("STATIC_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.server.static_dir),
                max_upload_bytes: get("MAX_UPLOAD_BYTES")
                    .unwrap_or_else(|| defaults.server.max_upload_bytes.to_string())
                    .parse()?,
            },
            llm: LLMConfig {
                api_key: get("DEEPSEEK_API_KEY").filter(|key| !key.trim().is_empty()),
                api_base: get("DEEPSEEK_API_BASE").unwrap_or(defaults.llm.api_base),
                model: get("DEEPSEEK_MODEL").unwrap_or(defaults.llm.model),
                timeout_secs: get("LLM_TIMEOUT_SECS")
                    .unwrap_or_else(|| defaults.llm.timeout_secs.to_string())
                    .parse()?,
            },
            context: ContextConfig {
                max_context_chars: get("MAX_CONTEXT_CHARS")
                    .unwrap_or_else(|| defaults.context.max_context_chars.to_string())
                    .parse()?,
                max_history_messages: get("MAX_HISTORY_MESSAGES")
                    .map(|v| v.parse())
                    .transpose()?,
            },
        })
    }
}
