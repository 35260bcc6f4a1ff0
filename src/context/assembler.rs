use crate::config::ContextConfig;
use crate::session::SessionState;
use crate::types::LLMMessage;
use crate::utils::truncate_chars;

pub const SYSTEM_PROMPT: &str = "You are an assistant that answers questions about a PDF. \
Answer the user's question using only the information in the provided PDF. \
If the answer cannot be found in the PDF, say you don't know.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    #[error("No PDF uploaded yet.")]
    NoDocument,

    #[error("Question cannot be empty.")]
    EmptyQuestion,
}

/// Assembles the outbound conversation:
///
/// 1. the fixed instruction prompt
/// 2. the document text, cut to `max_context_chars` characters
/// 3. the recorded history, oldest first
/// 4. the new question
#[derive(Debug, Clone)]
pub struct ContextAssembler {
    max_context_chars: usize,
    max_history_messages: Option<usize>,
}

impl ContextAssembler {
    pub fn new(config: &ContextConfig) -> Self {
        Self {
            max_context_chars: config.max_context_chars,
            max_history_messages: config.max_history_messages,
        }
    }

    pub fn assemble(
        &self,
        session: &SessionState,
        question: &str,
    ) -> Result<Vec<LLMMessage>, ContextError> {
        if !session.has_document() {
            return Err(ContextError::NoDocument);
        }

        let question = question.trim();
        if question.is_empty() {
            return Err(ContextError::EmptyQuestion);
        }

        let history = session.history();
        let history = match self.max_history_messages {
            Some(cap) if history.len() > cap => &history[history.len() - cap..],
            _ => history,
        };

        let mut messages = Vec::with_capacity(history.len() + 3);
        messages.push(LLMMessage::system(SYSTEM_PROMPT));
        messages.push(LLMMessage::system(truncate_chars(
            session.document(),
            self.max_context_chars,
        )));
        messages.extend(history.iter().cloned());
        messages.push(LLMMessage::user(question));

        Ok(messages)
    }
}

impl Default for ContextAssembler {
    fn default() -> Self {
        Self::new(&ContextConfig::default())
    }
}
