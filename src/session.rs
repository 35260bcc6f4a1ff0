//! Session State
//!
//! The single, process-wide record of the uploaded document and the
//! conversation held about it. Handlers share it through [`SharedSession`];
//! every read-modify-write sequence happens inside one lock scope.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::types::LLMMessage;

/// One recorded message of the conversation (`user` or `assistant`)
pub type ConversationTurn = LLMMessage;

pub type SharedSession = Arc<RwLock<SessionState>>;

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    document: String,
    history: Vec<ConversationTurn>,
    /// Bumped on every document replacement.
    generation: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedSession {
        Arc::new(RwLock::new(Self::new()))
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn has_document(&self) -> bool {
        !self.document.is_empty()
    }

    pub fn history(&self) -> &[ConversationTurn] {
        &self.history
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Install a newly extracted document. The old conversation refers to the
    /// previous document, so it is dropped.
    pub fn replace_document(&mut self, text: String) {
        self.document = text;
        self.history.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Record a completed question/answer round trip.
    pub fn record_exchange(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.history.push(LLMMessage::user(question));
        self.history.push(LLMMessage::assistant(answer));
    }
}
