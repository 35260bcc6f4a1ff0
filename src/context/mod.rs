//! Context assembly
//!
//! Builds the message list sent to the chat model for one question.

pub mod assembler;

pub use assembler::{ContextAssembler, ContextError, SYSTEM_PROMPT};
