// LLM abstraction layer

pub mod provider;
pub mod deepseek;

pub use provider::*;
pub use deepseek::DeepSeekAdapter;
