// Oxidized Reader - ask an LLM questions about an uploaded PDF

pub mod config;
pub mod context;   // Message assembly for the chat model
pub mod document;  // PDF text extraction
pub mod llm;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod session;   // Shared document + conversation state
pub mod types;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
