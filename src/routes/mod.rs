//! API Routes
//!
//! This module organizes all HTTP endpoints for the application:
//! - `/upload` - PDF upload and text extraction
//! - `/ask` - Questions about the uploaded PDF
//! - `/api/health` - Health checks
//! - `/` - Static file serving (frontend), also the fallback for unknown paths

pub mod ask;
pub mod health;
pub mod static_files;
pub mod upload;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::cors_layer;
use crate::models::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let static_dir = state.config.server.static_dir.clone();

    let api_router = Router::new()
        .merge(upload::router(state.clone()))
        .merge(ask::router(state.clone()))
        .merge(health::router(state));

    // API routes take precedence over static files
    Router::new()
        .merge(api_router)
        .merge(static_files::router(&static_dir))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}
