//! Static File Serving
//!
//! Serves the single page front-end from the configured static directory.
//! Any path that matches neither an API route nor a file falls back to
//! `index.html` so client-side routing keeps working.

use axum::{
    handler::HandlerWithoutStateExt,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::path::{Path, PathBuf};
use tower_http::services::ServeDir;
use tracing::{info, warn};

/// Create router for serving static files
pub fn router(static_dir: &Path) -> Router {
    if static_dir.is_dir() {
        info!(path = %static_dir.display(), "Serving static files");
    } else {
        warn!(path = %static_dir.display(), "Static files directory not found, serving placeholder page");
    }

    let index_path = static_dir.join("index.html");
    let index = move || serve_index(index_path.clone());

    let serve_dir = ServeDir::new(static_dir)
        .append_index_html_on_directories(true)
        .call_fallback_on_method_not_allowed(true)
        .fallback(index.clone().into_service());

    Router::new()
        .route("/", get(index))
        .fallback_service(serve_dir)
}

/// Serve the index page, or a placeholder if the front-end is missing
async fn serve_index(path: PathBuf) -> Response {
    match tokio::fs::read_to_string(&path).await {
        Ok(content) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            content,
        )
            .into_response(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "index.html not readable");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                FALLBACK_HTML,
            )
                .into_response()
        }
    }
}

const FALLBACK_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Oxidized Reader - API Server</title>
</head>
<body>
    <h1>Oxidized Reader</h1>
    <p>The API server is running, but no front-end was found in the static directory.</p>
    <ul>
        <li><code>POST /upload</code> - multipart form with a <code>file</code> field holding a PDF</li>
        <li><code>POST /ask</code> - JSON body <code>{"question": "..."}</code></li>
        <li><code>GET /api/health</code> - health check</li>
    </ul>
</body>
</html>"#;
