use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    routing::post,
    Json, Router,
};
use tracing::{debug, info};

use crate::document::DocumentExtractor;
use crate::models::{AppState, UploadResponse};
use crate::types::{AppError, AppResult};
use crate::utils::truncate_chars;

/// Characters of extracted text echoed back after an upload
pub const PREVIEW_CHARS: usize = 2000;

const NO_FILE: &str = "No PDF file uploaded.";

pub fn router(state: AppState) -> Router {
    let body_limit = state.config.server.max_upload_bytes;

    Router::new()
        .route("/upload", post(upload_pdf))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// POST /upload - Extract the text of a PDF and start a new conversation
async fn upload_pdf(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<UploadResponse>> {
    info!("PDF upload request received");

    let mut multipart = multipart.map_err(|rejection| {
        debug!(error = %rejection, "Upload is not a multipart request");
        AppError::BadRequest(NO_FILE.to_string())
    })?;

    let mut payload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let has_filename = field.file_name().is_some_and(|name| !name.is_empty());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        if has_filename && !bytes.is_empty() {
            payload = Some(bytes);
        }
        break;
    }

    let payload = payload.ok_or_else(|| AppError::BadRequest(NO_FILE.to_string()))?;
    debug!(bytes = payload.len(), "Extracting PDF text");

    let text = tokio::task::spawn_blocking(move || DocumentExtractor::extract(&payload))
        .await
        .map_err(|e| AppError::Internal(format!("PDF extraction task failed: {}", e)))??;

    let preview = truncate_chars(&text, PREVIEW_CHARS).to_string();

    state.session.write().await.replace_document(text);
    info!(preview_chars = preview.chars().count(), "PDF stored, conversation reset");

    Ok(Json(UploadResponse {
        message: "PDF uploaded successfully.".to_string(),
        preview,
    }))
}
