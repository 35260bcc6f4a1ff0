use lopdf::Document;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Failed to parse PDF: {0}")]
    Parse(#[from] lopdf::Error),
}

pub struct DocumentExtractor;

impl DocumentExtractor {
    /// Extract the text of every page, in page order, joined by `\n`.
    ///
    /// A page whose text cannot be decoded contributes an empty string; only a
    /// payload that is not a readable PDF at all is an error.
    pub fn extract(payload: &[u8]) -> Result<String, ExtractionError> {
        let doc = Document::load_mem(payload)?;
        let pages = doc.get_pages();

        let texts: Vec<String> = pages
            .keys()
            .map(|&page_number| match doc.extract_text(&[page_number]) {
                Ok(text) => strip_text_object_break(&text).to_string(),
                Err(e) => {
                    warn!(page = page_number, error = %e, "Failed to extract text from page");
                    String::new()
                }
            })
            .collect();

        let content = texts.join("\n");
        debug!(
            pages = pages.len(),
            chars = content.chars().count(),
            "Extracted PDF text"
        );

        Ok(content)
    }
}

/// lopdf closes a page's last text object with one `\n`; drop only that.
fn strip_text_object_break(text: &str) -> &str {
    text.strip_suffix('\n').unwrap_or(text)
}
