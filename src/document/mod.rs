//! Document text extraction
//!
//! Turns an uploaded PDF into the single text blob the chat context is built
//! from. Only PDF is supported.

pub mod extractor;

pub use extractor::{DocumentExtractor, ExtractionError};
