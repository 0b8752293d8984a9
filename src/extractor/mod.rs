// file: src/extractor/mod.rs
// description: text extraction capability and degrade-to-empty helper
// reference: internal module structure

pub mod pdf;

pub use pdf::PdfTextExtractor;

use crate::error::Result;
use std::path::Path;
use tracing::{debug, warn};

/// Produces the plain text of a document, pages concatenated in reading order.
pub trait TextExtractor {
    fn extract_text(&self, path: &Path) -> Result<String>;
}

impl<T: TextExtractor + ?Sized> TextExtractor for &T {
    fn extract_text(&self, path: &Path) -> Result<String> {
        (**self).extract_text(path)
    }
}

/// Runs the extractor and degrades any failure to empty text.
///
/// An empty return value is ambiguous: the document may simply have no text.
pub fn extract_text_or_empty<E: TextExtractor + ?Sized>(extractor: &E, path: &Path) -> String {
    try_extract_text(extractor, path).unwrap_or_default()
}

/// Like [`extract_text_or_empty`] but tells the caller whether extraction failed.
pub fn try_extract_text<E: TextExtractor + ?Sized>(extractor: &E, path: &Path) -> Option<String> {
    match extractor.extract_text(path) {
        Ok(text) => {
            debug!("Extracted {} bytes from {}", text.len(), path.display());
            Some(text)
        }
        Err(e) => {
            warn!("Error reading {}: {}", path.display(), e);
            None
        }
    }
}
