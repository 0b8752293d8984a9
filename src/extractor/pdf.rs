// file: src/extractor/pdf.rs
// description: page-ordered pdf text extraction backed by lopdf
// reference: https://docs.rs/lopdf

use crate::error::{Result, SearchError};
use crate::extractor::TextExtractor;
use lopdf::Document;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, path: &Path) -> Result<String> {
        let doc = Document::load(path).map_err(|e| SearchError::extraction(path, e))?;

        // get_pages is keyed by page number, so iteration follows reading order
        let pages = doc.get_pages();
        debug!("Loaded {} ({} pages)", path.display(), pages.len());

        let mut text = String::new();
        for page_num in pages.keys() {
            let content = doc
                .extract_text(&[*page_num])
                .map_err(|e| SearchError::extraction(path, format!("page {page_num}: {e}")))?;
            text.push_str(&content);
        }

        Ok(text)
    }
}
