// file: src/pipeline/orchestrator.rs
// description: sequential directory search over pdf files
// reference: scans the folder, extracts each pdf and filters its paragraphs

use crate::config::SearchConfig;
use crate::error::Result;
use crate::extractor::{TextExtractor, try_extract_text};
use crate::models::{Document, SearchResults};
use crate::pipeline::ProgressTracker;
use crate::repository::{PdfScanner, ScannedPdf};
use std::path::Path;
use tracing::{debug, info};

pub struct SearchOrchestrator<E: TextExtractor> {
    extractor: E,
    scanner: PdfScanner,
}

impl<E: TextExtractor> SearchOrchestrator<E> {
    pub fn new(extractor: E, config: SearchConfig) -> Self {
        Self {
            extractor,
            scanner: PdfScanner::new(config),
        }
    }

    pub fn scanner(&self) -> &PdfScanner {
        &self.scanner
    }

    pub fn search_directory(
        &self,
        directory: &Path,
        keyword: &str,
        progress: Option<&ProgressTracker>,
    ) -> Result<SearchResults> {
        let files = self.scanner.list_pdfs(directory)?;
        Ok(self.search_documents(&files, keyword, progress))
    }

    /// Runs extraction and keyword filtering on each file in order.
    ///
    /// Unreadable files count as empty and never abort the search.
    pub fn search_documents(
        &self,
        files: &[ScannedPdf],
        keyword: &str,
        progress: Option<&ProgressTracker>,
    ) -> SearchResults {
        info!("Searching {} pdf files for {:?}", files.len(), keyword);
        if let Some(tracker) = progress {
            tracker.set_total(files.len());
        }

        let mut results = SearchResults::new();

        for file in files {
            if let Some(tracker) = progress {
                tracker.start_file(&file.file_name);
            }

            let extracted = try_extract_text(&self.extractor, &file.path);
            let failed = extracted.is_none();

            let document = Document::new(
                file.file_name.clone(),
                file.path.clone(),
                extracted.unwrap_or_default(),
            );
            let paragraphs = document.matching_paragraphs(keyword);
            let matches = paragraphs.len();

            debug!("{}: {} matching paragraphs", file.file_name, matches);
            results.insert(document.file_name, paragraphs);

            if let Some(tracker) = progress {
                tracker.record_file(file.size, matches, failed);
            }
        }

        if let Some(tracker) = progress {
            tracker.finish();
        }

        info!("Search finished: {}", results.format_summary());
        results
    }
}
