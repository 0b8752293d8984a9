// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod form;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod repository;
pub mod tui;
pub mod utils;

pub use config::{Config, LoggingConfig, OutputConfig, SearchConfig};
pub use error::{Result, SearchError};
pub use exporter::{JsonExporter, JsonReport, RESULTS_FILE_NAME, TextExporter};
pub use extractor::{PdfTextExtractor, TextExtractor};
pub use form::{
    FormOutcome, FormState, Notification, NotificationKind, NotificationLevel, SegmentStyle,
    StyledSegment, handle_search, render_results,
};
pub use models::{Document, DocumentMatches, SearchResults};
pub use parser::{find_paragraphs_with_keyword, split_paragraphs};
pub use pipeline::{PipelineStats, ProgressTracker, SearchOrchestrator};
pub use repository::{PdfScanner, ScannedPdf};
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let _orchestrator = SearchOrchestrator::new(PdfTextExtractor::new(), config.search);
        assert_eq!(RESULTS_FILE_NAME, "search_results.txt");
    }
}
