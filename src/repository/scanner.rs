// file: src/repository/scanner.rs
// description: Directory listing and pdf file discovery
// reference: https://docs.rs/walkdir

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Case-sensitive file name suffix of searchable documents.
pub const PDF_SUFFIX: &str = ".pdf";

pub struct PdfScanner {
    config: SearchConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedPdf {
    pub path: PathBuf,
    pub file_name: String,
    pub size: u64,
}

impl PdfScanner {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Lists the regular files directly inside `root` whose name ends in `.pdf`.
    ///
    /// Without `sort_files` the order is whatever the filesystem yields, which
    /// differs between platforms.
    pub fn list_pdfs(&self, root: &Path) -> Result<Vec<ScannedPdf>> {
        info!("Scanning directory: {}", root.display());

        let mut walker = WalkDir::new(root).min_depth(1).max_depth(1).follow_links(false);
        if self.config.sort_files {
            walker = walker.sort_by_file_name();
        }

        let mut files = Vec::new();

        for entry in walker {
            let entry = entry.map_err(|e| match e.into_io_error() {
                Some(source) => SearchError::FileOperation {
                    path: root.to_path_buf(),
                    source,
                },
                None => SearchError::Validation(format!(
                    "Cannot list directory {}",
                    root.display()
                )),
            })?;

            let file_name = entry.file_name().to_string_lossy().to_string();
            if !Self::is_pdf_name(&file_name) {
                continue;
            }

            // is_file follows symlinks; dangling links are skipped
            if !entry.path().is_file() {
                debug!("Skipping non-file entry: {}", entry.path().display());
                continue;
            }

            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);

            files.push(ScannedPdf {
                path: entry.path().to_path_buf(),
                file_name,
                size,
            });
        }

        info!("Found {} pdf files", files.len());
        Ok(files)
    }

    pub fn is_pdf_name(file_name: &str) -> bool {
        file_name.ends_with(PDF_SUFFIX)
    }
}
