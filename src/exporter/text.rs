// file: src/exporter/text.rs
// description: flat text dump of search results

use crate::error::{Result, SearchError};
use crate::models::SearchResults;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub const RESULTS_FILE_NAME: &str = "search_results.txt";

#[derive(Debug, Clone)]
pub struct TextExporter {
    output_dir: PathBuf,
}

impl TextExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(RESULTS_FILE_NAME)
    }

    /// Writes `search_results.txt`, replacing any previous file.
    pub fn write(&self, results: &SearchResults) -> Result<PathBuf> {
        let path = self.output_path();
        info!("Saving results to {}", path.display());

        let file = File::create(&path).map_err(|source| file_error(&path, source))?;
        let mut writer = BufWriter::new(file);

        Self::write_results(&mut writer, results).map_err(|source| file_error(&path, source))?;
        writer.flush().map_err(|source| file_error(&path, source))?;

        Ok(path)
    }

    pub fn write_results<W: Write>(writer: &mut W, results: &SearchResults) -> std::io::Result<()> {
        for document in results {
            write!(writer, "\nPDF: {}\n", document.file_name)?;
            for paragraph in &document.paragraphs {
                write!(writer, "\n{}\n", paragraph)?;
            }
        }
        Ok(())
    }
}

fn file_error(path: &Path, source: std::io::Error) -> SearchError {
    SearchError::FileOperation {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn sample_results() -> SearchResults {
        let mut results = SearchResults::new();
        results.insert("a.pdf", vec!["foo BAR baz".to_string(), "bar two".to_string()]);
        results.insert("c.pdf", vec!["last bar".to_string()]);
        results
    }

    #[test]
    fn test_write_format() {
        let temp = TempDir::new().unwrap();
        let path = TextExporter::new(temp.path()).write(&sample_results()).unwrap();

        assert_eq!(path, temp.path().join("search_results.txt"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "\nPDF: a.pdf\n\nfoo BAR baz\n\nbar two\n\nPDF: c.pdf\n\nlast bar\n"
        );
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(RESULTS_FILE_NAME);
        fs::write(&path, "old contents that are longer than the new ones").unwrap();

        TextExporter::new(temp.path())
            .write(&SearchResults::new())
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let exporter = TextExporter::new(temp.path().join("missing"));
        let result = exporter.write(&sample_results());
        assert!(matches!(result, Err(SearchError::FileOperation { .. })));
    }
}
