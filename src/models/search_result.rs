// file: src/models/search_result.rs
// description: ordered mapping from pdf file name to matching paragraphs
// reference: Used by the form renderer and the results exporters

use serde::{Deserialize, Serialize};

/// Matching paragraphs of one document, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMatches {
    /// File name as listed in the scanned directory
    pub file_name: String,

    /// Paragraphs containing the keyword; never empty
    pub paragraphs: Vec<String>,
}

/// Result mapping of one directory search.
///
/// Documents keep the order in which they were searched and appear only when
/// they have at least one matching paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchResults {
    documents: Vec<DocumentMatches>,
}

impl SearchResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a document's matches; a document without matches is omitted.
    pub fn insert(&mut self, file_name: impl Into<String>, paragraphs: Vec<String>) -> bool {
        if paragraphs.is_empty() {
            return false;
        }

        self.documents.push(DocumentMatches {
            file_name: file_name.into(),
            paragraphs,
        });
        true
    }

    pub fn get(&self, file_name: &str) -> Option<&[String]> {
        self.documents
            .iter()
            .find(|doc| doc.file_name == file_name)
            .map(|doc| doc.paragraphs.as_slice())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DocumentMatches> {
        self.documents.iter()
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.documents.iter().map(|d| d.file_name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn total_paragraphs(&self) -> usize {
        self.documents.iter().map(|d| d.paragraphs.len()).sum()
    }

    /// Format as a one-line summary for status displays
    pub fn format_summary(&self) -> String {
        format!(
            "{} matching paragraph(s) in {} document(s)",
            self.total_paragraphs(),
            self.len()
        )
    }
}

impl<'a> IntoIterator for &'a SearchResults {
    type Item = &'a DocumentMatches;
    type IntoIter = std::slice::Iter<'a, DocumentMatches>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_skips_empty_matches() {
        let mut results = SearchResults::new();
        assert!(results.insert("a.pdf", vec!["foo BAR baz".to_string()]));
        assert!(!results.insert("b.pdf", vec![]));

        assert_eq!(results.len(), 1);
        assert_eq!(results.get("a.pdf"), Some(&["foo BAR baz".to_string()][..]));
        assert!(results.get("b.pdf").is_none());
    }

    #[test]
    fn test_keeps_insertion_order() {
        let mut results = SearchResults::new();
        results.insert("z.pdf", vec!["one".to_string()]);
        results.insert("a.pdf", vec!["two".to_string(), "three".to_string()]);

        assert_eq!(results.file_names(), vec!["z.pdf", "a.pdf"]);
        assert_eq!(results.total_paragraphs(), 3);
    }

    #[test]
    fn test_format_summary() {
        let mut results = SearchResults::new();
        results.insert("a.pdf", vec!["x".to_string(), "y".to_string()]);
        assert_eq!(
            results.format_summary(),
            "2 matching paragraph(s) in 1 document(s)"
        );
    }

    #[test]
    fn test_serializes_as_ordered_array() {
        let mut results = SearchResults::new();
        results.insert("b.pdf", vec!["p1".to_string()]);
        results.insert("a.pdf", vec!["p2".to_string()]);

        let json = serde_json::to_string(&results).unwrap();
        assert_eq!(
            json,
            r#"[{"file_name":"b.pdf","paragraphs":["p1"]},{"file_name":"a.pdf","paragraphs":["p2"]}]"#
        );
    }
}
