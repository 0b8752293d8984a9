// file: src/exporter/json.rs
// description: json rendering of search results for scripting

use crate::error::{Result, SearchError};
use crate::models::SearchResults;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub keyword: &'a str,
    pub total_documents: usize,
    pub total_paragraphs: usize,
    pub results: &'a SearchResults,
}

pub struct JsonExporter;

impl JsonExporter {
    pub fn to_string(keyword: &str, results: &SearchResults, pretty: bool) -> Result<String> {
        let report = JsonReport {
            keyword,
            total_documents: results.len(),
            total_paragraphs: results.total_paragraphs(),
            results,
        };

        let json = if pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };

        json.map_err(|e| SearchError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compact_report() {
        let mut results = SearchResults::new();
        results.insert("a.pdf", vec!["foo BAR baz".to_string()]);

        let json = JsonExporter::to_string("bar", &results, false).unwrap();
        assert_eq!(
            json,
            r#"{"keyword":"bar","total_documents":1,"total_paragraphs":1,"results":[{"file_name":"a.pdf","paragraphs":["foo BAR baz"]}]}"#
        );
    }

    #[test]
    fn test_pretty_report_parses_back() {
        let json = JsonExporter::to_string("bar", &SearchResults::new(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_documents"], 0);
        assert!(value["results"].as_array().unwrap().is_empty());
    }
}
