// file: src/models/document.rs
// description: extracted pdf document with its derived paragraphs
// reference: internal data structures

use crate::parser::find_paragraphs_with_keyword;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Document {
    pub file_name: String,
    pub path: PathBuf,
    pub text: String,
}

impl Document {
    pub fn new(file_name: String, path: PathBuf, text: String) -> Self {
        Self {
            file_name,
            path,
            text,
        }
    }

    pub fn matching_paragraphs(&self, keyword: &str) -> Vec<String> {
        find_paragraphs_with_keyword(&self.text, keyword)
    }
}
