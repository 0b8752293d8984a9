// file: src/parser/paragraphs.rs
// description: blank-line paragraph splitting of extracted text
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

lazy_static! {
    // a newline, any whitespace (including further newlines), a newline
    pub static ref PARAGRAPH_BREAK: Regex =
        Regex::new(r"\n\s*\n").expect("PARAGRAPH_BREAK regex is valid");
}

/// Splits trimmed text into paragraphs at every blank line.
///
/// Text that is empty after trimming has no paragraphs.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    PARAGRAPH_BREAK.split(trimmed).collect()
}

pub fn join_paragraphs<S: AsRef<str>>(paragraphs: &[S]) -> String {
    paragraphs
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR)
}
