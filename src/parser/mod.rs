// file: src/parser/mod.rs
// description: paragraph splitting and keyword matching module exports
// reference: internal module structure

pub mod keyword;
pub mod paragraphs;

pub use keyword::{contains_keyword, find_occurrences, find_paragraphs_with_keyword, fold_case};
pub use paragraphs::{PARAGRAPH_SEPARATOR, join_paragraphs, split_paragraphs};
