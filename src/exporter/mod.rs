// file: src/exporter/mod.rs
// description: results persistence module exports

pub mod json;
pub mod text;

pub use json::{JsonExporter, JsonReport};
pub use text::{RESULTS_FILE_NAME, TextExporter};
