// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: directory search orchestration

mod orchestrator;
mod progress;

pub use orchestrator::SearchOrchestrator;
pub use progress::{PipelineStats, ProgressTracker};
