// file: src/form/handler.rs
// description: search action of the form: validate, search, render, save
// reference: pure state-in, instructions-out handler shared by every adapter

use crate::exporter::TextExporter;
use crate::extractor::TextExtractor;
use crate::form::{FormState, Notification, StyledSegment, render_results};
use crate::models::SearchResults;
use crate::pipeline::{ProgressTracker, SearchOrchestrator};
use crate::utils::Validator;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// What one submit produced.
///
/// `output` is `None` when validation aborted the action; the adapter then
/// leaves its output pane untouched. Otherwise the pane is replaced wholesale.
#[derive(Debug, Clone, Default)]
pub struct FormOutcome {
    pub output: Option<Vec<StyledSegment>>,
    pub results: Option<SearchResults>,
    pub notifications: Vec<Notification>,
    pub saved_to: Option<PathBuf>,
}

impl FormOutcome {
    fn aborted(notification: Notification) -> Self {
        Self {
            notifications: vec![notification],
            ..Self::default()
        }
    }

    pub fn is_aborted(&self) -> bool {
        self.output.is_none()
    }
}

pub fn handle_search<E: TextExtractor>(
    state: &FormState,
    orchestrator: &SearchOrchestrator<E>,
    progress: Option<&ProgressTracker>,
) -> FormOutcome {
    let state = state.trimmed();

    if Validator::validate_required(&state.pdf_directory, "PDF directory").is_err()
        || Validator::validate_required(&state.keyword, "Keyword").is_err()
    {
        warn!("Search submitted without directory or keyword");
        return FormOutcome::aborted(Notification::input_error());
    }

    let directory = Path::new(&state.pdf_directory);
    if let Err(e) = Validator::validate_directory(directory) {
        warn!("{}", e);
        return FormOutcome::aborted(Notification::directory_not_found());
    }

    let files = match orchestrator.scanner().list_pdfs(directory) {
        Ok(files) => files,
        Err(e) => {
            error!("Failed to list {}: {}", directory.display(), e);
            return FormOutcome::aborted(Notification::directory_unreadable(e));
        }
    };

    if files.is_empty() {
        warn!("No pdf files in {}", directory.display());
        return FormOutcome::aborted(Notification::no_pdfs_found());
    }

    let results = orchestrator.search_documents(&files, &state.keyword, progress);
    let output = render_results(&results, &state.keyword);

    let mut outcome = FormOutcome {
        output: Some(output),
        ..FormOutcome::default()
    };

    if let Some(save_dir) = state.save_directory_path() {
        match save_results(&save_dir, &results) {
            Ok(path) => {
                outcome.notifications.push(Notification::save_success(&path));
                outcome.saved_to = Some(path);
            }
            Err(notification) => outcome.notifications.push(notification),
        }
    }

    outcome.results = Some(results);
    outcome
}

fn save_results(save_dir: &Path, results: &SearchResults) -> Result<PathBuf, Notification> {
    if Validator::validate_directory(save_dir).is_err() {
        warn!("Save directory missing: {}", save_dir.display());
        return Err(Notification::save_directory_not_found(save_dir));
    }

    match TextExporter::new(save_dir).write(results) {
        Ok(path) => {
            info!("Results saved to {}", path.display());
            Ok(path)
        }
        Err(e) => {
            error!("Saving results failed: {}", e);
            Err(Notification::save_failure(e))
        }
    }
}
