// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for directory searches
// reference: uses indicatif for progress bars and tracks search metrics

use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::cell::Cell;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineStats {
    pub files_scanned: usize,
    pub files_matched: usize,
    pub paragraphs_matched: usize,
    pub extraction_failures: usize,
    pub bytes_scanned: u64,
    pub duration: Duration,
}

impl PipelineStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.files_scanned as f64 / secs
    }

    pub fn match_rate(&self) -> f64 {
        if self.files_scanned == 0 {
            return 0.0;
        }
        (self.files_matched as f64 / self.files_scanned as f64) * 100.0
    }

    pub fn format(&self) -> String {
        format!(
            "{} file(s) scanned in {:.2}s ({:.1} files/s), {} with matches ({:.1}%), {} paragraph(s), {} unreadable",
            self.files_scanned,
            self.duration.as_secs_f64(),
            self.files_per_second(),
            self.files_matched,
            self.match_rate(),
            self.paragraphs_matched,
            self.extraction_failures
        )
    }
}

/// Single-threaded progress bar over the PDFs of one search.
pub struct ProgressTracker {
    bar: ProgressBar,
    files_scanned: Cell<usize>,
    files_matched: Cell<usize>,
    paragraphs_matched: Cell<usize>,
    extraction_failures: Cell<usize>,
    bytes_scanned: Cell<u64>,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn new(colored: bool) -> Self {
        Self::with_bar(create_progress_bar(colored))
    }

    /// A tracker that records statistics without drawing anything.
    pub fn hidden() -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::hidden());
        Self::with_bar(bar)
    }

    fn with_bar(bar: ProgressBar) -> Self {
        Self {
            bar,
            files_scanned: Cell::new(0),
            files_matched: Cell::new(0),
            paragraphs_matched: Cell::new(0),
            extraction_failures: Cell::new(0),
            bytes_scanned: Cell::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn set_total(&self, total_files: usize) {
        self.bar.set_length(total_files as u64);
    }

    pub fn start_file(&self, file_name: &str) {
        self.bar.set_message(file_name.to_string());
    }

    pub fn record_file(&self, bytes: u64, matches: usize, extraction_failed: bool) {
        self.files_scanned.set(self.files_scanned.get() + 1);
        self.bytes_scanned.set(self.bytes_scanned.get() + bytes);
        if matches > 0 {
            self.files_matched.set(self.files_matched.get() + 1);
            self.paragraphs_matched
                .set(self.paragraphs_matched.get() + matches);
        }
        if extraction_failed {
            self.extraction_failures
                .set(self.extraction_failures.get() + 1);
        }
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }

    pub fn get_stats(&self) -> PipelineStats {
        PipelineStats {
            files_scanned: self.files_scanned.get(),
            files_matched: self.files_matched.get(),
            paragraphs_matched: self.paragraphs_matched.get(),
            extraction_failures: self.extraction_failures.get(),
            bytes_scanned: self.bytes_scanned.get(),
            duration: self.start_time.elapsed(),
        }
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_progress_bar(colored: bool) -> ProgressBar {
    let bar = ProgressBar::new(0);
    let (template, chars) = if colored {
        (
            "{prefix} {spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            "█▓▒░",
        )
    } else {
        (
            "{prefix} {spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}",
            "=>-",
        )
    };

    match ProgressStyle::default_bar().template(template) {
        Ok(style) => bar.set_style(style.progress_chars(chars)),
        Err(e) => tracing::warn!("Invalid progress template: {}", e),
    }

    bar.set_prefix(if colored {
        "scan".cyan().to_string()
    } else {
        "scan".to_string()
    });
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_stats_calculations() {
        let stats = PipelineStats {
            files_scanned: 10,
            files_matched: 4,
            paragraphs_matched: 9,
            extraction_failures: 1,
            bytes_scanned: 1000,
            duration: Duration::from_secs(5),
        };

        assert_eq!(stats.files_per_second(), 2.0);
        assert!((stats.match_rate() - 40.0).abs() < 1e-9);
        assert!(stats.format().contains("10 file(s) scanned in 5.00s (2.0 files/s)"));
        assert!(stats.format().contains("1 unreadable"));
    }

    #[test]
    fn test_pipeline_stats_zero_values() {
        let stats = PipelineStats::new();
        assert_eq!(stats.files_per_second(), 0.0);
        assert_eq!(stats.match_rate(), 0.0);
    }

    #[test]
    fn test_progress_tracker_records_files() {
        let tracker = ProgressTracker::hidden();
        tracker.set_total(3);

        tracker.start_file("a.pdf");
        tracker.record_file(1024, 2, false);
        tracker.record_file(10, 0, true);
        tracker.record_file(10, 0, false);

        let stats = tracker.get_stats();
        assert_eq!(stats.files_scanned, 3);
        assert_eq!(stats.files_matched, 1);
        assert_eq!(stats.paragraphs_matched, 2);
        assert_eq!(stats.extraction_failures, 1);
        assert_eq!(stats.bytes_scanned, 1044);
    }
}
