// file: src/utils/logging.rs
// description: Tracing subscriber initialization with optional ANSI coloring

use crate::form::{SegmentStyle, StyledSegment};
use colored::*;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init_logger(colored_output: bool, verbose: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_ansi(colored_output)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(level_filter(verbose))
        .with(fmt_layer)
        .init();
}

/// Sends log output to `path` so it does not draw over the terminal form.
pub fn init_file_logger(path: &Path, verbose: bool) -> std::io::Result<()> {
    let file = File::options().create(true).append(true).open(path)?;

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_ansi(false)
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(level_filter(verbose))
        .with(fmt_layer)
        .init();

    Ok(())
}

fn level_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "info" };
    EnvFilter::new(level)
}

pub fn format_success(msg: &str) -> String {
    format!("{} {}", "✓".green().bold(), msg.green())
}

pub fn format_error(msg: &str) -> String {
    format!("{} {}", "✗".red().bold(), msg.red())
}

pub fn format_warning(msg: &str) -> String {
    format!("{} {}", "⚠".yellow().bold(), msg.yellow())
}

pub fn format_info(msg: &str) -> String {
    format!("{} {}", "ℹ".blue().bold(), msg)
}

/// Styles a rendered result segment for terminal output.
pub fn format_segment(segment: &StyledSegment) -> String {
    match segment.style {
        SegmentStyle::Plain => segment.text.clone(),
        SegmentStyle::Header => segment.text.black().on_yellow().to_string(),
        SegmentStyle::Highlight => segment.text.black().on_bright_green().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatters_keep_message() {
        colored::control::set_override(false);
        assert_eq!(format_success("saved"), "✓ saved");
        assert_eq!(format_error("failed"), "✗ failed");
        assert_eq!(format_warning("careful"), "⚠ careful");
        assert_eq!(format_info("note"), "ℹ note");
    }

    #[test]
    fn test_format_segment_without_colors() {
        colored::control::set_override(false);
        let header = StyledSegment::new("\nPDF: a.pdf\n", SegmentStyle::Header);
        assert_eq!(format_segment(&header), "\nPDF: a.pdf\n");
        assert_eq!(format_segment(&StyledSegment::plain("x")), "x");
    }
}
