// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use pdf_keyword_search::{
    Config, FormState, JsonExporter, NotificationLevel, PdfTextExtractor, ProgressTracker,
    SearchOrchestrator, handle_search, tui,
    utils::logging::{
        format_error, format_info, format_segment, format_success, format_warning,
        init_file_logger, init_logger,
    },
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "pdf_keyword_search")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Find paragraphs mentioning a keyword in a folder of PDF files", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive search form (default)
    Form,

    /// Search once and print the results
    Search {
        /// Folder holding the PDF files
        directory: PathBuf,

        keyword: String,

        /// Also write search_results.txt into this folder
        #[arg(long, value_name = "DIR")]
        save_dir: Option<PathBuf>,

        #[arg(long)]
        json: bool,

        /// Visit files in name order
        #[arg(long)]
        sorted: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.color {
        colored::control::set_override(false);
    }

    let (config, fallback_notice) = load_config(&cli.config)?;

    match cli.command.unwrap_or(Commands::Form) {
        Commands::Form => {
            init_file_logger(&config.logging.file, cli.verbose).with_context(|| {
                format!("Failed to open log file {}", config.logging.file.display())
            })?;
            log_startup(&cli.config, fallback_notice);
            cmd_form(&config)?;
        }
        Commands::Search {
            directory,
            keyword,
            save_dir,
            json,
            sorted,
        } => {
            init_logger(cli.color, cli.verbose);
            log_startup(&cli.config, fallback_notice);
            cmd_search(&config, cli.color, &directory, &keyword, save_dir, json, sorted)?;
        }
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<(Config, Option<String>)> {
    let notice = (!path.exists()).then(|| {
        format!(
            "Config file {} not found, using defaults and environment overrides",
            path.display()
        )
    });
    let config = Config::load(Some(path)).context("Failed to load configuration")?;
    Ok((config, notice))
}

fn log_startup(config_path: &Path, fallback_notice: Option<String>) {
    info!("PDF Keyword Search");
    info!("Loading configuration from: {}", config_path.display());
    if let Some(notice) = fallback_notice {
        warn!("{}", notice);
    }
}

fn cmd_form(config: &Config) -> Result<()> {
    let orchestrator = SearchOrchestrator::new(PdfTextExtractor::new(), config.search.clone());
    tui::run(orchestrator).context("Terminal form failed")?;
    Ok(())
}

fn cmd_search(
    config: &Config,
    color: bool,
    directory: &Path,
    keyword: &str,
    save_dir: Option<PathBuf>,
    json: bool,
    sorted: bool,
) -> Result<()> {
    let mut search_config = config.search.clone();
    search_config.sort_files |= sorted;

    let orchestrator = SearchOrchestrator::new(PdfTextExtractor::new(), search_config);
    let state = FormState::new(
        directory.display().to_string(),
        keyword,
        save_dir
            .map(|dir| dir.display().to_string())
            .unwrap_or_default(),
    );

    let progress = (config.output.show_progress && !json).then(|| ProgressTracker::new(color));
    let outcome = handle_search(&state, &orchestrator, progress.as_ref());
    if let Some(tracker) = &progress {
        tracker.finish();
    }

    for notification in &outcome.notifications {
        let line = notification.to_string();
        let formatted = match notification.level() {
            NotificationLevel::Success => format_success(&line),
            NotificationLevel::Warning => format_warning(&line),
            NotificationLevel::Error => format_error(&line),
        };
        eprintln!("{}", formatted);
    }

    if outcome.is_aborted() {
        bail!("Search aborted");
    }

    if json {
        let results = outcome.results.unwrap_or_default();
        println!("{}", JsonExporter::to_string(keyword.trim(), &results, true)?);
        return Ok(());
    }

    if let Some(segments) = &outcome.output {
        let rendered: String = segments.iter().map(format_segment).collect();
        print!("{}", rendered);
    }

    if let Some(results) = &outcome.results {
        eprintln!("{}", format_info(&results.format_summary()));
    }
    if let Some(tracker) = &progress {
        info!("{}", tracker.get_stats().format());
    }

    Ok(())
}
