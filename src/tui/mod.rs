// file: src/tui/mod.rs
// description: interactive terminal form and terminal setup
// reference: https://docs.rs/ratatui

pub mod app;
pub mod dir_picker;
pub mod input_buffer;
pub mod theme;

pub use app::{App, Focus, segments_to_lines};
pub use dir_picker::{DirectoryPicker, PickerTarget};

use crate::extractor::TextExtractor;
use crate::pipeline::SearchOrchestrator;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::info;

/// Runs the form until the user quits, restoring the terminal afterwards.
pub fn run<E: TextExtractor>(orchestrator: SearchOrchestrator<E>) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("Search form opened");
    let result = App::new(orchestrator).run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Search form closed");
    result
}
