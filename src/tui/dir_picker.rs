// file: src/tui/dir_picker.rs
// description: modal directory browser behind the form's Browse triggers

use crossterm::event::{KeyCode, KeyEvent};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Which form field receives the picked directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerTarget {
    PdfDirectory,
    SaveDirectory,
}

#[derive(Debug, PartialEq, Eq)]
pub enum PickerResult {
    Consumed,
    Selected(PathBuf),
    Cancelled,
}

#[derive(Debug)]
pub struct DirectoryPicker {
    pub target: PickerTarget,
    current: PathBuf,
    entries: Vec<String>,
    selected: usize,
    error: Option<String>,
}

impl DirectoryPicker {
    /// Opens at `start` when it is a directory, otherwise at the working directory.
    pub fn open(target: PickerTarget, start: &str) -> Self {
        let start = start.trim();
        let current = if !start.is_empty() && Path::new(start).is_dir() {
            PathBuf::from(start)
        } else {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        };

        let mut picker = Self {
            target,
            current,
            entries: Vec::new(),
            selected: 0,
            error: None,
        };
        picker.reload();
        picker
    }

    pub fn current(&self) -> &Path {
        &self.current
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> PickerResult {
        match key.code {
            KeyCode::Esc => return PickerResult::Cancelled,
            KeyCode::Char('s') | KeyCode::Char(' ') => {
                return PickerResult::Selected(self.current.clone());
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.entries.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => self.descend(),
            KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => self.ascend(),
            _ => {}
        }
        PickerResult::Consumed
    }

    fn descend(&mut self) {
        if let Some(name) = self.entries.get(self.selected) {
            self.current = self.current.join(name);
            self.reload();
        }
    }

    fn ascend(&mut self) {
        if let Some(parent) = self.current.parent() {
            let child = self
                .current
                .file_name()
                .map(|n| n.to_string_lossy().to_string());
            self.current = parent.to_path_buf();
            self.reload();
            if let Some(child) = child
                && let Some(idx) = self.entries.iter().position(|e| *e == child)
            {
                self.selected = idx;
            }
        }
    }

    fn reload(&mut self) {
        self.selected = 0;
        match list_subdirectories(&self.current) {
            Ok(entries) => {
                self.entries = entries;
                self.error = None;
            }
            Err(e) => {
                warn!("Cannot list {}: {}", self.current.display(), e);
                self.entries.clear();
                self.error = Some(e.to_string());
            }
        }
    }
}

/// Names of the sub-directories of `dir`, sorted.
pub fn list_subdirectories(dir: &Path) -> io::Result<Vec<String>> {
    let mut names: Vec<String> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    Ok(names)
}
