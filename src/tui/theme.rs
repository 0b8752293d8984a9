// file: src/tui/theme.rs
// description: colors and styles of the terminal form
// reference: https://docs.rs/ratatui

use crate::form::{NotificationLevel, SegmentStyle};
use ratatui::style::{Color, Modifier, Style};

/// Light green behind keyword occurrences.
pub const LIGHT_GREEN: Color = Color::Rgb(0x90, 0xEE, 0x90);

pub const ERROR: Color = Color::Rgb(0xEF, 0x53, 0x50);
pub const SUCCESS: Color = Color::Rgb(0x66, 0xBB, 0x6A);
pub const WARNING: Color = Color::Rgb(0xFF, 0xA7, 0x26);
pub const TEXT_DIM: Color = Color::Rgb(0x80, 0x80, 0x80);

pub fn segment(style: SegmentStyle) -> Style {
    match style {
        SegmentStyle::Plain => Style::default(),
        SegmentStyle::Header => Style::default().bg(Color::Yellow).fg(Color::Black),
        SegmentStyle::Highlight => Style::default().bg(LIGHT_GREEN).fg(Color::Black),
    }
}

pub fn notification(level: NotificationLevel) -> (&'static str, Color) {
    match level {
        NotificationLevel::Success => ("✓", SUCCESS),
        NotificationLevel::Warning => ("⚠", WARNING),
        NotificationLevel::Error => ("✗", ERROR),
    }
}

pub fn border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(TEXT_DIM)
    }
}

pub fn button(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    }
}

pub fn hint() -> Style {
    Style::default().fg(TEXT_DIM)
}
