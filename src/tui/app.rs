// file: src/tui/app.rs
// description: terminal search form: focus handling, key dispatch and rendering
// reference: https://docs.rs/ratatui

use crate::extractor::TextExtractor;
use crate::form::{FormOutcome, FormState, Notification, StyledSegment, handle_search};
use crate::pipeline::SearchOrchestrator;
use crate::tui::dir_picker::{DirectoryPicker, PickerResult, PickerTarget};
use crate::tui::input_buffer::InputBuffer;
use crate::tui::theme;
use crate::utils::Validator;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use std::cell::Cell;
use std::collections::VecDeque;
use std::io;
use tracing::{debug, info};

const PAGE_SCROLL: u16 = 10;

/// Focusable parts of the form, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    PdfDirectory,
    BrowsePdf,
    Keyword,
    SaveDirectory,
    BrowseSave,
    Search,
    Output,
}

impl Focus {
    const ORDER: [Focus; 7] = [
        Focus::PdfDirectory,
        Focus::BrowsePdf,
        Focus::Keyword,
        Focus::SaveDirectory,
        Focus::BrowseSave,
        Focus::Search,
        Focus::Output,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

pub struct App<E: TextExtractor> {
    pub running: bool,
    focus: Focus,
    pdf_directory: InputBuffer,
    keyword: InputBuffer,
    save_directory: InputBuffer,
    output: Vec<Line<'static>>,
    scroll: u16,
    // inner (width, height) of the output pane at the last render
    output_viewport: Cell<(u16, u16)>,
    status: String,
    notifications: VecDeque<Notification>,
    picker: Option<DirectoryPicker>,
    pending_search: bool,
    orchestrator: SearchOrchestrator<E>,
}

impl<E: TextExtractor> App<E> {
    pub fn new(orchestrator: SearchOrchestrator<E>) -> Self {
        Self {
            running: true,
            focus: Focus::PdfDirectory,
            pdf_directory: InputBuffer::new(),
            keyword: InputBuffer::new(),
            save_directory: InputBuffer::new(),
            output: Vec::new(),
            scroll: 0,
            output_viewport: Cell::new((0, 0)),
            status: "Ready".to_string(),
            notifications: VecDeque::new(),
            picker: None,
            pending_search: false,
            orchestrator,
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn output(&self) -> &[Line<'static>] {
        &self.output
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// The notification currently shown as a modal, if any.
    pub fn active_notification(&self) -> Option<&Notification> {
        self.notifications.front()
    }

    pub fn form_state(&self) -> FormState {
        FormState::new(
            self.pdf_directory.text(),
            self.keyword.text(),
            self.save_directory.text(),
        )
    }

    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key);
            }

            if self.pending_search {
                self.status = "Searching...".to_string();
                terminal.draw(|frame| self.render(frame))?;
                self.run_pending_search();
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.running = false;
            return;
        }

        if !self.notifications.is_empty() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.notifications.pop_front();
            }
            return;
        }

        if let Some(picker) = self.picker.as_mut() {
            match picker.handle_key(&key) {
                PickerResult::Consumed => {}
                PickerResult::Cancelled => self.picker = None,
                PickerResult::Selected(path) => {
                    let target = picker.target;
                    self.picker = None;
                    let text = path.display().to_string();
                    debug!("Picked {}", text);
                    match target {
                        PickerTarget::PdfDirectory => self.pdf_directory.set_text(text),
                        PickerTarget::SaveDirectory => self.save_directory.set_text(text),
                    }
                }
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.running = false,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            _ => self.handle_focused_key(key),
        }
    }

    fn handle_focused_key(&mut self, key: KeyEvent) {
        match self.focus {
            Focus::PdfDirectory | Focus::Keyword | Focus::SaveDirectory => match key.code {
                KeyCode::Enter => self.pending_search = true,
                KeyCode::Up => self.focus = self.focus.prev(),
                KeyCode::Down => self.focus = self.focus.next(),
                code => {
                    if let Some(buffer) = self.focused_buffer() {
                        edit_buffer(buffer, code);
                    }
                }
            },
            Focus::BrowsePdf | Focus::BrowseSave => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.open_picker();
                }
            }
            Focus::Search => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.pending_search = true;
                }
            }
            Focus::Output => self.scroll_output(key.code),
        }
    }

    fn focused_buffer(&mut self) -> Option<&mut InputBuffer> {
        match self.focus {
            Focus::PdfDirectory => Some(&mut self.pdf_directory),
            Focus::Keyword => Some(&mut self.keyword),
            Focus::SaveDirectory => Some(&mut self.save_directory),
            _ => None,
        }
    }

    fn open_picker(&mut self) {
        let (target, start) = match self.focus {
            Focus::BrowseSave => (PickerTarget::SaveDirectory, self.save_directory.text()),
            _ => (PickerTarget::PdfDirectory, self.pdf_directory.text()),
        };
        self.picker = Some(DirectoryPicker::open(target, start));
    }

    fn scroll_output(&mut self, code: KeyCode) {
        let max = self.max_scroll();
        let current = self.scroll.min(max);
        self.scroll = match code {
            KeyCode::Up | KeyCode::Char('k') => current.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => current.saturating_add(1),
            KeyCode::PageUp => current.saturating_sub(PAGE_SCROLL),
            KeyCode::PageDown => current.saturating_add(PAGE_SCROLL),
            KeyCode::Home => 0,
            KeyCode::End => max,
            _ => current,
        }
        .min(max);
    }

    /// Largest scroll offset, in wrapped rows, that still fills the pane.
    ///
    /// Before the first render the pane size is unknown and the offset is
    /// left uncapped; rendering clamps it.
    fn max_scroll(&self) -> u16 {
        let (width, height) = self.output_viewport.get();
        if width == 0 || height == 0 {
            return u16::MAX;
        }
        let rows = self.output_paragraph().line_count(width);
        rows.saturating_sub(height as usize).min(u16::MAX as usize) as u16
    }

    fn output_paragraph(&self) -> Paragraph<'static> {
        Paragraph::new(self.output.clone()).wrap(Wrap { trim: false })
    }

    /// Runs a search requested by the last key press.
    pub fn run_pending_search(&mut self) {
        if !std::mem::take(&mut self.pending_search) {
            return;
        }
        let outcome = handle_search(&self.form_state(), &self.orchestrator, None);
        self.apply_outcome(outcome);
    }

    fn apply_outcome(&mut self, outcome: FormOutcome) {
        if let Some(segments) = &outcome.output {
            self.output = segments_to_lines(segments);
            self.scroll = 0;
        }

        self.status = match (&outcome.results, &outcome.saved_to) {
            (Some(results), Some(path)) => {
                format!("{} | saved to {}", results.format_summary(), path.display())
            }
            (Some(results), None) => results.format_summary(),
            (None, _) => "Search aborted".to_string(),
        };
        info!("{}", self.status);

        self.notifications.extend(outcome.notifications);
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "PDF Keyword Search",
                Style::default().add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            rows[0],
        );

        self.render_field_row(
            frame,
            rows[1],
            "PDF Directory",
            &self.pdf_directory,
            Focus::PdfDirectory,
            Some(Focus::BrowsePdf),
        );
        self.render_field_row(frame, rows[2], "Keyword", &self.keyword, Focus::Keyword, None);
        self.render_field_row(
            frame,
            rows[3],
            "Save Directory (optional)",
            &self.save_directory,
            Focus::SaveDirectory,
            Some(Focus::BrowseSave),
        );

        frame.render_widget(
            Paragraph::new(Span::styled(
                " Search ",
                theme::button(self.focus == Focus::Search),
            ))
            .alignment(Alignment::Center),
            rows[4],
        );

        self.render_output(frame, rows[5]);
        self.render_status_bar(frame, rows[6]);

        if let Some(picker) = &self.picker {
            render_picker(frame, area, picker);
        } else if let Some(notification) = self.notifications.front() {
            render_notification(frame, area, notification);
        }
    }

    fn render_field_row(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        buffer: &InputBuffer,
        field: Focus,
        browse: Option<Focus>,
    ) {
        let (field_area, button_area) = match browse {
            Some(_) => {
                let cols =
                    Layout::horizontal([Constraint::Min(10), Constraint::Length(12)]).split(area);
                (cols[0], Some(cols[1]))
            }
            None => (area, None),
        };

        let focused = self.focus == field;
        let block = Block::default()
            .title(format!(" {} ", label))
            .borders(Borders::ALL)
            .border_style(theme::border(focused));
        let inner = block.inner(field_area);

        let cursor = buffer.cursor_column().min(u16::MAX as usize) as u16;
        let offset = cursor.saturating_sub(inner.width.saturating_sub(1));
        frame.render_widget(
            Paragraph::new(buffer.text()).block(block).scroll((0, offset)),
            field_area,
        );

        if focused && self.picker.is_none() && self.notifications.is_empty() {
            frame.set_cursor_position((inner.x + cursor - offset, inner.y));
        }

        if let (Some(button), Some(button_area)) = (browse, button_area) {
            let focused = self.focus == button;
            frame.render_widget(
                Paragraph::new(Span::styled("Browse", theme::button(focused)))
                    .alignment(Alignment::Center)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(theme::border(focused)),
                    ),
                button_area,
            );
        }
    }

    fn render_output(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Results ")
            .borders(Borders::ALL)
            .border_style(theme::border(self.focus == Focus::Output));

        let inner = block.inner(area);
        self.output_viewport.set((inner.width, inner.height));
        let scroll = self.scroll.min(self.max_scroll());

        frame.render_widget(
            self.output_paragraph().block(block).scroll((scroll, 0)),
            area,
        );
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let status = Line::from(vec![
            Span::raw(format!(" {} ", self.status)),
            Span::raw("│ "),
            Span::styled("Tab", theme::hint()),
            Span::raw(":next "),
            Span::styled("Enter", theme::hint()),
            Span::raw(":search "),
            Span::styled("Esc", theme::hint()),
            Span::raw(":quit"),
        ]);
        frame.render_widget(Paragraph::new(status), area);
    }
}

fn edit_buffer(buffer: &mut InputBuffer, code: KeyCode) {
    match code {
        KeyCode::Char(c) => buffer.insert_char(c),
        KeyCode::Backspace => buffer.backspace(),
        KeyCode::Delete => buffer.delete(),
        KeyCode::Left => buffer.move_left(),
        KeyCode::Right => buffer.move_right(),
        KeyCode::Home => buffer.move_home(),
        KeyCode::End => buffer.move_end(),
        _ => {}
    }
}

fn render_picker(frame: &mut Frame, area: Rect, picker: &DirectoryPicker) {
    let modal = centered_rect(60, 70, area);
    let title = match picker.target {
        PickerTarget::PdfDirectory => " Select PDF Directory ",
        PickerTarget::SaveDirectory => " Select Save Directory ",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme::border(true));
    let inner = block.inner(modal);

    frame.render_widget(Clear, modal);
    frame.render_widget(block, modal);

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(inner);

    let current = picker.current().display().to_string();
    let width = rows[0].width as usize;
    frame.render_widget(
        Paragraph::new(Span::styled(
            Validator::truncate_text(&current, width),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        rows[0],
    );

    if let Some(error) = picker.error() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                error.to_string(),
                Style::default().fg(theme::ERROR),
            )),
            rows[1],
        );
    } else {
        let items: Vec<ListItem> = picker
            .entries()
            .iter()
            .map(|name| ListItem::new(format!("{}/", name)))
            .collect();
        let mut state = ListState::default().with_selected(Some(picker.selected()));
        let list = List::new(items).highlight_style(theme::button(true));
        frame.render_stateful_widget(list, rows[1], &mut state);
    }

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Enter", theme::hint()),
            Span::raw(":open "),
            Span::styled("Backspace", theme::hint()),
            Span::raw(":up "),
            Span::styled("s", theme::hint()),
            Span::raw(":select "),
            Span::styled("Esc", theme::hint()),
            Span::raw(":cancel"),
        ])),
        rows[2],
    );
}

fn render_notification(frame: &mut Frame, area: Rect, notification: &Notification) {
    let modal = centered_rect(50, 30, area);
    let (icon, color) = theme::notification(notification.level());
    let block = Block::default()
        .title(format!(" {} {} ", icon, notification.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(Clear, modal);
    frame.render_widget(
        Paragraph::new(vec![
            Line::raw(""),
            Line::raw(notification.message.clone()),
            Line::raw(""),
            Line::from(Span::styled("[ OK ]", theme::button(true))),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block),
        modal,
    );
}

/// Splits render segments into terminal lines, one per newline.
pub fn segments_to_lines(segments: &[StyledSegment]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();

    for segment in segments {
        let style = theme::segment(segment.style);
        let mut pieces = segment.text.split('\n').peekable();
        while let Some(piece) = pieces.next() {
            if !piece.is_empty() {
                spans.push(Span::styled(piece.to_string(), style));
            }
            if pieces.peek().is_some() {
                lines.push(Line::from(std::mem::take(&mut spans)));
            }
        }
    }

    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
