// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liftlog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liftlog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! A thin ratatui + crossterm shell around [`WorkoutController`]: key presses become controller
//! calls, and the exercise list is re-derived from the controller after every change.

use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::controller::{ControllerError, WorkoutController};
use crate::model::{ExerciseEntry, ExerciseId};
use crate::ops::{AdjustTarget, Op, WEIGHT_DELTAS};
use crate::query::{format_weight, Comparison, ExerciseRow};
use crate::store::KeyValueStore;

const FOCUS_COLOR: Color = Color::LightGreen;
const DONE_COLOR: Color = Color::DarkGray;
const UP_COLOR: Color = Color::LightGreen;
const DOWN_COLOR: Color = Color::LightRed;
const ERROR_COLOR: Color = Color::LightRed;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const TOAST_TTL: Duration = Duration::from_secs(2);

/// Sends text to the system clipboard and names the mechanism used.
type ClipboardFn = fn(&str) -> io::Result<&'static str>;

/// Runs the interactive UI until the user quits.
pub fn run<S: KeyValueStore>(controller: WorkoutController<S>) -> io::Result<()> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(controller, copy_to_clipboard);

    while !app.should_quit {
        app.expire_toast(Instant::now());
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    Ok(())
}

/// Shows a startup failure until the user quits. Nothing else is possible from this screen.
pub fn run_load_failure(message: &str) -> io::Result<()> {
    let mut terminal = TerminalSession::new()?;
    loop {
        terminal.draw(|frame| draw_load_failure(frame, message))?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press
                && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
            {
                return Ok(());
            }
        }
    }
}

fn draw<S: KeyValueStore>(frame: &mut Frame<'_>, app: &mut App<S>) {
    let area = frame.size();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    let header_area = layout[0];
    let list_area = layout[1];
    let footer_area = layout[2];

    let header = Paragraph::new(header_line(app)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(view_title("Liftlog", app.controller.today().display_label()))
            .border_style(Style::default().fg(FOCUS_COLOR)),
    );
    frame.render_widget(header, header_area);

    let focused_set = app.focused_set();
    let items = app
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let focused_set = focused_set.filter(|_| idx == app.cursor);
            let edit_buffer = app
                .edit
                .as_ref()
                .filter(|_| idx == app.cursor)
                .map(|edit| (edit.set_index, edit.buffer.as_str()));
            ListItem::new(card_text(row, focused_set, edit_buffer))
        })
        .collect::<Vec<_>>();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("─ Exercises "))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("▌");
    let mut state = ListState::default().with_selected((!app.rows.is_empty()).then_some(app.cursor));
    frame.render_stateful_widget(list, list_area, &mut state);

    frame.render_widget(Paragraph::new(footer_line(app)), footer_area);

    if app.show_help {
        render_help(frame, list_area);
    }
}

fn draw_load_failure(frame: &mut Frame<'_>, message: &str) {
    let area = centered_rect(70, 40, frame.size());
    let lines = vec![
        Line::from(Span::styled(
            "Failed to load the exercise catalog.",
            Style::default().fg(ERROR_COLOR).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(message.to_owned()),
        Line::default(),
        Line::from(Span::styled(
            "Fix the catalog file and restart. Press q to quit.",
            Style::default().fg(FOOTER_LABEL_COLOR),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("─ Liftlog ")
                .border_style(Style::default().fg(ERROR_COLOR)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

/// A single set picked for palette adjustments. It belongs to one exercise; other cards
/// adjust all of their sets.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SetFocus {
    exercise_id: ExerciseId,
    set_index: usize,
}

/// In-progress text entry for one set.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SetEdit {
    set_index: usize,
    buffer: String,
}

struct App<S> {
    controller: WorkoutController<S>,
    rows: Vec<ExerciseRow>,
    cursor: usize,
    set_focus: Option<SetFocus>,
    edit: Option<SetEdit>,
    toast: Option<Toast>,
    show_help: bool,
    should_quit: bool,
    clipboard: ClipboardFn,
}

impl<S: KeyValueStore> App<S> {
    fn new(controller: WorkoutController<S>, clipboard: ClipboardFn) -> Self {
        let mut app = Self {
            controller,
            rows: Vec::new(),
            cursor: 0,
            set_focus: None,
            edit: None,
            toast: None,
            show_help: false,
            should_quit: false,
            clipboard,
        };
        app.refresh_rows();
        app
    }

    fn refresh_rows(&mut self) {
        match self.controller.rows() {
            Ok(rows) => self.rows = rows,
            Err(err) => {
                tracing::error!(error = %err, "cannot derive exercise list");
                self.set_toast(format!("Cannot read history: {err}"));
            }
        }
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
        let Some(focus) = self.set_focus.take() else {
            return;
        };
        // Focus on an exercise that is no longer listed is dropped.
        let set_count = self
            .rows
            .iter()
            .find(|row| row.definition.id == focus.exercise_id)
            .map_or(0, |row| row.entry.set_count());
        self.set_focus = set_count.checked_sub(1).map(|last| SetFocus {
            set_index: focus.set_index.min(last),
            ..focus
        });
    }

    fn selected_row(&self) -> Option<&ExerciseRow> {
        self.rows.get(self.cursor)
    }

    /// Focused set of the exercise under the cursor. `None` means adjustments apply to every
    /// set.
    fn focused_set(&self) -> Option<usize> {
        let row = self.selected_row()?;
        self.set_focus
            .as_ref()
            .filter(|focus| focus.exercise_id == row.definition.id)
            .map(|focus| focus.set_index)
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    /// Returns `true` when the app should quit.
    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        if self.show_help {
            match code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Char('q') => return true,
                _ => {}
            }
            return false;
        }

        if self.edit.is_some() {
            self.handle_edit_key(code);
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab | KeyCode::Char(']') => self.cycle_package(1),
            KeyCode::BackTab | KeyCode::Char('[') => self.cycle_package(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Left | KeyCode::Char('h') => self.move_set_focus(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_set_focus(1),
            KeyCode::Esc => self.set_focus = None,
            KeyCode::Char(' ') | KeyCode::Char('x') => self.toggle_selected(),
            KeyCode::Enter | KeyCode::Char('e') => self.begin_edit(),
            KeyCode::Char(digit @ '1'..='6') => {
                let idx = digit as usize - '1' as usize;
                self.adjust_selected(WEIGHT_DELTAS[idx]);
            }
            KeyCode::Char('s') => self.save_now(),
            KeyCode::Char('y') => self.export(),
            _ => {}
        }
        false
    }

    fn handle_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.edit = None,
            KeyCode::Enter => self.commit_edit(),
            KeyCode::Backspace => {
                if let Some(edit) = self.edit.as_mut() {
                    edit.buffer.pop();
                }
            }
            KeyCode::Char(ch) if !ch.is_control() => {
                if let Some(edit) = self.edit.as_mut() {
                    edit.buffer.push(ch);
                }
            }
            _ => {}
        }
    }

    fn move_cursor(&mut self, step: isize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(step).min(last);
        self.clamp_cursor();
    }

    fn move_set_focus(&mut self, step: isize) {
        let Some(row) = self.selected_row() else {
            return;
        };
        if !row.definition.is_weighted() || row.entry.set_count() == 0 {
            return;
        }
        let last = row.entry.set_count() - 1;
        let exercise_id = row.definition.id.clone();
        let set_index = match self.focused_set() {
            None if step < 0 => last,
            None => 0,
            Some(idx) => idx.saturating_add_signed(step).min(last),
        };
        self.set_focus = Some(SetFocus {
            exercise_id,
            set_index,
        });
    }

    fn cycle_package(&mut self, step: isize) {
        let result = self.controller.cycle_package(step);
        if let Err(err) = &result {
            self.set_toast(failure_toast(err));
        }
        if matches!(result, Ok(false)) {
            return;
        }
        // A failed write still leaves the controller on the new package.
        self.cursor = 0;
        self.set_focus = None;
        self.refresh_rows();
    }

    fn toggle_selected(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        let op = Op::ToggleCompleted {
            exercise_id: row.definition.id.clone(),
        };
        self.apply(&op);
    }

    fn adjust_selected(&mut self, delta: f64) {
        let Some(row) = self.selected_row() else {
            return;
        };
        if !row.definition.is_weighted() {
            self.set_toast("Bodyweight exercise: nothing to adjust");
            return;
        }
        let target = match self.focused_set() {
            Some(idx) => AdjustTarget::Set(idx),
            None => AdjustTarget::All,
        };
        let op = Op::AdjustWeight {
            exercise_id: row.definition.id.clone(),
            delta,
            target,
        };
        self.apply(&op);
    }

    fn begin_edit(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        if !row.definition.is_weighted() || row.entry.set_count() == 0 {
            return;
        }
        let exercise_id = row.definition.id.clone();
        let set_index = self.focused_set().unwrap_or(0);
        let buffer = row
            .entry
            .sets()
            .get(set_index)
            .map(|value| format_weight(*value))
            .unwrap_or_default();
        self.set_focus = Some(SetFocus {
            exercise_id,
            set_index,
        });
        self.edit = Some(SetEdit { set_index, buffer });
    }

    fn commit_edit(&mut self) {
        let Some(edit) = self.edit.take() else {
            return;
        };
        let Some(row) = self.selected_row() else {
            return;
        };
        let op = Op::set_weight_from_input(row.definition.id.clone(), edit.set_index, &edit.buffer);
        self.apply(&op);
    }

    fn apply(&mut self, op: &Op) {
        if let Err(err) = self.controller.apply(op) {
            self.set_toast(failure_toast(&err));
        }
        self.refresh_rows();
    }

    fn save_now(&mut self) {
        match self.controller.save_now() {
            Ok(()) => self.set_toast("Saved"),
            Err(err) => self.set_toast(failure_toast(&err)),
        }
    }

    fn export(&mut self) {
        let json = match self.controller.export_json() {
            Ok(json) => json,
            Err(err) => {
                self.set_toast(format!("Export failed: {err}"));
                return;
            }
        };
        match (self.clipboard)(&json) {
            Ok(backend) => self.set_toast(format!("History copied to clipboard ({backend})")),
            Err(err) => {
                tracing::warn!(error = %err, "clipboard unavailable; writing export to log");
                tracing::info!(export = %json, "workout history export");
                self.set_toast("Clipboard unavailable; export written to log");
            }
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|toast| toast.expires_at <= now) {
            self.toast = None;
        }
    }
}

fn failure_toast(err: &ControllerError) -> String {
    let label = match err {
        ControllerError::Save { .. } => "Save failed",
        ControllerError::UnknownPackage { .. } => "Cannot switch package",
        ControllerError::Repo(_) => "Cannot read history",
    };
    format!("{label}: {err}")
}

fn header_line<S: KeyValueStore>(app: &App<S>) -> Line<'static> {
    let active = app.controller.active_package();
    let mut spans = Vec::<Span<'static>>::new();
    for package in app.controller.catalog().package_ids() {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        let style = if package == active {
            Style::default()
                .fg(Color::Black)
                .bg(FOCUS_COLOR)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(FOOTER_LABEL_COLOR)
        };
        spans.push(Span::styled(format!(" {package} "), style));
    }
    Line::from(spans)
}

fn card_text(
    row: &ExerciseRow,
    focused_set: Option<usize>,
    edit_buffer: Option<(usize, &str)>,
) -> Text<'static> {
    let done = row.completed();
    let title_style = if done {
        Style::default().fg(DONE_COLOR).add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![Line::from(vec![
        Span::raw(if done { "◼ " } else { "◻ " }),
        Span::styled(row.definition.name.clone(), title_style),
        Span::styled(
            format!("  {}", row.definition.kind.label()),
            Style::default().fg(FOOTER_LABEL_COLOR),
        ),
    ])];

    if row.definition.is_weighted() {
        lines.push(comparison_line(row));
        lines.push(sets_line(&row.entry, focused_set, edit_buffer));
    } else {
        let hint = if done { "done" } else { "check when done" };
        lines.push(Line::from(Span::styled(
            format!("    {hint}"),
            Style::default().fg(FOOTER_LABEL_COLOR),
        )));
    }
    Text::from(lines)
}

fn comparison_line(row: &ExerciseRow) -> Line<'static> {
    let dim = Style::default().fg(FOOTER_LABEL_COLOR);
    let Some(previous) = row.comparison else {
        return Line::from(Span::styled("    no previous record", dim));
    };
    let color = match previous.comparison {
        Comparison::Up { .. } => UP_COLOR,
        Comparison::Down { .. } => DOWN_COLOR,
        Comparison::Same => FOOTER_LABEL_COLOR,
    };
    Line::from(vec![
        Span::styled(
            format!("    last max {}  ", format_weight(previous.previous_max)),
            dim,
        ),
        Span::styled(
            previous.comparison.label(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

fn sets_line(
    entry: &ExerciseEntry,
    focused_set: Option<usize>,
    edit_buffer: Option<(usize, &str)>,
) -> Line<'static> {
    let mut spans = vec![Span::styled(
        "    sets ".to_owned(),
        Style::default().fg(FOOTER_LABEL_COLOR),
    )];
    for (idx, value) in entry.sets().iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(DONE_COLOR)));
        }
        let editing = edit_buffer.filter(|(set_index, _)| *set_index == idx);
        let (text, style) = match editing {
            Some((_, buffer)) => (
                format!("{buffer}_"),
                Style::default().fg(Color::Black).bg(FOOTER_KEY_COLOR),
            ),
            None if focused_set == Some(idx) => (
                format_weight(*value),
                Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::REVERSED),
            ),
            None => (format_weight(*value), Style::default()),
        };
        spans.push(Span::styled(text, style));
    }
    Line::from(spans)
}

// Layout, footer, and help helpers.
include!("chrome.rs");

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

fn copy_to_clipboard(text: &str) -> io::Result<&'static str> {
    let mut stdout = io::stdout();
    execute!(stdout, Print(osc52_sequence(text)))?;
    Ok("osc52")
}

fn osc52_sequence(text: &str) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}
