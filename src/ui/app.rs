//! Application state for the roster screen and its rendering. `App` owns the
//! rows shown in the table, the add form, and the multi-row selection. Every
//! action runs synchronously on the event thread and reports its outcome in
//! the footer, so a failed add or delete never leaves half-applied state.

use std::collections::BTreeSet;

use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;
use tracing::{debug, info, warn};

use crate::error::RosterError;
use crate::models::{IdSequence, Person};
use crate::seed::{initial_people, COLUMNS};

use super::forms::{PersonField, PersonForm};
use super::helpers::{button_span, remove_positions, tooltip_lines, Action};

/// Window title carried over from the desktop version of the tool.
const TITLE: &str = "Adding/Deleting Rows in a TableView";
/// Rows reserved for the form: one per field.
const FORM_HEIGHT: u16 = 3;
/// Actions listed with their tooltips in the footer, one per line.
const FOOTER_ACTIONS: [Action; 3] = [Action::Add, Action::Restore, Action::DeleteSelected];
/// Footer space: top border, status line, key hints, then one tooltip per
/// action. Tooltips get their own lines so none is cut off on an 80-column
/// terminal.
const FOOTER_HEIGHT: u16 = 3 + FOOTER_ACTIONS.len() as u16;
/// Width of the label column in front of each form input.
const LABEL_WIDTH: u16 = 12;

/// Which part of the screen receives typed keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Focus {
    Form,
    Table,
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Application state: the add form, the rows shown in the table, and the
/// current multi-row selection.
pub struct App {
    ids: IdSequence,
    rows: Vec<Person>,
    form: PersonForm,
    selection: BTreeSet<usize>,
    cursor: usize,
    focus: Focus,
    status: Option<StatusMessage>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Start with a fresh id sequence and the seed rows.
    pub fn new() -> Self {
        let mut ids = IdSequence::new();
        let rows = initial_people(&mut ids);
        info!(rows = rows.len(), "loaded seed rows");
        Self {
            ids,
            rows,
            form: PersonForm::default(),
            selection: BTreeSet::new(),
            cursor: 0,
            focus: Focus::Form,
            status: None,
        }
    }

    /// Rows currently shown in the table, in display order.
    pub fn rows(&self) -> &[Person] {
        &self.rows
    }

    /// The add form as the user has typed it so far.
    pub fn form(&self) -> &PersonForm {
        &self.form
    }

    /// Mutable access to the add form, for filling it without key events.
    pub fn form_mut(&mut self) -> &mut PersonForm {
        &mut self.form
    }

    /// The id allocator shared by seed rows and added people. Its
    /// `last_issued` value only ever grows.
    pub fn ids(&self) -> &IdSequence {
        &self.ids
    }

    /// Whether typed keys go to the form or to the table.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Row the keyboard cursor points at. Always 0 when the table is empty.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text of the footer message left by the last action, if any.
    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.text.as_str())
    }

    /// Selected row positions in ascending order.
    pub fn selected_positions(&self) -> Vec<usize> {
        self.selection.iter().copied().collect()
    }

    /// Build a person from the form and append it. On a validation error
    /// nothing changes, the form included.
    pub fn add_person(&mut self) -> Result<Person, RosterError> {
        self.form.check_names()?;
        let birth_date = self.form.parse_birth_date()?;

        let person = Person::new(
            &mut self.ids,
            self.form.first_name.clone(),
            self.form.last_name.clone(),
            birth_date,
        );
        self.rows.push(person.clone());
        self.clear_fields();
        info!(id = person.id(), name = %person, "added person");
        Ok(person)
    }

    /// Drop every selected row and keep the rest in order. Returns how many
    /// rows went away.
    pub fn delete_selected_rows(&mut self) -> Result<usize, RosterError> {
        if self.selection.is_empty() {
            return Err(RosterError::EmptySelection);
        }

        let removed = remove_positions(&mut self.rows, &self.selection);
        debug!(positions = ?self.selection, removed, "deleted selected rows");
        self.selection.clear();
        self.clamp_cursor();
        Ok(removed)
    }

    /// Throw away the current rows and reload the seed set. The reloaded rows
    /// get new ids.
    pub fn restore_rows(&mut self) {
        self.rows = initial_people(&mut self.ids);
        self.selection.clear();
        self.cursor = 0;
        info!(
            rows = self.rows.len(),
            last_id = self.ids.last_issued(),
            "restored rows"
        );
    }

    /// Empty all three form inputs.
    pub fn clear_fields(&mut self) {
        self.form.clear();
    }

    /// Flip the selection state of one row. Positions past the end are ignored.
    pub fn toggle_selection(&mut self, pos: usize) {
        if pos >= self.rows.len() {
            return;
        }
        if !self.selection.remove(&pos) {
            self.selection.insert(pos);
        }
    }

    /// Add a row to the selection.
    pub fn select(&mut self, pos: usize) {
        if pos < self.rows.len() {
            self.selection.insert(pos);
        }
    }

    /// Select every row currently in the table.
    pub fn select_all(&mut self) {
        self.selection = (0..self.rows.len()).collect();
    }

    /// Deselect all rows. The cursor does not move.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Move the cursor by `offset` rows, stopping at the first and last row.
    pub fn move_cursor(&mut self, offset: isize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() as isize - 1;
        self.cursor = (self.cursor as isize + offset).clamp(0, last) as usize;
    }

    /// Send typed keys to the form or the table.
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    /// Handle a plain key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match self.focus {
            Focus::Form => {
                self.handle_form_key(code);
                false
            }
            Focus::Table => self.handle_table_key(code),
        }
    }

    /// Handle a key pressed together with Ctrl. These work from any focus.
    pub fn handle_ctrl_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('c') => return true,
            KeyCode::Char('r') => self.run_action(Action::Restore),
            KeyCode::Char('d') => self.run_action(Action::DeleteSelected),
            _ => {}
        }
        false
    }

    fn handle_form_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.run_action(Action::Add),
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_previous(),
            KeyCode::Esc => self.focus = Focus::Table,
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(ch) => {
                self.form.push_char(ch);
            }
            _ => {}
        }
    }

    fn handle_table_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Esc => {
                if self.selection.is_empty() {
                    return true;
                }
                self.clear_selection();
            }
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_previous(),
            KeyCode::Up => self.move_cursor(-1),
            KeyCode::Down => self.move_cursor(1),
            KeyCode::PageUp => self.move_cursor(-5),
            KeyCode::PageDown => self.move_cursor(5),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.rows.len().saturating_sub(1),
            KeyCode::Char(' ') => self.toggle_selection(self.cursor),
            KeyCode::Char('a') => self.select_all(),
            KeyCode::Char('d') | KeyCode::Delete => self.run_action(Action::DeleteSelected),
            KeyCode::Char('r') => self.run_action(Action::Restore),
            _ => {}
        }
        false
    }

    /// Run an action and turn its outcome into a footer message.
    fn run_action(&mut self, action: Action) {
        let outcome = match action {
            Action::Add => self.add_person().map(|person| format!("Added {person}.")),
            Action::DeleteSelected => self.delete_selected_rows().map(|removed| {
                if removed == 1 {
                    "Deleted 1 row.".to_string()
                } else {
                    format!("Deleted {removed} rows.")
                }
            }),
            Action::Restore => {
                self.restore_rows();
                Ok(format!("Restored {} rows.", self.rows.len()))
            }
        };

        match outcome {
            Ok(message) => self.set_status(message, StatusKind::Info),
            Err(err) => {
                warn!(action = action.label(), %err, "action rejected");
                self.set_status(err.to_string(), StatusKind::Error);
            }
        }
    }

    fn focus_next(&mut self) {
        match (self.focus, self.form.active) {
            (Focus::Table, _) => {
                self.focus = Focus::Form;
                self.form.focus(PersonField::FirstName);
            }
            (Focus::Form, PersonField::FirstName) => self.form.focus(PersonField::LastName),
            (Focus::Form, PersonField::LastName) => self.form.focus(PersonField::BirthDate),
            (Focus::Form, PersonField::BirthDate) => self.focus = Focus::Table,
        }
    }

    fn focus_previous(&mut self) {
        match (self.focus, self.form.active) {
            (Focus::Table, _) => {
                self.focus = Focus::Form;
                self.form.focus(PersonField::BirthDate);
            }
            (Focus::Form, PersonField::FirstName) => self.focus = Focus::Table,
            (Focus::Form, PersonField::LastName) => self.form.focus(PersonField::FirstName),
            (Focus::Form, PersonField::BirthDate) => self.form.focus(PersonField::LastName),
        }
    }

    fn clamp_cursor(&mut self) {
        if self.cursor >= self.rows.len() {
            self.cursor = self.rows.len().saturating_sub(1);
        }
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    pub fn draw(&self, frame: &mut Frame) {
        let outer = Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Blue));
        let area = outer.inner(frame.area());
        frame.render_widget(outer, frame.area());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FORM_HEIGHT),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_form(frame, chunks[0]);
        self.draw_buttons(frame, chunks[1]);
        self.draw_table(frame, chunks[2]);
        self.draw_footer(frame, chunks[3]);
    }

    fn draw_form(&self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(10)])
            .split(area);

        let in_form = self.focus == Focus::Form;
        let lines: Vec<Line> = PersonField::ALL
            .iter()
            .map(|&field| self.form.build_line(field, in_form))
            .collect();
        frame.render_widget(Paragraph::new(lines), columns[0]);
        frame.render_widget(
            Paragraph::new(Line::from(button_span(Action::Add, in_form))),
            columns[1],
        );

        if in_form {
            let row = PersonField::ALL
                .iter()
                .position(|&field| field == self.form.active)
                .unwrap_or(0) as u16;
            let typed = self.form.value_len(self.form.active) as u16;
            let cursor_x = columns[0].x + LABEL_WIDTH + typed;
            frame.set_cursor_position((cursor_x, columns[0].y + row));
        }
    }

    fn draw_buttons(&self, frame: &mut Frame, area: Rect) {
        let in_table = self.focus == Focus::Table;
        let line = Line::from(vec![
            button_span(Action::Restore, false),
            Span::raw(" "),
            button_span(Action::DeleteSelected, in_table && !self.selection.is_empty()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn draw_table(&self, frame: &mut Frame, area: Rect) {
        let header = Row::new(
            std::iter::once(Cell::from(""))
                .chain(COLUMNS.iter().map(|column| Cell::from(column.label))),
        )
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows = self.rows.iter().enumerate().map(|(pos, person)| {
            let selected = self.selection.contains(&pos);
            let marker = if selected { "*" } else { " " };
            let cells = std::iter::once(Cell::from(marker))
                .chain(COLUMNS.iter().map(|column| Cell::from((column.value)(person))));
            let style = if selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(cells).style(style)
        });

        let widths = std::iter::once(Constraint::Length(1))
            .chain(COLUMNS.iter().map(|column| Constraint::Length(column.width)));

        let border_style = if self.focus == Focus::Table {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let title = format!(
            "People ({} rows, {} selected)",
            self.rows.len(),
            self.selection.len()
        );
        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        let mut state = TableState::default();
        if !self.rows.is_empty() {
            state.select(Some(self.cursor));
        }
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let mut lines = vec![status_line, self.footer_instructions()];
        lines.extend(tooltip_lines(&FOOTER_ACTIONS));
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match self.focus {
            Focus::Form => Line::from(vec![
                Span::styled("[Tab]", key_style),
                Span::raw(" Next field   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Table   "),
                Span::styled("[Ctrl+C]", key_style),
                Span::raw(" Quit"),
            ]),
            Focus::Table => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Navigate   "),
                Span::styled("[Space]", key_style),
                Span::raw(" Toggle   "),
                Span::styled("[a]", key_style),
                Span::raw(" Select all   "),
                Span::styled("[Tab]", key_style),
                Span::raw(" Form   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }
}
