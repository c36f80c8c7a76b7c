use std::collections::BTreeSet;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// The three user actions, drawn as buttons and bound to shortcuts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Action {
    Add,
    Restore,
    DeleteSelected,
}

impl Action {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Action::Add => "Add",
            Action::Restore => "Restore Rows",
            Action::DeleteSelected => "Delete Selected Rows",
        }
    }

    pub(crate) fn shortcut(self) -> &'static str {
        match self {
            Action::Add => "Enter",
            Action::Restore => "Ctrl+R",
            Action::DeleteSelected => "Ctrl+D",
        }
    }

    /// Button hover text. Terminals have no hover, so the footer lists it.
    pub(crate) fn tooltip(self) -> &'static str {
        match self {
            Action::Add => "Add a new person",
            Action::Restore => "Restore deleted rows",
            Action::DeleteSelected => "Delete selected rows",
        }
    }
}

/// Render an action as `[ Label ]`, brighter when it is the one the current
/// focus would trigger.
pub(crate) fn button_span(action: Action, highlighted: bool) -> Span<'static> {
    let style = if highlighted {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    Span::styled(format!("[ {} ]", action.label()), style)
}

/// One `[Shortcut] tooltip` line per action, so a narrow footer never cuts a
/// tooltip in half.
pub(crate) fn tooltip_lines(actions: &[Action]) -> Vec<Line<'static>> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    actions
        .iter()
        .map(|action| {
            Line::from(vec![
                Span::styled(format!("[{}]", action.shortcut()), key_style),
                Span::raw(format!(" {}", action.tooltip())),
            ])
        })
        .collect()
}

/// Remove the given positions from `rows`, highest first so earlier removals
/// never shift a position still waiting to be removed. Out-of-range positions
/// are skipped. Returns how many rows were removed.
pub(crate) fn remove_positions<T>(rows: &mut Vec<T>, positions: &BTreeSet<usize>) -> usize {
    let mut removed = 0;
    for &pos in positions.iter().rev() {
        if pos < rows.len() {
            rows.remove(pos);
            removed += 1;
        }
    }
    removed
}
