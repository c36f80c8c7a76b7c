//! Shared helpers for the integration tests: app setup and rendering into
//! Ratatui's `TestBackend`.
#![allow(dead_code)]

use person_roster::App;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// Point the add form at the given values.
pub fn fill_form(app: &mut App, first: &str, last: &str, birth_date: &str) {
    let form = app.form_mut();
    form.first_name = first.to_string();
    form.last_name = last.to_string();
    form.birth_date = birth_date.to_string();
}

/// Render one frame of the app and return the buffer as text.
pub fn render(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("Failed to create test terminal");
    terminal
        .draw(|frame| app.draw(frame))
        .expect("Failed to draw frame");
    buffer_to_string(terminal.backend().buffer())
}

/// Convert a buffer to a string, one line per row.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut output = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                output.push_str(cell.symbol());
            }
        }
        output.push('\n');
    }

    output
}
