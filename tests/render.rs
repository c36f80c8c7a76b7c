mod common;

use person_roster::{App, Focus};

use common::{fill_form, render};

#[test]
fn renders_columns_seed_rows_and_buttons() {
    let app = App::new();
    let screen = render(&app, 100, 30);

    assert!(screen.contains("Adding/Deleting Rows in a TableView"));
    for header in ["Id", "First Name", "Last Name", "Birth Date"] {
        assert!(screen.contains(header), "missing header {header}");
    }
    assert!(screen.contains("Ashwin"));
    assert!(screen.contains("2012-10-11"));
    assert!(screen.contains("Babalu"));
    assert!(screen.contains("[ Add ]"));
    assert!(screen.contains("[ Restore Rows ]"));
    assert!(screen.contains("[ Delete Selected Rows ]"));
}

#[test]
fn footer_shows_tooltips() {
    let app = App::new();
    let screen = render(&app, 100, 30);

    assert!(screen.contains("Add a new person"));
    assert!(screen.contains("Restore deleted rows"));
    assert!(screen.contains("Delete selected rows"));
}

#[test]
fn standard_terminal_shows_every_tooltip() {
    let mut app = App::new();
    for focus in [Focus::Form, Focus::Table] {
        app.set_focus(focus);
        let screen = render(&app, 80, 24);

        assert!(screen.contains("[Enter] Add a new person"), "{screen}");
        assert!(screen.contains("[Ctrl+R] Restore deleted rows"), "{screen}");
        assert!(screen.contains("[Ctrl+D] Delete selected rows"), "{screen}");
        assert!(screen.contains("Babalu"), "{screen}");
    }
}

#[test]
fn shows_validation_message_and_selection_count() {
    let mut app = App::new();
    fill_form(&mut app, "", "Smith", "");
    app.handle_key(crossterm::event::KeyCode::Enter);

    app.set_focus(Focus::Table);
    app.select(0);
    app.select(2);

    let screen = render(&app, 100, 30);
    assert!(screen.contains("Please fill in both First Name and Last Name."));
    assert!(screen.contains("People (5 rows, 2 selected)"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let app = App::new();
    let _ = render(&app, 10, 5);
}
