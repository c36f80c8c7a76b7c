//! Ratatui front-end: the add form, the action buttons, and the people table,
//! driven by a Crossterm event loop.

mod app;
mod forms;
mod helpers;
mod terminal;

pub use app::{App, Focus};
pub use forms::{PersonField, PersonForm};
pub use terminal::run_app;
