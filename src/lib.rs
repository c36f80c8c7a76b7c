//! Core library surface for the Person Roster TUI.
//!
//! The binary only wires configuration and logging together before handing
//! control to [`run_app`]; everything else lives here so tests can drive the
//! same state the terminal does.
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod seed;
pub mod ui;

pub use config::Config;
pub use error::RosterError;
pub use logging::init_logging;

/// The record type and the id allocator it draws from.
pub use models::{IdSequence, Person};

/// Seed rows and column table.
pub use seed::{initial_people, Column, COLUMNS};

/// The interactive application entry point and state container.
pub use ui::{run_app, App, Focus};
