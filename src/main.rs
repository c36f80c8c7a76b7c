//! Binary entry point: resolve configuration, route logs to a file, and run
//! the Ratatui event loop on the seed rows until the user quits.
use person_roster::{init_logging, run_app, App, Config};

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    init_logging(&config)?;

    let mut app = App::new();
    run_app(&mut app, config.tick_rate)
}
