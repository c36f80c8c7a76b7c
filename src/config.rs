use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".person-roster";
/// Diagnostic log written inside the data directory.
const LOG_FILE_NAME: &str = "person-roster.log";
/// How long the event loop waits for input before redrawing.
const TICK_RATE: Duration = Duration::from_millis(250);

/// Runtime settings. The app keeps nothing on disk except its log, so this is
/// mostly about where that log goes.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_file: String,
    pub tick_rate: Duration,
}

impl Config {
    /// Resolve the data directory inside the user's home.
    pub fn load() -> Result<Self> {
        let base_dirs =
            BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
        Ok(Self::with_data_dir(base_dirs.home_dir().join(DATA_DIR_NAME)))
    }

    /// Build a config rooted at an explicit directory with the default log
    /// name and tick rate.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            log_file: LOG_FILE_NAME.to_string(),
            tick_rate: TICK_RATE,
        }
    }

    /// Absolute path of the diagnostic log.
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(&self.log_file)
    }
}
