// PRDatabase — Runtime configuration
//
// Where the vault lives on disk and how long the startup splash lasts.

use std::path::PathBuf;
use std::time::Duration;

/// File name of the SQLite database inside the data directory.
pub const DB_FILE_NAME: &str = "prdatabase.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub splash_delay: Duration,
}

impl Config {
    /// Splash delay of the interactive front end.
    pub const SPLASH_DELAY_MS: u64 = 2200;

    /// Build a config, falling back to the platform data directory.
    pub fn new(data_dir: Option<PathBuf>, splash_ms: u64) -> Self {
        Self {
            data_dir: data_dir.unwrap_or_else(Self::default_data_dir),
            splash_delay: Duration::from_millis(splash_ms),
        }
    }

    /// `<platform data dir>/prdatabase`, or `./prdatabase` when the platform
    /// has none.
    pub fn default_data_dir() -> PathBuf {
        let base = dirs_next::data_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("prdatabase")
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, Self::SPLASH_DELAY_MS)
    }
}
