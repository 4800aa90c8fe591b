//! Store configuration: environment first, command-line flags on top.

use std::path::PathBuf;

use stockroom_inventory::{DEFAULT_LOW_STOCK_THRESHOLD, DEFAULT_PATH};

pub const FILE_ENV: &str = "STOCKROOM_FILE";
pub const THRESHOLD_ENV: &str = "STOCKROOM_LOW_THRESHOLD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Inventory file loaded at start and saved after mutations.
    pub path: PathBuf,
    /// Cut-off for `low` when no `--threshold` is given.
    pub low_stock_threshold: i64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unset or blank variables keep
    /// the defaults; an unparsable threshold is logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(FILE_ENV).filter(|p| !p.trim().is_empty()) {
            config.path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(THRESHOLD_ENV).filter(|t| !t.trim().is_empty()) {
            match raw.trim().parse::<i64>() {
                Ok(threshold) => config.low_stock_threshold = threshold,
                Err(_) => tracing::warn!(
                    "{THRESHOLD_ENV}={raw:?} is not an integer; using default {}",
                    config.low_stock_threshold
                ),
            }
        }

        config
    }

    /// Apply a `--file` flag, if one was given.
    pub fn with_file(mut self, file: Option<PathBuf>) -> Self {
        if let Some(file) = file {
            self.path = file;
        }
        self
    }
}
