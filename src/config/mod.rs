use std::path::PathBuf;

use dirs::home_dir;

/// Set to any value to make the shell read answers from stdin without line editing or colours.
pub const SCRIPT_MODE_ENV: &str = "FINANCE_TRACKER_CLI_SCRIPT";

const DEFAULT_SNAPSHOT_FILE: &str = "finance_tracker.json";
const DEFAULT_CURRENCY_SYMBOL: &str = "€";

/// Presentation settings for the interactive shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub currency_symbol: String,
    /// Snapshot file used when an export/import path prompt is left blank.
    pub default_snapshot_path: PathBuf,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.into(),
            default_snapshot_path: home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(DEFAULT_SNAPSHOT_FILE),
        }
    }
}

impl ShellConfig {
    pub fn with_snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_snapshot_path = path.into();
        self
    }

    /// Resolves a user-entered path, falling back to the default snapshot file.
    pub fn snapshot_path(&self, raw: &str) -> PathBuf {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.default_snapshot_path.clone()
        } else {
            PathBuf::from(trimmed)
        }
    }
}
