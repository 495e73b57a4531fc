//! Platform-specific directory utilities.

use std::path::PathBuf;

const APP_NAME: &str = "blockbuster";

/// Platform data directory for saved profiles.
///
/// - macOS: `~/Library/Application Support/blockbuster`
/// - Linux: `~/.local/share/blockbuster` (or `$XDG_DATA_HOME/blockbuster`)
/// - Windows: `%APPDATA%\blockbuster`
/// - Fallback: `./save_data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

/// Platform cache directory for log files.
///
/// Falls back to `/tmp/blockbuster/logs`.
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp").join(APP_NAME))
        .join("logs")
}
