//! Path resolution for the config file and the data directory.

use std::path::PathBuf;

use crate::config::{default_config_path, default_data_dir, StudiobookConfig};

/// Resolve the config file path, checking STUDIOBOOK_CONFIG first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("STUDIOBOOK_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the data directory.
///
/// `--data-dir` (or STUDIOBOOK_DATA_DIR) wins, then the config file, then
/// the XDG data directory.
pub fn resolve_data_dir(
    flag: Option<&str>,
    config: Option<&StudiobookConfig>,
) -> anyhow::Result<PathBuf> {
    if let Some(dir) = flag.filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    if let Some(config) = config {
        if !config.store.data_dir.trim().is_empty() {
            return Ok(PathBuf::from(&config.store.data_dir));
        }
    }
    default_data_dir()
}
