//! Standard locations for siggen configuration files

use std::path::PathBuf;

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "siggen";

/// Get the siggen config directory
///
/// Returns: `~/.config/siggen` (platform equivalent elsewhere)
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join(APP_DIR_NAME)
}

/// Get the path of a named config file
///
/// Returns: `~/.config/siggen/{filename}`
pub fn default_config_path(filename: &str) -> PathBuf {
    config_dir().join(filename)
}
