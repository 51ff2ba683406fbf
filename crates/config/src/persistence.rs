//! Configuration file reading and writing.
//!
//! This module handles loading configuration from files and saving
//! configuration back to files.
//!
//! # File Formats
//!
//! The module supports both JSON5 and JSON formats:
//!
//! - JSON5 (`.json5`): Preferred format with comments and trailing commas
//! - JSON (`.json`): Standard JSON format
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Local: `./fast-kanban.json5` or `./fast-kanban.json`
//! 2. User: `~/.config/fast-kanban/config.json5` or `~/.config/fast-kanban/config.json`

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Configuration file names to search for, in priority order.
const CONFIG_FILE_NAMES: &[&str] = &["fast-kanban.json5", "fast-kanban.json"];

/// User config directory name.
const USER_CONFIG_DIR: &str = "fast-kanban";

/// User config file names to search for, in priority order.
const USER_CONFIG_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the configuration file path.
///
/// Searches in the following order:
///
/// 1. Local directory: `./fast-kanban.json5`, `./fast-kanban.json`
/// 2. User config directory: `~/.config/fast-kanban/config.json5`, `~/.config/fast-kanban/config.json`
///
/// # Returns
///
/// Returns `Some(path)` if a config file is found, `None` otherwise.
///
/// # Examples
///
/// ```no_run
/// use fast_kanban_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    find_config_file_in(Path::new("."), dirs::config_dir().as_deref())
}

/// Finds the configuration file, searching `local_dir` and then the
/// `fast-kanban` directory under `user_config_root`.
#[must_use]
pub fn find_config_file_in(local_dir: &Path, user_config_root: Option<&Path>) -> Option<PathBuf> {
    let local = CONFIG_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_config_root
        .map(|root| root.join(USER_CONFIG_DIR))
        .into_iter()
        .flat_map(|dir| USER_CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)));

    local.chain(user).find(|path| path.exists())
}

/// Reads and parses a configuration file.
///
/// Supports both JSON5 and JSON formats.
///
/// # Arguments
///
/// * `path` - The path to the configuration file
///
/// # Type Parameters
///
/// * `T` - The type to deserialize into (must implement `serde::Deserialize`)
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file content cannot be parsed
///
/// # Examples
///
/// ```no_run
/// use fast_kanban_config::persistence::read_config_file;
/// use fast_kanban_config::Config;
///
/// # fn main() -> fast_kanban_config::Result<()> {
/// let config: Config = read_config_file("fast-kanban.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    // JSON5 parser handles both JSON5 and JSON
    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes a configuration to a file.
///
/// The configuration is written as pretty-printed JSON (not JSON5, as
/// serde_json5 doesn't support serialization to JSON5 format).
///
/// # Arguments
///
/// * `path` - The path to write to
/// * `config` - The configuration to write
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be written
/// - The configuration cannot be serialized
///
/// # Examples
///
/// ```no_run
/// use fast_kanban_config::persistence::write_config_file;
/// use fast_kanban_config::Config;
///
/// # fn main() -> fast_kanban_config::Result<()> {
/// let config = Config::default();
/// write_config_file("fast-kanban.json", &config)?;
/// # Ok(())
/// # }
/// ```
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, config: &T) -> Result<()> {
    let path = path.as_ref();

    // Create parent directories if needed
    if let Some(parent) = path.parent().filter(|p| !p.exists()) {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    // Serialize to pretty JSON
    let content = serde_json::to_string_pretty(config)?;

    std::fs::write(path, content).map_err(|e| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}
