//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for fast-kanban.

use std::path::Path;

use fast_kanban_protocol::Board;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::drag::DragConfig;
use crate::error::Result;
use crate::logging::LogConfig;
use crate::persistence::{find_config_file, read_config_file, write_config_file};
use crate::seed::BoardSeed;

/// Environment variable that overrides [`LogConfig::level`].
pub const LOG_ENV_VAR: &str = "FAST_KANBAN_LOG";

/// The main configuration struct for fast-kanban.
///
/// # Examples
///
/// ```
/// use fast_kanban_config::{Config, DragConfig};
///
/// let config = Config::default();
/// assert_eq!(config.board.columns.len(), 4);
///
/// let config = Config {
///     drag: DragConfig::with_activation_distance(0.0),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// The board a session starts from.
    #[serde(default)]
    pub board: BoardSeed,

    /// Pointer gesture settings.
    #[serde(default)]
    pub drag: DragConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Creates a new configuration with the stock board.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the highest-priority source available.
    ///
    /// Sources, highest priority first:
    ///
    /// 1. The `FAST_KANBAN_LOG` environment variable (log filter only)
    /// 2. `explicit`, when given
    /// 3. Local: `./fast-kanban.json5` or `./fast-kanban.json`
    /// 4. User: `~/.config/fast-kanban/config.json5` or `~/.config/fast-kanban/config.json`
    /// 5. Built-in defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is given or found but cannot
    /// be read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fast_kanban_config::Config;
    ///
    /// # async fn example() -> fast_kanban_config::Result<()> {
    /// let config = Config::load(None).await?;
    /// println!("Drags activate after {} units", config.drag.activation_distance);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit.map(Path::to_path_buf).or_else(find_config_file) {
            Some(path) => {
                debug!(path = %path.display(), "loading config file");
                Self::load_from(&path)?
            }
            None => {
                debug!("no config file found, using defaults");
                Self::default()
            }
        };
        config.apply_env_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Loads configuration from a specific file.
    ///
    /// Environment overrides are not applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Applies environment overrides, reading variables through `lookup`.
    ///
    /// An unset or blank `FAST_KANBAN_LOG` leaves the configured level alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use fast_kanban_config::Config;
    ///
    /// let mut config = Config::default();
    /// config.apply_env_overrides(|name| {
    ///     (name == "FAST_KANBAN_LOG").then(|| "trace".to_string())
    /// });
    /// assert_eq!(config.log.level, "trace");
    /// ```
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup(LOG_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            self.log.level = level;
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the drag activation distance is out of range or
    /// the seed does not form a valid board.
    ///
    /// # Examples
    ///
    /// ```
    /// use fast_kanban_config::{Config, DragConfig};
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.drag = DragConfig::with_activation_distance(-1.0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.drag.validate()?;
        self.board.to_board()?;
        Ok(())
    }

    /// Builds the board described by the seed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSeed`](crate::ConfigError::InvalidSeed)
    /// if the seed violates a board invariant.
    pub fn seed_board(&self) -> Result<Board> {
        self.board.to_board()
    }
}

#[cfg(test)]
mod tests {
    use fast_kanban_protocol::seed::default_board;
    use fast_kanban_protocol::{Card, Column};
    use tempfile::TempDir;

    use super::*;
    use crate::error::ConfigError;
    use crate::logging::LogFormat;
    use crate::seed::{SeedCard, SeedColumn};

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.seed_board().unwrap(), default_board());
        assert_eq!(config.drag, DragConfig::default());
        assert_eq!(config.log, LogConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn new_config() {
        assert_eq!(Config::new(), Config::default());
    }

    #[test]
    fn validate_invalid_drag() {
        let config = Config {
            drag: DragConfig::with_activation_distance(f64::NAN),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidActivationDistance { .. })
        ));
    }

    #[test]
    fn validate_invalid_seed() {
        let config = Config {
            board: BoardSeed {
                columns: vec![SeedColumn(Column::new("a"))],
                cards: vec![SeedCard(Card::new("1", "a")), SeedCard(Card::new("1", "a"))],
            },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSeed(_))));
        assert!(config.seed_board().is_err());
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn deserialize_partial() {
        let json = r#"{"drag": {"activation_distance": 8}, "log": {"level": "debug"}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.drag.activation_distance, 8.0);
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.format, LogFormat::Compact);
        assert_eq!(config.board, BoardSeed::default());
    }

    #[test]
    fn env_override_replaces_level() {
        let mut config = Config::default();
        config.apply_env_overrides(|name| {
            assert_eq!(name, LOG_ENV_VAR);
            Some("fast_kanban_engine=trace".to_string())
        });
        assert_eq!(config.log.level, "fast_kanban_engine=trace");
    }

    #[test]
    fn blank_env_override_is_ignored() {
        let mut config = Config::default();
        config.apply_env_overrides(|_| Some("  ".to_string()));
        assert_eq!(config.log.level, "info");

        config.apply_env_overrides(|_| None);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(
            &path,
            r#"
            {
                board: {
                    columns: ["todo", { id: "done" }],
                    cards: ["1@todo", { id: "2", column_id: "done" }],
                },
                drag: { activation_distance: 10.0 },
                log: { level: "warn", format: "json" },
            }
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        let board = config.seed_board().unwrap();
        assert_eq!(board.columns().len(), 2);
        assert_eq!(board.cards()[1], Card::new("2", "done"));
        assert_eq!(config.drag.activation_distance, 10.0);
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn load_from_rejects_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"board": {"columns": [], "cards": ["1@gone"]}}"#).unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidSeed(_))
        ));
    }

    #[test]
    fn save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let original = Config {
            drag: DragConfig::with_activation_distance(2.5),
            log: LogConfig {
                level: "debug".to_string(),
                format: LogFormat::Pretty,
            },
            ..Default::default()
        };

        original.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), original);
    }
}
