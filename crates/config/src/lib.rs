//! Configuration management for fast-kanban.
//!
//! This crate handles loading, validating, and persisting configuration
//! from multiple sources (files, environment variables, defaults).
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`seed`]: The starting board, with short and full entry formats
//! - [`drag`]: Pointer activation distance
//! - [`logging`]: Log level and output format
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Configuration is loaded from multiple sources with the following priority
//! (highest to lowest):
//!
//! 1. Environment variable `FAST_KANBAN_LOG` (log filter)
//! 2. A path given on the command line
//! 3. Local config (`./fast-kanban.json5` or `./fast-kanban.json`)
//! 4. User config (`~/.config/fast-kanban/config.json5` or `~/.config/fast-kanban/config.json`)
//! 5. Built-in defaults
//!
//! # File Format
//!
//! ```json5
//! {
//!   board: {
//!     // Short format: "id", or full format: { id: "..." }
//!     columns: ["todo", "doing", { id: "done" }],
//!     // Short format: "id@column", or full format
//!     cards: ["1@todo", { id: "2", column_id: "doing" }],
//!   },
//!   drag: { activation_distance: 5 },
//!   log: { level: "info", format: "compact" },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use fast_kanban_config::Config;
//!
//! # async fn example() -> fast_kanban_config::Result<()> {
//! let config = Config::load(None).await?;
//! let board = config.seed_board()?;
//! println!("{} columns", board.columns().len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod drag;
pub mod error;
pub mod logging;
pub mod persistence;
pub mod seed;

// Re-export primary types at crate root for convenience
pub use config::{Config, LOG_ENV_VAR};
pub use drag::DragConfig;
pub use error::{ConfigError, Result};
pub use logging::{LogConfig, LogFormat};
pub use seed::{BoardSeed, SeedCard, SeedColumn};
