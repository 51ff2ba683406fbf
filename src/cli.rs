//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(
    name = "fast-kanban",
    version,
    about = "Replay drag gestures against a kanban board",
    long_about = "Seed a kanban board from configuration, replay a script of drag \
                  events against it, and print the resulting layout."
)]
pub struct Cli {
    /// Read configuration from this file instead of searching for one.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// JSON5 or JSON file holding an array of drag events to replay.
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Print the final board as JSON instead of one line per column.
    #[arg(long)]
    pub json: bool,

    /// Raise log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["fast-kanban"]);
        assert!(cli.config.is_none());
        assert!(cli.script.is_none());
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn all_flags() {
        let cli = Cli::parse_from([
            "fast-kanban",
            "--config",
            "board.json5",
            "--script",
            "moves.json5",
            "--json",
            "-vv",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("board.json5")));
        assert_eq!(cli.script, Some(PathBuf::from("moves.json5")));
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }
}
