//! fast-kanban - replay drag gestures against a kanban board.
//!
//! Loads configuration, seeds the board, optionally replays a script of drag
//! events, and prints the resulting layout to stdout.

mod cli;
mod logging;
mod replay;

use anyhow::Context;
use clap::Parser;
use fast_kanban_config::Config;
use fast_kanban_engine::KanbanEngine;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())
        .await
        .context("failed to load configuration")?;
    logging::init(&config.log, cli.verbose)?;

    let board = config.seed_board().context("failed to seed board")?;
    let mut engine = KanbanEngine::new(board);

    if let Some(path) = &cli.script {
        let events = replay::read_script(path).await?;
        replay::replay(&mut engine, &events);
    }

    let board = engine.into_board();
    if cli.json {
        println!("{}", board.to_json_pretty().context("failed to serialize board")?);
    } else {
        println!("{}", replay::render_columns(&board));
    }

    Ok(())
}
