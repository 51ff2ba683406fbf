//! Seed data for demonstration and testing.
//!
//! This module provides the board shown when no other board is configured:
//! four columns and five cards spread across them.
//!
//! # Examples
//!
//! ```
//! use fast_kanban_protocol::seed::default_board;
//!
//! let board = default_board();
//! assert_eq!(board.columns().len(), 4);
//! assert_eq!(board.cards().len(), 5);
//! ```

use crate::board::Board;
use crate::card::Card;
use crate::column::Column;

/// Returns the default column sequence.
#[must_use]
pub fn default_columns() -> Vec<Column> {
    ["backlog", "to do", "in progress", "done"]
        .into_iter()
        .map(Column::new)
        .collect()
}

/// Returns the default card sequence.
#[must_use]
pub fn default_cards() -> Vec<Card> {
    [
        ("1", "backlog"),
        ("2", "backlog"),
        ("3", "to do"),
        ("4", "in progress"),
        ("5", "done"),
    ]
    .into_iter()
    .map(|(id, column)| Card::new(id, column))
    .collect()
}

/// Builds the default board.
///
/// # Examples
///
/// ```
/// use fast_kanban_protocol::ColumnId;
/// use fast_kanban_protocol::seed::default_board;
///
/// let board = default_board();
/// assert_eq!(board.cards_in(&ColumnId::from("backlog")).count(), 2);
/// assert_eq!(board.cards_in(&ColumnId::from("done")).count(), 1);
/// ```
#[must_use]
pub fn default_board() -> Board {
    let mut board = Board::default();
    board.replace_columns(default_columns());
    board.replace_cards(default_cards());
    board
}
