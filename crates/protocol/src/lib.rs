//! Shared protocol types for the fast-kanban board engine.
//!
//! This crate defines the data model manipulated by the drag engine: the
//! ordered columns and cards of a board, and the gestures that describe one
//! step of a drag interaction.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`column`]: Column identifiers and the `Column` struct
//! - [`card`]: Card identifiers and the `Card` struct
//! - [`board`]: The `Board` holding both ordered sequences
//! - [`gesture`]: Drag elements, gestures, and drag events
//! - [`seed`]: The demonstration board used when nothing else is configured
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! Building a board and reading a column's cards:
//!
//! ```
//! use fast_kanban_protocol::{Board, Card, Column, ColumnId};
//!
//! let board = Board::new(
//!     vec![Column::new("backlog"), Column::new("done")],
//!     vec![Card::new("1", "backlog"), Card::new("2", "done")],
//! )
//! .unwrap();
//!
//! let backlog: Vec<_> = board.cards_in(&ColumnId::from("backlog")).collect();
//! assert_eq!(backlog.len(), 1);
//! ```

pub mod board;
pub mod card;
pub mod column;
pub mod error;
pub mod gesture;
pub mod seed;

// Re-export primary types at crate root for convenience
pub use board::Board;
pub use card::{Card, CardId};
pub use column::{Column, ColumnId};
pub use error::{ProtocolError, Result};
pub use gesture::{DragElement, DragEvent, ElementKind, Gesture};
