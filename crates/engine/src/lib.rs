//! Drag-interaction engine for fast-kanban boards.
//!
//! This crate turns drag gestures into reorderings of a board's columns and
//! cards. Gesture interpretation and the reordering rules are pure functions
//! from a board snapshot and a gesture to a replacement sequence; the
//! [`KanbanEngine`] owns the board and applies those replacements.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`interpreter`]: Classifies a gesture by the kinds of its elements
//! - [`rules`]: Drag-over (preview) and drag-end (commit) reordering rules
//! - [`ordering`]: The array-move primitive
//! - [`engine`]: The board owner that applies rule outcomes
//! - [`session`]: Turns pointer input into drag events
//!
//! # Example
//!
//! ```
//! use fast_kanban_engine::KanbanEngine;
//! use fast_kanban_protocol::seed::default_board;
//! use fast_kanban_protocol::{DragElement, DragEvent, Gesture};
//!
//! let mut engine = KanbanEngine::new(default_board());
//! engine.handle(&DragEvent::End(Gesture::new(
//!     DragElement::column("backlog"),
//!     DragElement::column("done"),
//! )));
//!
//! let order: Vec<_> = engine.board().columns().iter().map(|c| c.id.as_str()).collect();
//! assert_eq!(order, ["to do", "in progress", "done", "backlog"]);
//! ```

pub mod engine;
pub mod interpreter;
pub mod ordering;
pub mod rules;
pub mod session;

// Re-export primary types at crate root for convenience
pub use engine::{KanbanEngine, Step};
pub use interpreter::{Classified, Ignored, classify};
pub use rules::{Outcome, Replacement, Sequence, on_drag_end, on_drag_over};
pub use session::{DragSession, Point};
