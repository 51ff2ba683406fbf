//! The board owner.
//!
//! [`KanbanEngine`] holds the board state for one session and is the only
//! writer of it. Each gesture is interpreted fresh against the current
//! board; there is no drag mode kept between gestures.

use fast_kanban_protocol::{Board, CardId, ColumnId, DragElement, DragEvent, Gesture};
use tracing::{debug, instrument, trace, warn};

use crate::interpreter::Ignored;
use crate::rules::{Outcome, Sequence, on_drag_end, on_drag_over};

/// What one gesture step did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The given sequence was replaced.
    Changed(Sequence),
    /// The board was left unchanged.
    Ignored(Ignored),
}

impl Step {
    /// Returns `true` if the board changed.
    #[must_use]
    pub const fn is_change(self) -> bool {
        matches!(self, Self::Changed(_))
    }
}

/// Owns a board and applies drag gestures to it.
///
/// # Examples
///
/// ```
/// use fast_kanban_engine::{KanbanEngine, Step};
/// use fast_kanban_protocol::seed::default_board;
/// use fast_kanban_protocol::{DragElement, Gesture};
///
/// let mut engine = KanbanEngine::new(default_board());
/// let gesture = Gesture::new(DragElement::task("1", "backlog"), DragElement::column("done"));
///
/// assert!(engine.drag_over(&gesture).is_change());
/// assert_eq!(engine.revision(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KanbanEngine {
    board: Board,
    revision: u64,
}

impl KanbanEngine {
    /// Creates an engine over an initial board.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self { board, revision: 0 }
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the engine, returning the board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Returns how many replacements have been applied so far.
    ///
    /// Previews count: a single drag typically produces several revisions
    /// before its drag-end settles the final one.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Captures a card on the board as a drag element.
    #[must_use]
    pub fn card_element(&self, id: &CardId) -> Option<DragElement> {
        self.board.card(id).map(DragElement::from_card)
    }

    /// Captures a column on the board as a drag element.
    #[must_use]
    pub fn column_element(&self, id: &ColumnId) -> Option<DragElement> {
        self.board.has_column(id).then(|| DragElement::column(id.clone()))
    }

    /// Applies the live preview for a gesture.
    #[instrument(level = "trace", skip_all, fields(revision = self.revision))]
    pub fn drag_over(&mut self, gesture: &Gesture) -> Step {
        let outcome = on_drag_over(&self.board, gesture);
        self.apply("drag_over", outcome)
    }

    /// Commits a released gesture.
    #[instrument(level = "trace", skip_all, fields(revision = self.revision))]
    pub fn drag_end(&mut self, gesture: &Gesture) -> Step {
        let outcome = on_drag_end(&self.board, gesture);
        self.apply("drag_end", outcome)
    }

    /// Dispatches a drag event to the matching phase.
    pub fn handle(&mut self, event: &DragEvent) -> Step {
        match event {
            DragEvent::Over(gesture) => self.drag_over(gesture),
            DragEvent::End(gesture) => self.drag_end(gesture),
        }
    }

    fn apply(&mut self, phase: &'static str, outcome: Outcome) -> Step {
        match outcome.apply_to(&mut self.board) {
            Ok(sequence) => {
                self.revision += 1;
                debug_assert!(
                    self.board.validate().is_ok(),
                    "{phase} left the board inconsistent"
                );
                debug!(phase, ?sequence, revision = self.revision, "board updated");
                Step::Changed(sequence)
            }
            Err(Ignored::StaleLookup) => {
                warn!(phase, "gesture references an element that is no longer on the board");
                Step::Ignored(Ignored::StaleLookup)
            }
            Err(reason) => {
                trace!(phase, reason = reason.label(), "gesture ignored");
                Step::Ignored(reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use fast_kanban_protocol::seed::default_board;

    use super::*;

    #[test]
    fn new_engine_starts_at_revision_zero() {
        let engine = KanbanEngine::new(default_board());
        assert_eq!(engine.revision(), 0);
        assert_eq!(engine.board(), &default_board());
    }

    #[test]
    fn ignored_steps_do_not_bump_revision() {
        let mut engine = KanbanEngine::new(default_board());
        let step = engine.drag_end(&Gesture::over_nothing(DragElement::column("done")));

        assert_eq!(step, Step::Ignored(Ignored::MissingOver));
        assert_eq!(engine.revision(), 0);
    }

    #[test]
    fn handle_dispatches_by_phase() {
        let mut engine = KanbanEngine::new(default_board());
        let gesture = Gesture::new(DragElement::column("backlog"), DragElement::column("done"));

        assert_eq!(
            engine.handle(&DragEvent::Over(gesture.clone())),
            Step::Ignored(Ignored::NoPreviewRule)
        );
        assert_eq!(
            engine.handle(&DragEvent::End(gesture)),
            Step::Changed(Sequence::Columns)
        );
        assert_eq!(engine.revision(), 1);
    }

    #[test]
    fn elements_capture_current_board_state() {
        let mut engine = KanbanEngine::new(default_board());
        let card = CardId::from("1");
        assert_eq!(
            engine.card_element(&card),
            Some(DragElement::task("1", "backlog"))
        );

        engine.drag_over(&Gesture::new(
            DragElement::task("1", "backlog"),
            DragElement::column("done"),
        ));
        assert_eq!(engine.card_element(&card), Some(DragElement::task("1", "done")));

        assert_eq!(engine.card_element(&CardId::from("99")), None);
        assert_eq!(engine.column_element(&ColumnId::from("archive")), None);
        assert_eq!(
            engine.column_element(&ColumnId::from("done")),
            Some(DragElement::column("done"))
        );
    }

    #[test]
    fn into_board_returns_final_state() {
        let mut engine = KanbanEngine::new(default_board());
        engine.drag_end(&Gesture::new(
            DragElement::task("5", "done"),
            DragElement::column("backlog"),
        ));

        let board = engine.into_board();
        assert_eq!(board.cards()[4].column_id.as_str(), "backlog");
    }
}
