//! Reordering rules.
//!
//! Two entry points share the classification in [`crate::interpreter`]:
//!
//! - [`on_drag_end`] commits a drag: columns are array-moved, cards are
//!   reassigned to a dropped-on column, or cards are reordered within a
//!   column and have their columns swapped.
//! - [`on_drag_over`] previews a drag: only card membership changes, never
//!   positions, and column drags have no preview.
//!
//! Both are pure. They read one board snapshot and return either a whole
//! replacement sequence or the reason nothing changed. Any rule that
//! assigns a `column_id` first checks that the column is on the board, so
//! no rule can leave a card pointing at a missing column.

use fast_kanban_protocol::{Board, Card, CardId, Column, ColumnId, Gesture};
use serde::Serialize;

use crate::interpreter::{Classified, Ignored, classify};
use crate::ordering::array_move;

/// Which of the board's sequences a replacement targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sequence {
    /// The column sequence.
    Columns,
    /// The card sequence.
    Cards,
}

/// A whole new sequence derived from the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// Replaces the column sequence.
    Columns(Vec<Column>),
    /// Replaces the card sequence.
    Cards(Vec<Card>),
}

impl Replacement {
    /// Returns the sequence this replacement targets.
    #[must_use]
    pub const fn sequence(&self) -> Sequence {
        match self {
            Self::Columns(_) => Sequence::Columns,
            Self::Cards(_) => Sequence::Cards,
        }
    }

    /// Writes the replacement into the board.
    pub fn apply(self, board: &mut Board) {
        match self {
            Self::Columns(columns) => board.replace_columns(columns),
            Self::Cards(cards) => board.replace_cards(cards),
        }
    }
}

/// The result of running a rule against a board snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The board should take this new sequence.
    Replace(Replacement),
    /// The board stays as it is.
    Ignored(Ignored),
}

impl Outcome {
    /// Returns `true` if the outcome changes the board.
    #[must_use]
    pub const fn is_change(&self) -> bool {
        matches!(self, Self::Replace(_))
    }

    /// Applies the outcome to a board, returning the reason when it is
    /// ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use fast_kanban_engine::on_drag_end;
    /// use fast_kanban_protocol::seed::default_board;
    /// use fast_kanban_protocol::{DragElement, Gesture};
    ///
    /// let mut board = default_board();
    /// let gesture = Gesture::new(DragElement::task("1", "backlog"), DragElement::column("done"));
    ///
    /// let outcome = on_drag_end(&board, &gesture);
    /// assert!(outcome.apply_to(&mut board).is_ok());
    /// assert_eq!(board.cards()[0].column_id.as_str(), "done");
    /// ```
    pub fn apply_to(self, board: &mut Board) -> Result<Sequence, Ignored> {
        match self {
            Self::Replace(replacement) => {
                let sequence = replacement.sequence();
                replacement.apply(board);
                Ok(sequence)
            }
            Self::Ignored(reason) => Err(reason),
        }
    }
}

impl From<Result<Replacement, Ignored>> for Outcome {
    fn from(result: Result<Replacement, Ignored>) -> Self {
        match result {
            Ok(replacement) => Self::Replace(replacement),
            Err(reason) => Self::Ignored(reason),
        }
    }
}

/// Computes the committed result of a released drag.
///
/// # Examples
///
/// ```
/// use fast_kanban_engine::{Outcome, Replacement, on_drag_end};
/// use fast_kanban_protocol::{Board, Column, DragElement, Gesture};
///
/// let board = Board::new(
///     ["backlog", "todo", "doing", "done"].map(Column::new).to_vec(),
///     vec![],
/// )
/// .unwrap();
/// let gesture = Gesture::new(DragElement::column("todo"), DragElement::column("done"));
///
/// let Outcome::Replace(Replacement::Columns(columns)) = on_drag_end(&board, &gesture) else {
///     panic!("expected a column replacement");
/// };
/// let order: Vec<_> = columns.iter().map(|c| c.id.as_str()).collect();
/// assert_eq!(order, ["backlog", "doing", "done", "todo"]);
/// ```
#[must_use]
pub fn on_drag_end(board: &Board, gesture: &Gesture) -> Outcome {
    let replacement = classify(gesture).and_then(|classified| match classified {
        Classified::ReorderColumns { active, over } => reorder_columns(board, active, over),
        Classified::MoveTaskToColumn { active, over, .. } => {
            reassign_card(board, active, over.clone())
        }
        Classified::ReorderOrMoveTask {
            active,
            active_column,
            over,
            over_column,
        } => reorder_or_move_task(board, active, active_column, over, over_column),
    });
    replacement.into()
}

/// Computes the live preview of an in-progress drag.
///
/// Only card membership changes during a preview; positions are settled
/// by [`on_drag_end`].
#[must_use]
pub fn on_drag_over(board: &Board, gesture: &Gesture) -> Outcome {
    let replacement = classify(gesture).and_then(|classified| match classified {
        Classified::ReorderColumns { .. } => Err(Ignored::NoPreviewRule),
        Classified::MoveTaskToColumn {
            active,
            recorded_column,
            over,
        } => {
            if recorded_column == over {
                return Err(Ignored::NoChange);
            }
            reassign_card(board, active, over.clone())
        }
        Classified::ReorderOrMoveTask { active, over, .. } => {
            let active_card = board.card(active).ok_or(Ignored::StaleLookup)?;
            let over_card = board.card(over).ok_or(Ignored::StaleLookup)?;
            if active_card.column_id == over_card.column_id {
                return Err(Ignored::NoChange);
            }
            reassign_card(board, active, over_card.column_id.clone())
        }
    });
    replacement.into()
}

/// Array-moves the active column onto the over column's position.
fn reorder_columns(board: &Board, active: &ColumnId, over: &ColumnId) -> Result<Replacement, Ignored> {
    let from = board.column_index(active).ok_or(Ignored::StaleLookup)?;
    let to = board.column_index(over).ok_or(Ignored::StaleLookup)?;
    if from == to {
        return Err(Ignored::NoChange);
    }

    let mut columns = board.columns().to_vec();
    array_move(&mut columns, from, to);
    Ok(Replacement::Columns(columns))
}

/// Points one card at another column without moving it.
fn reassign_card(board: &Board, card: &CardId, column: ColumnId) -> Result<Replacement, Ignored> {
    if !board.has_column(&column) {
        return Err(Ignored::StaleLookup);
    }
    let index = board.card_index(card).ok_or(Ignored::StaleLookup)?;
    if board.cards()[index].column_id == column {
        return Err(Ignored::NoChange);
    }

    let mut cards = board.cards().to_vec();
    cards[index] = cards[index].in_column(column);
    Ok(Replacement::Cards(cards))
}

/// Card dropped on card: reorder within a shared column, then swap the
/// recorded columns of the two cards.
///
/// Both steps run on the same snapshot. The swap uses the columns recorded
/// in the gesture rather than the cards' current columns, so a preview that
/// already moved the active card does not change the committed result.
fn reorder_or_move_task(
    board: &Board,
    active: &CardId,
    active_column: &ColumnId,
    over: &CardId,
    over_column: &ColumnId,
) -> Result<Replacement, Ignored> {
    let from = board.card_index(active).ok_or(Ignored::StaleLookup)?;
    let to = board.card_index(over).ok_or(Ignored::StaleLookup)?;
    if !board.has_column(active_column) || !board.has_column(over_column) {
        return Err(Ignored::StaleLookup);
    }

    let mut cards = board.cards().to_vec();
    if active_column == over_column {
        array_move(&mut cards, from, to);
    }
    // TODO: confirm with product whether the swap should also run for
    // same-column drops; it is a no-op there today but doubles up with the
    // drag-over reassignment for cross-column drops.
    for card in &mut cards {
        if &card.id == active {
            *card = card.in_column(over_column.clone());
        } else if &card.id == over {
            *card = card.in_column(active_column.clone());
        }
    }

    if cards == board.cards() {
        return Err(Ignored::NoChange);
    }
    Ok(Replacement::Cards(cards))
}

#[cfg(test)]
mod tests {
    use fast_kanban_protocol::DragElement;

    use super::*;

    fn columns(ids: &[&str]) -> Vec<Column> {
        ids.iter().copied().map(Column::new).collect()
    }

    fn board(column_ids: &[&str], cards: &[(&str, &str)]) -> Board {
        Board::new(
            columns(column_ids),
            cards.iter().map(|&(id, column)| Card::new(id, column)).collect(),
        )
        .expect("valid test board")
    }

    fn card_layout(board: &Board) -> Vec<(String, String)> {
        board
            .cards()
            .iter()
            .map(|card| (card.id.to_string(), card.column_id.to_string()))
            .collect()
    }

    fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected
            .iter()
            .map(|&(id, column)| (id.to_string(), column.to_string()))
            .collect()
    }

    fn commit(board: &mut Board, gesture: &Gesture) -> Result<Sequence, Ignored> {
        on_drag_end(board, gesture).apply_to(board)
    }

    fn preview(board: &mut Board, gesture: &Gesture) -> Result<Sequence, Ignored> {
        on_drag_over(board, gesture).apply_to(board)
    }

    #[test]
    fn column_move_forward() {
        let mut b = board(&["backlog", "todo", "doing", "done"], &[]);
        let gesture = Gesture::new(DragElement::column("todo"), DragElement::column("done"));

        assert_eq!(commit(&mut b, &gesture), Ok(Sequence::Columns));
        let order: Vec<_> = b.columns().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(order, ["backlog", "doing", "done", "todo"]);
    }

    #[test]
    fn column_move_backward() {
        let mut b = board(&["backlog", "todo", "doing", "done"], &[]);
        let gesture = Gesture::new(DragElement::column("done"), DragElement::column("todo"));

        assert_eq!(commit(&mut b, &gesture), Ok(Sequence::Columns));
        let order: Vec<_> = b.columns().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(order, ["backlog", "done", "todo", "doing"]);
    }

    #[test]
    fn column_drag_has_no_preview() {
        let b = board(&["a", "b"], &[]);
        let gesture = Gesture::new(DragElement::column("a"), DragElement::column("b"));
        assert_eq!(on_drag_over(&b, &gesture), Outcome::Ignored(Ignored::NoPreviewRule));
    }

    #[test]
    fn unknown_column_is_stale() {
        let b = board(&["a", "b"], &[]);
        let gesture = Gesture::new(DragElement::column("a"), DragElement::column("gone"));
        assert_eq!(on_drag_end(&b, &gesture), Outcome::Ignored(Ignored::StaleLookup));
    }

    #[test]
    fn task_to_empty_column() {
        let mut b = board(
            &["backlog", "doing"],
            &[("1", "backlog"), ("2", "backlog")],
        );
        let gesture = Gesture::new(DragElement::task("1", "backlog"), DragElement::column("doing"));

        assert_eq!(commit(&mut b, &gesture), Ok(Sequence::Cards));
        assert_eq!(card_layout(&b), pairs(&[("1", "doing"), ("2", "backlog")]));
    }

    #[test]
    fn task_to_missing_column_is_stale() {
        let b = board(&["backlog"], &[("1", "backlog")]);
        let gesture = Gesture::new(DragElement::task("1", "backlog"), DragElement::column("gone"));

        assert_eq!(on_drag_end(&b, &gesture), Outcome::Ignored(Ignored::StaleLookup));
        assert_eq!(on_drag_over(&b, &gesture), Outcome::Ignored(Ignored::StaleLookup));
    }

    #[test]
    fn missing_card_is_stale() {
        let b = board(&["backlog", "done"], &[("1", "backlog")]);
        let gesture = Gesture::new(DragElement::task("9", "backlog"), DragElement::column("done"));
        assert_eq!(on_drag_end(&b, &gesture), Outcome::Ignored(Ignored::StaleLookup));

        let gesture = Gesture::new(DragElement::task("1", "backlog"), DragElement::task("9", "done"));
        assert_eq!(on_drag_end(&b, &gesture), Outcome::Ignored(Ignored::StaleLookup));
        assert_eq!(on_drag_over(&b, &gesture), Outcome::Ignored(Ignored::StaleLookup));
    }

    #[test]
    fn same_column_reorder() {
        let mut b = board(
            &["backlog"],
            &[("1", "backlog"), ("2", "backlog"), ("3", "backlog")],
        );
        let gesture = Gesture::new(
            DragElement::task("1", "backlog"),
            DragElement::task("3", "backlog"),
        );

        assert_eq!(commit(&mut b, &gesture), Ok(Sequence::Cards));
        assert_eq!(
            card_layout(&b),
            pairs(&[("2", "backlog"), ("3", "backlog"), ("1", "backlog")])
        );
    }

    #[test]
    fn cross_column_drop_swaps_columns_without_moving() {
        let mut b = board(
            &["backlog", "doing"],
            &[("1", "backlog"), ("2", "backlog"), ("3", "doing")],
        );
        let gesture = Gesture::new(
            DragElement::task("1", "backlog"),
            DragElement::task("3", "doing"),
        );

        assert_eq!(commit(&mut b, &gesture), Ok(Sequence::Cards));
        assert_eq!(
            card_layout(&b),
            pairs(&[("1", "doing"), ("2", "backlog"), ("3", "backlog")])
        );
    }

    #[test]
    fn cross_column_drop_with_unknown_recorded_column_is_stale() {
        let b = board(&["backlog", "doing"], &[("1", "backlog"), ("3", "doing")]);
        let gesture = Gesture::new(
            DragElement::task("1", "archived"),
            DragElement::task("3", "doing"),
        );
        assert_eq!(on_drag_end(&b, &gesture), Outcome::Ignored(Ignored::StaleLookup));
    }

    #[test]
    fn task_over_column_preview_reassigns_once() {
        let mut b = board(&["backlog", "doing"], &[("1", "backlog"), ("2", "backlog")]);
        let gesture = Gesture::new(DragElement::task("1", "backlog"), DragElement::column("doing"));

        assert_eq!(preview(&mut b, &gesture), Ok(Sequence::Cards));
        assert_eq!(card_layout(&b), pairs(&[("1", "doing"), ("2", "backlog")]));

        // A second identical preview has nothing left to do.
        assert_eq!(preview(&mut b, &gesture), Err(Ignored::NoChange));
    }

    #[test]
    fn task_over_own_recorded_column_preview_is_noop() {
        let b = board(&["backlog", "doing"], &[("1", "backlog")]);
        let gesture = Gesture::new(DragElement::task("1", "backlog"), DragElement::column("backlog"));
        assert_eq!(on_drag_over(&b, &gesture), Outcome::Ignored(Ignored::NoChange));
    }

    #[test]
    fn task_over_task_preview_uses_current_columns() {
        let mut b = board(
            &["backlog", "doing"],
            &[("1", "backlog"), ("2", "doing"), ("3", "doing")],
        );
        // Recorded columns are stale on purpose; the preview reads the board.
        let gesture = Gesture::new(DragElement::task("1", "doing"), DragElement::task("3", "backlog"));

        assert_eq!(preview(&mut b, &gesture), Ok(Sequence::Cards));
        assert_eq!(
            card_layout(&b),
            pairs(&[("1", "doing"), ("2", "doing"), ("3", "doing")])
        );
    }

    #[test]
    fn task_over_task_preview_never_moves_positions() {
        let mut b = board(&["a", "b"], &[("1", "a"), ("2", "b"), ("3", "b")]);
        let gesture = Gesture::new(DragElement::task("1", "a"), DragElement::task("3", "b"));
        preview(&mut b, &gesture).expect("preview applies");

        let ids: Vec<_> = b.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn preview_then_commit_matches_direct_commit() {
        let start = board(&["x", "y"], &[("a", "x"), ("b", "y")]);
        let gesture = Gesture::new(DragElement::task("a", "x"), DragElement::task("b", "y"));

        let mut direct = start.clone();
        commit(&mut direct, &gesture).expect("commit applies");

        let mut previewed = start;
        preview(&mut previewed, &gesture).expect("preview applies");
        commit(&mut previewed, &gesture).expect("commit applies");

        assert_eq!(direct, previewed);
        assert_eq!(card_layout(&direct), pairs(&[("a", "y"), ("b", "x")]));
    }

    #[test]
    fn column_over_task_never_mutates() {
        let b = board(&["a"], &[("1", "a")]);
        let gesture = Gesture::new(DragElement::column("a"), DragElement::task("1", "a"));

        assert!(!on_drag_end(&b, &gesture).is_change());
        assert!(!on_drag_over(&b, &gesture).is_change());
    }
}
