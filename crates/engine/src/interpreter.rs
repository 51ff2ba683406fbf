//! Gesture classification.
//!
//! Every gesture, whether it comes from the live drag-over stream or the
//! final drag-end, is classified the same way: by the pair of element
//! kinds it carries. The drag phase only decides which rule set runs.
//!
//! | active | over   | classification          |
//! |--------|--------|-------------------------|
//! | Column | Column | [`Classified::ReorderColumns`]   |
//! | Task   | Column | [`Classified::MoveTaskToColumn`] |
//! | Task   | Task   | [`Classified::ReorderOrMoveTask`] |
//! | Column | Task   | ignored                 |

use fast_kanban_protocol::{CardId, ColumnId, DragElement, ElementKind, Gesture};
use serde::Serialize;

/// A gesture that maps onto one of the reordering rules.
///
/// Borrows the identifiers straight out of the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classified<'g> {
    /// A column dropped on another column.
    ReorderColumns {
        /// The dragged column.
        active: &'g ColumnId,
        /// The column under the pointer.
        over: &'g ColumnId,
    },
    /// A card dropped on a column.
    MoveTaskToColumn {
        /// The dragged card.
        active: &'g CardId,
        /// The column recorded for the dragged card.
        recorded_column: &'g ColumnId,
        /// The column under the pointer.
        over: &'g ColumnId,
    },
    /// A card dropped on another card.
    ReorderOrMoveTask {
        /// The dragged card.
        active: &'g CardId,
        /// The column recorded for the dragged card.
        active_column: &'g ColumnId,
        /// The card under the pointer.
        over: &'g CardId,
        /// The column recorded for the card under the pointer.
        over_column: &'g ColumnId,
    },
}

/// Why a gesture step left the board unchanged.
///
/// None of these are failures. Mid-drag inconsistency is expected and
/// always degrades to "board unchanged".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ignored {
    /// The gesture has no dragged element.
    MissingActive,
    /// The pointer is not over any element.
    MissingOver,
    /// The dragged element is over itself.
    SelfTarget,
    /// No rule exists for this pair of element kinds.
    Unclassified {
        /// Kind of the dragged element.
        active: ElementKind,
        /// Kind of the element under the pointer.
        over: ElementKind,
    },
    /// An identifier in the gesture is not on the board.
    StaleLookup,
    /// The rule has nothing to do in the current phase.
    NoPreviewRule,
    /// The rule ran but produced the sequence it started from.
    NoChange,
}

impl Ignored {
    /// Returns a short, stable label for logging.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MissingActive => "missing_active",
            Self::MissingOver => "missing_over",
            Self::SelfTarget => "self_target",
            Self::Unclassified { .. } => "unclassified",
            Self::StaleLookup => "stale_lookup",
            Self::NoPreviewRule => "no_preview_rule",
            Self::NoChange => "no_change",
        }
    }
}

/// Classifies a gesture into the rule it should trigger.
///
/// # Errors
///
/// Returns the reason the gesture is ignored: a missing side, a self
/// target, or a kind pair without a rule.
///
/// # Examples
///
/// ```
/// use fast_kanban_engine::{Classified, Ignored, classify};
/// use fast_kanban_protocol::{DragElement, Gesture};
///
/// let gesture = Gesture::new(DragElement::task("1", "backlog"), DragElement::column("done"));
/// assert!(matches!(classify(&gesture), Ok(Classified::MoveTaskToColumn { .. })));
///
/// let gesture = Gesture::over_nothing(DragElement::task("1", "backlog"));
/// assert_eq!(classify(&gesture), Err(Ignored::MissingOver));
/// ```
pub fn classify(gesture: &Gesture) -> Result<Classified<'_>, Ignored> {
    let active = gesture.active.as_ref().ok_or(Ignored::MissingActive)?;
    let over = gesture.over.as_ref().ok_or(Ignored::MissingOver)?;
    if gesture.is_self_target() {
        return Err(Ignored::SelfTarget);
    }

    match (active, over) {
        (DragElement::Column { id: active }, DragElement::Column { id: over }) => {
            Ok(Classified::ReorderColumns { active, over })
        }
        (
            DragElement::Task {
                id: active,
                column_id: recorded_column,
            },
            DragElement::Column { id: over },
        ) => Ok(Classified::MoveTaskToColumn {
            active,
            recorded_column,
            over,
        }),
        (
            DragElement::Task {
                id: active,
                column_id: active_column,
            },
            DragElement::Task {
                id: over,
                column_id: over_column,
            },
        ) => Ok(Classified::ReorderOrMoveTask {
            active,
            active_column,
            over,
            over_column,
        }),
        (DragElement::Column { .. }, DragElement::Task { .. }) => Err(Ignored::Unclassified {
            active: ElementKind::Column,
            over: ElementKind::Task,
        }),
    }
}
