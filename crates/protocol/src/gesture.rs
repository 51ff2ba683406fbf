//! Drag gesture types.
//!
//! A [`Gesture`] is one observed instant of a drag: the element being
//! dragged (`active`) and the element under the pointer (`over`). Gestures
//! arrive wrapped in a [`DragEvent`] that says whether they are a live
//! preview (`Over`) or the release that commits the drag (`End`).

use serde::{Deserialize, Serialize};

use crate::card::{Card, CardId};
use crate::column::{Column, ColumnId};

/// The kind of element taking part in a drag.
///
/// # Examples
///
/// ```
/// use fast_kanban_protocol::ElementKind;
///
/// let json = serde_json::to_string(&ElementKind::Task).unwrap();
/// assert_eq!(json, r#""task""#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// A whole column.
    Column,
    /// A single card.
    Task,
}

/// An element referenced by a gesture.
///
/// Task elements carry the `column_id` the gesture source captured for the
/// card, which may differ from the card's current column on the board.
///
/// # Examples
///
/// ```
/// use fast_kanban_protocol::{DragElement, ElementKind};
///
/// let element = DragElement::task("1", "backlog");
/// assert_eq!(element.id(), "1");
/// assert_eq!(element.kind(), ElementKind::Task);
/// assert_eq!(element.column_id().map(|c| c.as_str()), Some("backlog"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragElement {
    /// A column, identified by its id.
    Column {
        /// The column's identifier.
        id: ColumnId,
    },
    /// A card, with the column it was recorded in.
    Task {
        /// The card's identifier.
        id: CardId,
        /// The card's column as captured by the gesture source.
        column_id: ColumnId,
    },
}

impl DragElement {
    /// Creates a column element.
    #[must_use]
    pub fn column(id: impl Into<ColumnId>) -> Self {
        Self::Column { id: id.into() }
    }

    /// Creates a task element with an explicitly recorded column.
    #[must_use]
    pub fn task(id: impl Into<CardId>, column_id: impl Into<ColumnId>) -> Self {
        Self::Task {
            id: id.into(),
            column_id: column_id.into(),
        }
    }

    /// Captures a card as it currently is on the board.
    #[must_use]
    pub fn from_card(card: &Card) -> Self {
        Self::Task {
            id: card.id.clone(),
            column_id: card.column_id.clone(),
        }
    }

    /// Captures a column.
    #[must_use]
    pub fn from_column(column: &Column) -> Self {
        Self::Column {
            id: column.id.clone(),
        }
    }

    /// Returns the raw identifier, whatever the kind.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Column { id } => id.as_str(),
            Self::Task { id, .. } => id.as_str(),
        }
    }

    /// Returns the element kind.
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::Column { .. } => ElementKind::Column,
            Self::Task { .. } => ElementKind::Task,
        }
    }

    /// Returns the recorded column of a task element.
    #[must_use]
    pub fn column_id(&self) -> Option<&ColumnId> {
        match self {
            Self::Column { .. } => None,
            Self::Task { column_id, .. } => Some(column_id),
        }
    }
}

/// One step of a drag interaction.
///
/// Either side may be absent: the pointer can be over nothing, and a
/// malformed event may lack the dragged element.
///
/// # Examples
///
/// ```
/// use fast_kanban_protocol::{DragElement, Gesture};
///
/// let gesture = Gesture::new(DragElement::column("todo"), DragElement::column("todo"));
/// assert!(gesture.is_self_target());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gesture {
    /// The element being dragged.
    #[serde(default)]
    pub active: Option<DragElement>,
    /// The element currently under the pointer.
    #[serde(default)]
    pub over: Option<DragElement>,
}

impl Gesture {
    /// Creates a gesture with both sides present.
    #[must_use]
    pub fn new(active: DragElement, over: DragElement) -> Self {
        Self {
            active: Some(active),
            over: Some(over),
        }
    }

    /// Creates a gesture whose pointer is over nothing.
    #[must_use]
    pub fn over_nothing(active: DragElement) -> Self {
        Self {
            active: Some(active),
            over: None,
        }
    }

    /// Returns `true` if both sides are present and share an identifier.
    ///
    /// Identifiers are compared as raw strings, regardless of kind.
    #[must_use]
    pub fn is_self_target(&self) -> bool {
        match (&self.active, &self.over) {
            (Some(active), Some(over)) => active.id() == over.id(),
            _ => false,
        }
    }
}

/// A gesture tagged with the drag phase it was observed in.
///
/// # Examples
///
/// ```
/// use fast_kanban_protocol::{DragElement, DragEvent, Gesture};
///
/// let json = r#"{
///     "phase": "end",
///     "active": { "kind": "column", "id": "todo" },
///     "over": { "kind": "column", "id": "done" }
/// }"#;
/// let event: DragEvent = serde_json::from_str(json).unwrap();
///
/// assert!(event.is_commit());
/// assert_eq!(
///     event.gesture(),
///     &Gesture::new(DragElement::column("todo"), DragElement::column("done"))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum DragEvent {
    /// Fired whenever the overlapped element changes during a drag.
    Over(Gesture),
    /// Fired once when the pointer is released.
    End(Gesture),
}

impl DragEvent {
    /// Returns the gesture carried by this event.
    #[must_use]
    pub fn gesture(&self) -> &Gesture {
        match self {
            Self::Over(gesture) | Self::End(gesture) => gesture,
        }
    }

    /// Returns `true` for the release event that commits a drag.
    #[must_use]
    pub const fn is_commit(&self) -> bool {
        matches!(self, Self::End(_))
    }
}
