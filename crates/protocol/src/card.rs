//! Card types for the Kanban board.
//!
//! Cards are the units of work on the board. Each card names the column it
//! belongs to through `column_id`; the card sequence itself is not grouped
//! by column.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::column::ColumnId;

/// Unique, stable identifier of a card.
///
/// # Examples
///
/// ```
/// use fast_kanban_protocol::CardId;
///
/// let id = CardId::from("42");
/// assert_eq!(id.as_str(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Creates a card identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A card (task) on the board.
///
/// # Examples
///
/// ```
/// use fast_kanban_protocol::Card;
///
/// let card = Card::new("1", "backlog");
/// assert_eq!(card.id.as_str(), "1");
/// assert_eq!(card.column_id.as_str(), "backlog");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier of this card.
    pub id: CardId,
    /// The column this card belongs to.
    pub column_id: ColumnId,
}

impl Card {
    /// Creates a card in the given column.
    #[must_use]
    pub fn new(id: impl Into<CardId>, column_id: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            column_id: column_id.into(),
        }
    }

    /// Returns a copy of this card reassigned to another column.
    ///
    /// # Examples
    ///
    /// ```
    /// use fast_kanban_protocol::{Card, ColumnId};
    ///
    /// let card = Card::new("1", "backlog").in_column(ColumnId::from("done"));
    /// assert_eq!(card.column_id.as_str(), "done");
    /// ```
    #[must_use]
    pub fn in_column(&self, column_id: ColumnId) -> Self {
        Self {
            id: self.id.clone(),
            column_id,
        }
    }

    /// Returns `true` if this card belongs to the given column.
    #[must_use]
    pub fn is_in(&self, column_id: &ColumnId) -> bool {
        &self.column_id == column_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_json_format() {
        let json = serde_json::to_string(&Card::new("1", "to do")).expect("serialize");
        assert_eq!(json, r#"{"id":"1","column_id":"to do"}"#);
    }

    #[test]
    fn in_column_keeps_identity() {
        let card = Card::new("7", "backlog");
        let moved = card.in_column(ColumnId::from("done"));

        assert_eq!(moved.id, card.id);
        assert!(moved.is_in(&ColumnId::from("done")));
        assert!(!moved.is_in(&ColumnId::from("backlog")));
    }
}
