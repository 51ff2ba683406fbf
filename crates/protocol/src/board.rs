//! The board: an ordered column sequence and an ordered card sequence.
//!
//! Order is positional. A column's cards are the cards whose `column_id`
//! matches it, in the order they appear in the card sequence; the card
//! sequence is never physically partitioned by column.
//!
//! The board itself only offers whole-sequence replacement. It does not
//! check invariants on replacement; callers that derive new sequences are
//! responsible for never introducing a dangling `column_id`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::card::{Card, CardId};
use crate::column::{Column, ColumnId};
use crate::error::{ProtocolError, Result};

/// A Kanban board.
///
/// Invariants checked by [`Board::new`] and [`Board::validate`]:
///
/// 1. column identifiers are unique,
/// 2. card identifiers are unique,
/// 3. every card's `column_id` names an existing column.
///
/// # Examples
///
/// ```
/// use fast_kanban_protocol::{Board, Card, Column};
///
/// let board = Board::new(
///     vec![Column::new("backlog"), Column::new("done")],
///     vec![Card::new("1", "backlog")],
/// )
/// .unwrap();
///
/// assert_eq!(board.columns().len(), 2);
/// assert_eq!(board.cards().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardParts")]
pub struct Board {
    columns: Vec<Column>,
    cards: Vec<Card>,
}

/// Unvalidated wire form of a [`Board`].
#[derive(Deserialize)]
struct BoardParts {
    #[serde(default)]
    columns: Vec<Column>,
    #[serde(default)]
    cards: Vec<Card>,
}

impl TryFrom<BoardParts> for Board {
    type Error = ProtocolError;

    fn try_from(parts: BoardParts) -> Result<Self> {
        Self::new(parts.columns, parts.cards)
    }
}

impl Board {
    /// Creates a board from externally supplied columns and cards.
    ///
    /// # Errors
    ///
    /// Returns an error if identifiers are duplicated or a card references
    /// a column that is not in `columns`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fast_kanban_protocol::{Board, Card, Column, ProtocolError};
    ///
    /// let result = Board::new(vec![Column::new("todo")], vec![Card::new("1", "doing")]);
    /// assert!(matches!(result, Err(ProtocolError::DanglingCard { .. })));
    /// ```
    pub fn new(columns: Vec<Column>, cards: Vec<Card>) -> Result<Self> {
        let board = Self { columns, cards };
        board.validate()?;
        Ok(board)
    }

    /// Returns the column sequence in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the full card sequence.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Replaces the whole column sequence.
    pub fn replace_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
    }

    /// Replaces the whole card sequence.
    pub fn replace_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Returns the position of a column in the column sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use fast_kanban_protocol::{Board, Column, ColumnId};
    ///
    /// let board = Board::new(vec![Column::new("a"), Column::new("b")], vec![]).unwrap();
    /// assert_eq!(board.column_index(&ColumnId::from("b")), Some(1));
    /// assert_eq!(board.column_index(&ColumnId::from("z")), None);
    /// ```
    #[must_use]
    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|column| &column.id == id)
    }

    /// Returns `true` if the board has a column with this identifier.
    #[must_use]
    pub fn has_column(&self, id: &ColumnId) -> bool {
        self.column_index(id).is_some()
    }

    /// Returns the position of a card in the card sequence.
    #[must_use]
    pub fn card_index(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|card| &card.id == id)
    }

    /// Returns a card by identifier.
    #[must_use]
    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.id == id)
    }

    /// Returns the cards of one column, in card-sequence order.
    ///
    /// # Examples
    ///
    /// ```
    /// use fast_kanban_protocol::{Board, Card, Column, ColumnId};
    ///
    /// let board = Board::new(
    ///     vec![Column::new("a"), Column::new("b")],
    ///     vec![Card::new("1", "a"), Card::new("2", "b"), Card::new("3", "a")],
    /// )
    /// .unwrap();
    ///
    /// let ids: Vec<_> = board
    ///     .cards_in(&ColumnId::from("a"))
    ///     .map(|card| card.id.as_str())
    ///     .collect();
    /// assert_eq!(ids, ["1", "3"]);
    /// ```
    pub fn cards_in<'a, 'c>(
        &'a self,
        column: &'c ColumnId,
    ) -> impl Iterator<Item = &'a Card> + use<'a, 'c> {
        self.cards.iter().filter(move |card| card.is_in(column))
    }

    /// Checks the board invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: duplicate columns are reported
    /// before duplicate cards, which are reported before dangling cards.
    pub fn validate(&self) -> Result<()> {
        let mut column_ids = HashSet::with_capacity(self.columns.len());
        for column in &self.columns {
            if !column_ids.insert(&column.id) {
                return Err(ProtocolError::DuplicateColumn(column.id.clone()));
            }
        }

        let mut card_ids = HashSet::with_capacity(self.cards.len());
        for card in &self.cards {
            if !card_ids.insert(&card.id) {
                return Err(ProtocolError::DuplicateCard(card.id.clone()));
            }
        }

        if let Some(card) = self
            .cards
            .iter()
            .find(|card| !column_ids.contains(&card.column_id))
        {
            return Err(ProtocolError::DanglingCard {
                card: card.id.clone(),
                column: card.column_id.clone(),
            });
        }

        Ok(())
    }

    /// Renders every column with its filtered cards.
    ///
    /// The callback receives the column identifier, the column's cards in
    /// order, and the caller's pass-through `data`. One result is produced
    /// per column, in column order.
    ///
    /// # Examples
    ///
    /// ```
    /// use fast_kanban_protocol::{Board, Card, Column};
    ///
    /// let board = Board::new(
    ///     vec![Column::new("a"), Column::new("b")],
    ///     vec![Card::new("1", "b")],
    /// )
    /// .unwrap();
    ///
    /// let lines = board.render_with(&"|", |column, cards, sep| {
    ///     let ids: Vec<_> = cards.iter().map(|card| card.id.as_str()).collect();
    ///     format!("{column}{sep}{}", ids.join(","))
    /// });
    /// assert_eq!(lines, ["a|", "b|1"]);
    /// ```
    pub fn render_with<D, T, F>(&self, data: &D, mut render: F) -> Vec<T>
    where
        D: ?Sized,
        F: FnMut(&ColumnId, Vec<&Card>, &D) -> T,
    {
        self.columns
            .iter()
            .map(|column| render(&column.id, self.cards_in(&column.id).collect(), data))
            .collect()
    }

    /// Serializes the board to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(ProtocolError::SerializationFailed)
    }

    /// Parses and validates a board from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the board violates an
    /// invariant.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(ProtocolError::DeserializationFailed)
    }
}
