//! Error types for the fast-kanban-protocol crate.
//!
//! This module defines the errors that can occur when building a board from
//! external data or converting protocol types to and from JSON. Drag
//! gestures never produce errors; see the engine crate.

use thiserror::Error;

use crate::card::CardId;
use crate::column::ColumnId;

/// Errors that can occur during protocol operations.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Two columns share the same identifier.
    #[error("duplicate column id: {0}")]
    DuplicateColumn(ColumnId),

    /// Two cards share the same identifier.
    #[error("duplicate card id: {0}")]
    DuplicateCard(CardId),

    /// A card references a column that is not on the board.
    #[error("card {card} references unknown column {column}")]
    DanglingCard {
        /// The offending card.
        card: CardId,
        /// The column it points at.
        column: ColumnId,
    },

    /// Failed to serialize a protocol type to JSON.
    #[error("failed to serialize to JSON: {0}")]
    SerializationFailed(#[source] serde_json::Error),

    /// Failed to deserialize a protocol type from JSON.
    #[error("failed to deserialize from JSON: {0}")]
    DeserializationFailed(#[source] serde_json::Error),
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ProtocolError::DuplicateColumn(ColumnId::from("done"));
        assert_eq!(err.to_string(), "duplicate column id: done");

        let err = ProtocolError::DanglingCard {
            card: CardId::from("3"),
            column: ColumnId::from("archive"),
        };
        assert_eq!(err.to_string(), "card 3 references unknown column archive");
    }
}
