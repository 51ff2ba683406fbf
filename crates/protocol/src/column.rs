//! Column types for the Kanban board.
//!
//! A column is a lane on the board. It carries nothing but its identity;
//! its position in the board's column sequence is its order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique, stable identifier of a column.
///
/// Identifiers are opaque strings such as `"backlog"` or `"in progress"`.
///
/// # Examples
///
/// ```
/// use fast_kanban_protocol::ColumnId;
///
/// let id = ColumnId::from("to do");
/// assert_eq!(id.as_str(), "to do");
/// assert_eq!(id.to_string(), "to do");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    /// Creates a column identifier.
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

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ColumnId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single column (lane) on the board.
///
/// # Examples
///
/// ```
/// use fast_kanban_protocol::Column;
///
/// let column = Column::new("done");
/// assert_eq!(column.id.as_str(), "done");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    /// Unique identifier of this column.
    pub id: ColumnId,
}

impl Column {
    /// Creates a column with the given identifier.
    #[must_use]
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }
}
