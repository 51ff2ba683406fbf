//! Seed board configuration with flexible parsing.
//!
//! The board a session starts from is described by [`BoardSeed`]. Both of its
//! entry types accept a short and a full form:
//!
//! - Columns: `"backlog"` or `{ "id": "backlog" }`
//! - Cards: `"7@backlog"` or `{ "id": "7", "column_id": "backlog" }`
//!
//! A short card entry is split at its first `@`, so a card id can never
//! contain `@` in short form but a column id can.
//!
//! # Examples
//!
//! ```
//! use fast_kanban_config::BoardSeed;
//!
//! let seed: BoardSeed = serde_json::from_str(
//!     r#"{"columns": ["todo", {"id": "done"}], "cards": ["1@todo", {"id": "2", "column_id": "done"}]}"#,
//! )
//! .unwrap();
//! let board = seed.to_board().unwrap();
//! assert_eq!(board.columns().len(), 2);
//! assert_eq!(board.cards().len(), 2);
//! ```

use fast_kanban_protocol::seed::{default_cards, default_columns};
use fast_kanban_protocol::{Board, Card, Column};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ConfigError, Result};

/// The columns and cards a board starts with.
///
/// The default seed is the stock four-column board: `backlog`, `to do`,
/// `in progress`, and `done`, holding cards `1` through `5`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSeed {
    /// Columns in display order.
    #[serde(default)]
    pub columns: Vec<SeedColumn>,

    /// Cards in display order.
    #[serde(default)]
    pub cards: Vec<SeedCard>,
}

impl Default for BoardSeed {
    fn default() -> Self {
        Self {
            columns: default_columns().into_iter().map(SeedColumn).collect(),
            cards: default_cards().into_iter().map(SeedCard).collect(),
        }
    }
}

impl BoardSeed {
    /// Creates a seed with no columns and no cards.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            cards: Vec::new(),
        }
    }

    /// Builds a validated board from this seed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSeed`] if a column or card id repeats, or
    /// a card references a column the seed does not declare.
    pub fn to_board(&self) -> Result<Board> {
        let columns = self.columns.iter().map(|c| c.0.clone()).collect();
        let cards = self.cards.iter().map(|c| c.0.clone()).collect();
        Ok(Board::new(columns, cards)?)
    }
}

/// A column entry in a [`BoardSeed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ColumnRepr", into = "ColumnRepr")]
pub struct SeedColumn(pub Column);

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ColumnRepr {
    Short(String),
    Full { id: String },
}

impl From<ColumnRepr> for SeedColumn {
    fn from(repr: ColumnRepr) -> Self {
        match repr {
            ColumnRepr::Short(id) | ColumnRepr::Full { id } => Self(Column::new(id)),
        }
    }
}

impl From<SeedColumn> for ColumnRepr {
    fn from(column: SeedColumn) -> Self {
        ColumnRepr::Short(column.0.id.as_str().to_owned())
    }
}

/// A card entry in a [`BoardSeed`].
///
/// # Examples
///
/// ```
/// use fast_kanban_config::SeedCard;
///
/// let card = SeedCard::parse_short("3@in progress").unwrap();
/// assert_eq!(card.0.id.as_str(), "3");
/// assert_eq!(card.0.column_id.as_str(), "in progress");
///
/// assert!(SeedCard::parse_short("no-column").is_err());
/// assert!(SeedCard::parse_short("@todo").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedCard(pub Card);

impl SeedCard {
    /// Parses a card from the short format `"id@column"`.
    ///
    /// Surrounding whitespace is trimmed from both parts.
    ///
    /// # Errors
    ///
    /// Returns an error if the string has no `@`, or if either side of it is
    /// empty.
    pub fn parse_short(s: &str) -> Result<Self> {
        let Some((id, column)) = s.split_once('@') else {
            return Err(ConfigError::InvalidCard(format!(
                "expected 'id@column' format, got '{s}'"
            )));
        };

        let id = id.trim();
        let column = column.trim();

        if id.is_empty() || column.is_empty() {
            return Err(ConfigError::InvalidCard(format!(
                "id and column cannot be empty in '{s}'"
            )));
        }

        Ok(Self(Card::new(id, column)))
    }

    fn short_form(&self) -> Option<String> {
        let id = self.0.id.as_str();
        let column = self.0.column_id.as_str();
        let trimmed = id.trim() == id && column.trim() == column;
        (trimmed && !id.is_empty() && !column.is_empty() && !id.contains('@'))
            .then(|| format!("{id}@{column}"))
    }
}

impl Serialize for SeedCard {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.short_form() {
            Some(short) => serializer.serialize_str(&short),
            None => self.0.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for SeedCard {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};

        struct SeedCardVisitor;

        impl<'de> Visitor<'de> for SeedCardVisitor {
            type Value = SeedCard;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a string 'id@column' or an object with id and column_id fields")
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                SeedCard::parse_short(v).map_err(de::Error::custom)
            }

            fn visit_map<M>(self, mut map: M) -> std::result::Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut id: Option<String> = None;
                let mut column_id: Option<String> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "id" => {
                            if id.is_some() {
                                return Err(de::Error::duplicate_field("id"));
                            }
                            id = Some(map.next_value()?);
                        }
                        "column_id" => {
                            if column_id.is_some() {
                                return Err(de::Error::duplicate_field("column_id"));
                            }
                            column_id = Some(map.next_value()?);
                        }
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                let id = id.ok_or_else(|| de::Error::missing_field("id"))?;
                let column_id = column_id.ok_or_else(|| de::Error::missing_field("column_id"))?;

                Ok(SeedCard(Card::new(id, column_id)))
            }
        }

        deserializer.deserialize_any(SeedCardVisitor)
    }
}
