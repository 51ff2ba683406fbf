//! Drag activation configuration.
//!
//! A press only becomes a drag after the pointer has travelled past the
//! activation distance, so plain clicks on cards never reorder anything.

use fast_kanban_engine::DragSession;
use fast_kanban_engine::session::DEFAULT_ACTIVATION_DISTANCE;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Configuration for the pointer gesture source.
///
/// # Examples
///
/// ```
/// use fast_kanban_config::DragConfig;
///
/// let config = DragConfig::default();
/// assert_eq!(config.activation_distance, 5.0);
///
/// let config = DragConfig::with_activation_distance(12.0);
/// assert_eq!(config.session().activation_distance(), 12.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragConfig {
    /// Pointer travel required before a press turns into a drag.
    #[serde(default = "default_activation_distance")]
    pub activation_distance: f64,
}

fn default_activation_distance() -> f64 {
    DEFAULT_ACTIVATION_DISTANCE
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            activation_distance: DEFAULT_ACTIVATION_DISTANCE,
        }
    }
}

impl DragConfig {
    /// Creates a drag configuration with the given activation distance.
    #[must_use]
    pub fn with_activation_distance(activation_distance: f64) -> Self {
        Self {
            activation_distance,
        }
    }

    /// Creates an idle drag session using this configuration.
    #[must_use]
    pub fn session(&self) -> DragSession {
        DragSession::new(self.activation_distance)
    }

    /// Validates the drag configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the activation distance is negative, NaN, or
    /// infinite.
    pub fn validate(&self) -> Result<()> {
        if !self.activation_distance.is_finite() || self.activation_distance < 0.0 {
            return Err(ConfigError::InvalidActivationDistance {
                value: self.activation_distance,
            });
        }
        Ok(())
    }
}
