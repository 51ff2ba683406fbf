//! Pointer-driven drag sessions.
//!
//! A [`DragSession`] is the gesture source for one pointer. It records the
//! pressed element (with the column a card had at that moment), waits for
//! the pointer to travel past the activation distance, and from then on
//! emits a [`DragEvent::Over`] whenever the overlapped element changes and a
//! [`DragEvent::End`] on release.
//!
//! A press that is released before activating is a click, not a drag, and
//! produces no events.

use fast_kanban_protocol::{DragElement, DragEvent, Gesture};
use serde::{Deserialize, Serialize};

/// Default pointer travel before a press turns into a drag.
pub const DEFAULT_ACTIVATION_DISTANCE: f64 = 5.0;

/// A pointer position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
enum State {
    #[default]
    Idle,
    Pending {
        active: DragElement,
        origin: Point,
    },
    Dragging {
        active: DragElement,
        over: Option<DragElement>,
    },
}

/// Tracks one pointer from press to release.
///
/// # Examples
///
/// ```
/// use fast_kanban_engine::{DragSession, Point};
/// use fast_kanban_protocol::{DragElement, DragEvent};
///
/// let mut session = DragSession::default();
/// session.pointer_down(DragElement::task("1", "backlog"), Point::new(0.0, 0.0));
///
/// // Still within the activation distance: no drag yet.
/// assert_eq!(session.pointer_move(Point::new(2.0, 0.0), Some(DragElement::column("done"))), None);
///
/// let event = session.pointer_move(Point::new(10.0, 0.0), Some(DragElement::column("done")));
/// assert!(matches!(event, Some(DragEvent::Over(_))));
///
/// let event = session.pointer_up();
/// assert!(matches!(event, Some(DragEvent::End(_))));
/// assert!(!session.is_dragging());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    activation_distance: f64,
    state: State,
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVATION_DISTANCE)
    }
}

impl DragSession {
    /// Creates a session that activates once the pointer has moved strictly
    /// farther than `activation_distance` from where it was pressed.
    #[must_use]
    pub fn new(activation_distance: f64) -> Self {
        Self {
            activation_distance,
            state: State::Idle,
        }
    }

    /// Returns the configured activation distance.
    #[must_use]
    pub fn activation_distance(&self) -> f64 {
        self.activation_distance
    }

    /// Returns `true` once a press has turned into a drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, State::Dragging { .. })
    }

    /// Returns the pressed or dragged element, if any.
    #[must_use]
    pub fn active(&self) -> Option<&DragElement> {
        match &self.state {
            State::Idle => None,
            State::Pending { active, .. } | State::Dragging { active, .. } => Some(active),
        }
    }

    /// Presses the pointer on an element, replacing any unfinished drag.
    pub fn pointer_down(&mut self, element: DragElement, at: Point) {
        self.state = State::Pending {
            active: element,
            origin: at,
        };
    }

    /// Moves the pointer, now over `over`.
    ///
    /// Returns a drag-over event when the drag is active and the overlapped
    /// element differs from the previous one, including when the pointer
    /// leaves every element.
    pub fn pointer_move(&mut self, at: Point, over: Option<DragElement>) -> Option<DragEvent> {
        match &mut self.state {
            State::Idle => None,
            State::Pending { active, origin } => {
                if origin.distance_to(at) <= self.activation_distance {
                    return None;
                }
                let active = active.clone();
                let event = over
                    .as_ref()
                    .map(|over| DragEvent::Over(Gesture::new(active.clone(), over.clone())));
                self.state = State::Dragging { active, over };
                event
            }
            State::Dragging {
                active,
                over: current,
            } => {
                if *current == over {
                    return None;
                }
                current.clone_from(&over);
                Some(DragEvent::Over(Gesture {
                    active: Some(active.clone()),
                    over,
                }))
            }
        }
    }

    /// Releases the pointer.
    ///
    /// Returns the drag-end event for an active drag, or `None` if the press
    /// never activated.
    pub fn pointer_up(&mut self) -> Option<DragEvent> {
        match std::mem::take(&mut self.state) {
            State::Dragging { active, over } => Some(DragEvent::End(Gesture {
                active: Some(active),
                over,
            })),
            State::Idle | State::Pending { .. } => None,
        }
    }

    /// Abandons the current press or drag without emitting anything.
    ///
    /// Returns `true` if a drag was active.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = State::Idle;
        was_dragging
    }
}
