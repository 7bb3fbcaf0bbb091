use crate::Point;
use crate::mouse::Button;
use crate::scene::NodeId;

/// A mouse event.
///
/// Every event carries the client-space cursor `position` and the `target`
/// node reported by the renderer's hit test, if the cursor is over anything
/// it rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The mouse cursor was moved.
    CursorMoved {
        /// The new position of the mouse cursor.
        position: Point,
        /// The node under the cursor.
        target: Option<NodeId>,
    },

    /// A mouse button was pressed.
    ButtonPressed {
        /// The pressed button.
        button: Button,
        /// The position of the mouse cursor.
        position: Point,
        /// The node under the cursor.
        target: Option<NodeId>,
    },

    /// A mouse button was released.
    ButtonReleased {
        /// The released button.
        button: Button,
        /// The position of the mouse cursor.
        position: Point,
        /// The node under the cursor.
        target: Option<NodeId>,
    },
}

impl Event {
    /// Returns the node under the cursor when the event happened.
    pub fn target(&self) -> Option<NodeId> {
        match *self {
            Event::CursorMoved { target, .. }
            | Event::ButtonPressed { target, .. }
            | Event::ButtonReleased { target, .. } => target,
        }
    }

    /// Returns the cursor position of the event.
    pub fn position(&self) -> Point {
        match *self {
            Event::CursorMoved { position, .. }
            | Event::ButtonPressed { position, .. }
            | Event::ButtonReleased { position, .. } => position,
        }
    }
}
