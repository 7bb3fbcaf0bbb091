use crate::keyboard::{Key, Modifiers};

/// A keyboard event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keyboard key was pressed.
    KeyPressed {
        /// The key pressed.
        key: Key,

        /// The state of the modifier keys.
        modifiers: Modifiers,
    },

    /// A keyboard key was released.
    KeyReleased {
        /// The key released.
        key: Key,

        /// The state of the modifier keys.
        modifiers: Modifiers,
    },
}

impl Event {
    /// Creates a [`Event::KeyPressed`] for the given key, without modifiers.
    pub fn pressed(key: impl Into<Key>) -> Self {
        Self::KeyPressed {
            key: key.into(),
            modifiers: Modifiers::empty(),
        }
    }
}
