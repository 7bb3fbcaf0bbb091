//! Subscribe to document-wide events.
//!
//! A popup only needs to hear about clicks, key presses and focus changes
//! outside of itself while it is open. Widgets acquire these subscriptions
//! when a popup opens and release them when it closes, and report every
//! change through [`Shell::listen`] so a host can attach or detach the real
//! listeners.
//!
//! [`Shell::listen`]: crate::Shell::listen
use bitflags::bitflags;

bitflags! {
    /// A set of document-wide event subscriptions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Listeners: u8 {
        /// Pointer releases anywhere in the document.
        const POINTER_UP = 1;
        /// Primary clicks anywhere in the document.
        const CLICK = 1 << 1;
        /// Key presses anywhere in the document.
        const KEY_DOWN = 1 << 2;
        /// The hosting window losing focus.
        const BLUR = 1 << 3;
    }
}

impl Listeners {
    /// Computes the subscriptions to attach and to detach when moving from
    /// `self` to `next`.
    pub fn diff(self, next: Self) -> (Self, Self) {
        (next.difference(self), self.difference(next))
    }
}
