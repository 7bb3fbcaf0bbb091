//! Listen to keyboard events.
mod event;
mod key;
mod modifiers;

pub use event::Event;
pub use key::{Key, Named};
pub use modifiers::Modifiers;
