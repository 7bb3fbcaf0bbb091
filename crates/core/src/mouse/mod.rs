//! Handle mouse events.
mod button;
mod event;

pub use button::Button;
pub use event::Event;
