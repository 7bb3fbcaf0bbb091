//! The core library of [popmenu].
//!
//! This library holds basic types that can be reused and re-exported in
//! different menu implementations: geometry, input events, the menu model,
//! and the contracts a renderer fulfills to host a menu widget.
//!
//! [popmenu]: https://docs.rs/popmenu
pub mod event;
pub mod keyboard;
pub mod listeners;
pub mod menu;
pub mod mouse;
pub mod scene;
pub mod widget;
pub mod window;

mod color;
mod measure;
mod point;
mod rectangle;
mod shell;
mod size;
mod vector;

pub use color::Color;
pub use event::Event;
pub use listeners::Listeners;
pub use measure::Measure;
pub use menu::{MenuId, MenuKind, MenuNode};
pub use point::Point;
pub use rectangle::Rectangle;
pub use scene::{NodeId, Scene, Slot};
pub use shell::Shell;
pub use size::Size;
pub use vector::Vector;
pub use widget::Widget;
