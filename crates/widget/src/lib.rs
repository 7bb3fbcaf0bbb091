//! Popup menu widgets: menu bars, context menus and nested submenus.
//!
//! The widgets are headless. A host feeds them [`Event`]s together with the
//! rendered [`Scene`] and its [`Measure`]ments, and draws what they
//! [`build`](core::Widget::build).
//!
//! [`Event`]: core::Event
//! [`Scene`]: core::Scene
//! [`Measure`]: core::Measure
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use popmenu_core as core;

pub mod menu;

mod error;

pub use error::Error;
pub use menu::{BarChild, Child, CloseCondition, ContextMenu, MenuBar};
