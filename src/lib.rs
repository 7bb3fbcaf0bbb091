//! popmenu is a headless popup menu toolkit: context menus, menu bars and
//! cascading submenus.
//!
//! The widgets own the interaction state and the viewport-aware placement
//! of every popup. Drawing is left to a renderer, which reports what it drew
//! as a [`Scene`] and answers geometry queries through [`Measure`].
//!
//! # Overview
//!
//! A host drives a [`Widget`] in cycles:
//!
//! 1. It forwards every input [`Event`] to [`Widget::update`], together with
//!    the last rendered [`Scene`].
//! 2. It calls [`Widget::build`] and renders the resulting [`Scene`].
//! 3. It calls [`Widget::layout`], so freshly opened popups get positioned,
//!    and renders again with the new positions.
//!
//! Document-wide subscriptions are reported through [`Shell::listen`] and
//! must be attached by the host only while the widget holds them.
//!
//! ```
//! use popmenu::menu::{Child, ContextMenu};
//! use popmenu::{Listeners, MenuNode, Widget};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Copy,
//! }
//!
//! let context_menu = ContextMenu::new(vec![
//!     Child::Trigger,
//!     Child::Menu(vec![MenuNode::item("&Copy").message(Message::Copy)]),
//! ])
//! .expect("one trigger and one menu");
//!
//! assert_eq!(context_menu.listeners(), Listeners::empty());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use popmenu_core as core;
pub use popmenu_widget as widget;

pub use crate::core::event;
pub use crate::core::keyboard;
pub use crate::core::mouse;
pub use crate::core::window;
pub use crate::core::{
    Color, Event, Listeners, Measure, MenuId, MenuKind, MenuNode, NodeId, Point, Rectangle,
    Scene, Shell, Size, Slot, Vector, Widget,
};
pub use crate::widget::{Error, menu};

/// The result of building a menu widget.
pub type Result<T> = std::result::Result<T, Error>;
