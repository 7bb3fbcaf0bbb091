//! Menu bars, context menus and nested submenus.
//!
//! # Example
//!
//! ```
//! use popmenu_widget::core::MenuNode;
//! use popmenu_widget::menu::{BarChild, MenuBar};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Open,
//!     Quit,
//!     Wrap(bool),
//! }
//!
//! let file = MenuNode::submenu("&File", vec![
//!     MenuNode::item("&Open").message(Message::Open).info("Ctrl+O"),
//!     MenuNode::separator(),
//!     MenuNode::item("&Quit").message(Message::Quit),
//! ]);
//!
//! let view = MenuNode::submenu("&View", vec![
//!     MenuNode::check_item("Word &wrap", false)
//!         .on_activate(|_event, checked| Message::Wrap(checked)),
//! ]);
//!
//! let menu_bar = MenuBar::new(vec![
//!     BarChild::Menu(file),
//!     BarChild::Passthrough,
//!     BarChild::Menu(view),
//! ])
//! .expect("both menus are submenus")
//! .mnemonics(true);
//!
//! assert_eq!(menu_bar.menus().len(), 2);
//! ```

mod context_menu;
mod menu_bar;

pub mod item;
pub mod menu_tree;
pub mod mnemonic;
pub mod placement;
pub mod popup;
pub mod style;

pub use context_menu::{Child, ContextMenu};
pub use item::{ItemView, TitleView};
pub use menu_bar::{BarChild, MenuBar};
pub use placement::Placement;
pub use popup::Popup;
pub use style::{Appearance, Overrides};

/// When a menu closes by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseCondition {
    /// Close on a click outside of the menu.
    pub click_outside: bool,
    /// Close once a leaf item is clicked.
    pub click_inside: bool,
    /// Close when the window loses focus.
    pub blur: bool,
}

impl Default for CloseCondition {
    fn default() -> Self {
        Self {
            click_outside: true,
            click_inside: true,
            blur: true,
        }
    }
}
