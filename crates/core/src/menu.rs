//! Menu model.
//!
//! This module defines the logical tree of a menu: leaf items, checkable
//! items, separators and submenus. Widgets own the tree they are built with
//! and only ever mutate the `checked` state of checkable items.
//!
//! ```
//! use popmenu_core::menu::MenuNode;
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     New,
//!     Wrap(bool),
//! }
//!
//! let file = MenuNode::submenu("&File", vec![
//!     MenuNode::item("&New").message(Message::New),
//!     MenuNode::separator(),
//!     MenuNode::check_item("Word &wrap", false)
//!         .on_activate(|_event, checked| Message::Wrap(checked)),
//! ]);
//!
//! assert_eq!(file.children().len(), 3);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::Event;
use crate::scene::Path;

/// Stable identifier for a menu item.
///
/// By default this is the FNV-1a hash of the item label. Callers that reuse
/// labels across a tree should assign their own identifiers with
/// [`MenuNode::with_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MenuId(pub u64);

impl MenuId {
    /// Creates a new [`MenuId`] from a raw u64 value.
    #[must_use]
    pub const fn from_u64(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw u64 value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Creates a [`MenuId`] by hashing a string at compile time.
    #[must_use]
    pub const fn from_str(s: &str) -> Self {
        Self(fnv1a_hash_bytes(FNV1A_OFFSET, s.as_bytes()))
    }

    /// Derives a deterministic child [`MenuId`] from this ID and a numeric value.
    ///
    /// Useful for generated menus, like a list of recent files.
    #[must_use]
    pub const fn child(self, value: u64) -> Self {
        let hash = fnv1a_hash_bytes(FNV1A_OFFSET, &self.0.to_be_bytes());

        Self(fnv1a_hash_bytes(hash, &value.to_be_bytes()))
    }
}

/// FNV-1a 64-bit offset basis.
const FNV1A_OFFSET: u64 = 0xcbf29ce484222325;

/// FNV-1a 64-bit prime.
const FNV1A_PRIME: u64 = 0x00000100000001B3;

const fn fnv1a_hash_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV1A_PRIME);
        i += 1;
    }
    hash
}

/// The callback of a leaf item.
///
/// It receives the [`Event`] that activated the item and the checked state
/// the item has after the activation, and produces the message published to
/// the [`Shell`](crate::Shell).
pub struct Action<Message>(Rc<dyn Fn(&Event, bool) -> Message>);

impl<Message> Action<Message> {
    /// Creates a new [`Action`] from the given closure.
    pub fn new(f: impl Fn(&Event, bool) -> Message + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invokes the callback.
    pub fn call(&self, event: &Event, checked: bool) -> Message {
        (self.0)(event, checked)
    }
}

impl<Message> Clone for Action<Message> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<Message> fmt::Debug for Action<Message> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

/// A menu node.
#[derive(Debug, Clone)]
pub struct MenuNode<Message> {
    /// Stable identifier of this node.
    pub id: MenuId,
    /// Node contents.
    pub kind: MenuKind<Message>,
}

/// The concrete type of a menu node.
#[derive(Debug, Clone)]
pub enum MenuKind<Message> {
    /// A clickable menu item.
    Item {
        /// Text label. A `&` marks the mnemonic character.
        label: String,
        /// Whether the item can be activated.
        enabled: bool,
        /// The character underlined in the label.
        shortcut: Option<char>,
        /// Secondary text, usually a key binding hint.
        info: Option<String>,
        /// The name of an icon drawn in front of the label.
        icon: Option<String>,
        /// The callback invoked on activation.
        on_activate: Option<Action<Message>>,
    },

    /// A checkbox menu item.
    CheckItem {
        /// Text label. A `&` marks the mnemonic character.
        label: String,
        /// Whether the item can be activated.
        enabled: bool,
        /// Whether the item is checked.
        checked: bool,
        /// The character underlined in the label.
        shortcut: Option<char>,
        /// Secondary text, usually a key binding hint.
        info: Option<String>,
        /// The callback invoked on activation.
        on_activate: Option<Action<Message>>,
    },

    /// A nested submenu.
    ///
    /// Placed directly in a menu bar, it is a top-level menu.
    Submenu {
        /// Text label. A `&` marks the mnemonic character.
        label: String,
        /// Whether the submenu can be opened.
        enabled: bool,
        /// The character underlined in the label.
        shortcut: Option<char>,
        /// Child nodes.
        children: Vec<MenuNode<Message>>,
    },

    /// A separator line.
    Separator,
}

impl<Message> MenuNode<Message> {
    /// Creates a clickable menu item.
    #[must_use]
    pub fn item(label: impl Into<String>) -> Self {
        let label = label.into();

        Self {
            id: MenuId::from_str(&label),
            kind: MenuKind::Item {
                label,
                enabled: true,
                shortcut: None,
                info: None,
                icon: None,
                on_activate: None,
            },
        }
    }

    /// Creates a checkbox menu item with its initial checked state.
    #[must_use]
    pub fn check_item(label: impl Into<String>, checked: bool) -> Self {
        let label = label.into();

        Self {
            id: MenuId::from_str(&label),
            kind: MenuKind::CheckItem {
                label,
                enabled: true,
                checked,
                shortcut: None,
                info: None,
                on_activate: None,
            },
        }
    }

    /// Creates a submenu.
    #[must_use]
    pub fn submenu(label: impl Into<String>, children: Vec<MenuNode<Message>>) -> Self {
        let label = label.into();

        Self {
            id: MenuId::from_str(&label),
            kind: MenuKind::Submenu {
                label,
                enabled: true,
                shortcut: None,
                children,
            },
        }
    }

    /// Creates a separator.
    #[must_use]
    pub fn separator() -> Self {
        Self {
            id: MenuId::from_str("separator"),
            kind: MenuKind::Separator,
        }
    }

    /// Replaces the identifier of this node.
    #[must_use]
    pub fn with_id(mut self, id: MenuId) -> Self {
        self.id = id;
        self
    }

    /// Sets the callback invoked when this item is activated.
    ///
    /// This only has an effect on `Item` and `CheckItem` nodes.
    #[must_use]
    pub fn on_activate(mut self, f: impl Fn(&Event, bool) -> Message + 'static) -> Self {
        match &mut self.kind {
            MenuKind::Item { on_activate, .. } | MenuKind::CheckItem { on_activate, .. } => {
                *on_activate = Some(Action::new(f));
            }
            MenuKind::Submenu { .. } | MenuKind::Separator => {}
        }
        self
    }

    /// Publishes a clone of `message` when this item is activated.
    #[must_use]
    pub fn message(self, message: Message) -> Self
    where
        Message: Clone + 'static,
    {
        self.on_activate(move |_, _| message.clone())
    }

    /// Sets whether this node is enabled.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.set_enabled(enabled);
        self
    }

    /// Sets the character underlined in the label.
    ///
    /// Overrides a `&` marker in the label.
    #[must_use]
    pub fn shortcut(mut self, c: char) -> Self {
        match &mut self.kind {
            MenuKind::Item { shortcut, .. }
            | MenuKind::CheckItem { shortcut, .. }
            | MenuKind::Submenu { shortcut, .. } => *shortcut = Some(c),
            MenuKind::Separator => {}
        }
        self
    }

    /// Sets the secondary text of an item.
    #[must_use]
    pub fn info(mut self, text: impl Into<String>) -> Self {
        match &mut self.kind {
            MenuKind::Item { info, .. } | MenuKind::CheckItem { info, .. } => {
                *info = Some(text.into());
            }
            MenuKind::Submenu { .. } | MenuKind::Separator => {}
        }
        self
    }

    /// Sets the icon of a plain item.
    #[must_use]
    pub fn icon(mut self, name: impl Into<String>) -> Self {
        if let MenuKind::Item { icon, .. } = &mut self.kind {
            *icon = Some(name.into());
        }
        self
    }

    /// Returns the raw label, mnemonic marker included.
    pub fn label(&self) -> Option<&str> {
        match &self.kind {
            MenuKind::Item { label, .. }
            | MenuKind::CheckItem { label, .. }
            | MenuKind::Submenu { label, .. } => Some(label),
            MenuKind::Separator => None,
        }
    }

    /// Returns the explicit shortcut character, if any.
    pub fn shortcut_char(&self) -> Option<char> {
        match &self.kind {
            MenuKind::Item { shortcut, .. }
            | MenuKind::CheckItem { shortcut, .. }
            | MenuKind::Submenu { shortcut, .. } => *shortcut,
            MenuKind::Separator => None,
        }
    }

    /// Returns the secondary text, if any.
    pub fn info_text(&self) -> Option<&str> {
        match &self.kind {
            MenuKind::Item { info, .. } | MenuKind::CheckItem { info, .. } => info.as_deref(),
            MenuKind::Submenu { .. } | MenuKind::Separator => None,
        }
    }

    /// Returns the icon name, if any.
    pub fn icon_name(&self) -> Option<&str> {
        match &self.kind {
            MenuKind::Item { icon, .. } => icon.as_deref(),
            _ => None,
        }
    }

    /// Returns the activation callback, if any.
    pub fn action(&self) -> Option<&Action<Message>> {
        match &self.kind {
            MenuKind::Item { on_activate, .. } | MenuKind::CheckItem { on_activate, .. } => {
                on_activate.as_ref()
            }
            MenuKind::Submenu { .. } | MenuKind::Separator => None,
        }
    }

    /// Returns whether the node reacts to activation.
    ///
    /// Separators are never enabled.
    pub fn is_enabled(&self) -> bool {
        match &self.kind {
            MenuKind::Item { enabled, .. }
            | MenuKind::CheckItem { enabled, .. }
            | MenuKind::Submenu { enabled, .. } => *enabled,
            MenuKind::Separator => false,
        }
    }

    /// Enables or disables the node.
    pub fn set_enabled(&mut self, value: bool) {
        match &mut self.kind {
            MenuKind::Item { enabled, .. }
            | MenuKind::CheckItem { enabled, .. }
            | MenuKind::Submenu { enabled, .. } => *enabled = value,
            MenuKind::Separator => {}
        }
    }

    /// Returns true if the node is a separator.
    pub fn is_separator(&self) -> bool {
        matches!(self.kind, MenuKind::Separator)
    }

    /// Returns true if the node is a submenu.
    pub fn is_submenu(&self) -> bool {
        matches!(self.kind, MenuKind::Submenu { .. })
    }

    /// Returns true if the node is a checkbox item.
    pub fn is_checkable(&self) -> bool {
        matches!(self.kind, MenuKind::CheckItem { .. })
    }

    /// Returns whether a checkbox item is checked.
    ///
    /// Other nodes are never checked.
    pub fn is_checked(&self) -> bool {
        matches!(self.kind, MenuKind::CheckItem { checked: true, .. })
    }

    /// Sets the checked state of a checkbox item.
    pub fn set_checked(&mut self, value: bool) {
        if let MenuKind::CheckItem { checked, .. } = &mut self.kind {
            *checked = value;
        }
    }

    /// Returns the children of a submenu.
    pub fn children(&self) -> &[MenuNode<Message>] {
        match &self.kind {
            MenuKind::Submenu { children, .. } => children,
            _ => &[],
        }
    }

    /// Returns the children of a submenu, mutably.
    pub fn children_mut(&mut self) -> &mut [MenuNode<Message>] {
        match &mut self.kind {
            MenuKind::Submenu { children, .. } => children,
            _ => &mut [],
        }
    }
}

/// Returns the node at the given path.
pub fn node_at<'a, Message>(
    items: &'a [MenuNode<Message>],
    path: &[usize],
) -> Option<&'a MenuNode<Message>> {
    let (&last, parents) = path.split_last()?;
    let mut items = items;

    for &index in parents {
        items = items.get(index)?.children();
    }

    items.get(last)
}

/// Returns the node at the given path, mutably.
pub fn node_at_mut<'a, Message>(
    items: &'a mut [MenuNode<Message>],
    path: &[usize],
) -> Option<&'a mut MenuNode<Message>> {
    let (&last, parents) = path.split_last()?;
    let mut items = items;

    for &index in parents {
        items = items.get_mut(index)?.children_mut();
    }

    items.get_mut(last)
}

/// Returns the path of the first node with the given identifier, searching
/// depth-first.
pub fn find_path<Message>(items: &[MenuNode<Message>], id: MenuId) -> Option<Path> {
    for (index, node) in items.iter().enumerate() {
        if node.id == id {
            return Some(vec![index]);
        }

        if let Some(mut path) = find_path(node.children(), id) {
            path.insert(0, index);
            return Some(path);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<MenuNode<u8>> {
        vec![
            MenuNode::item("Open").message(1),
            MenuNode::submenu(
                "Recent",
                vec![
                    MenuNode::item("a.txt").message(2),
                    MenuNode::check_item("Pinned", true),
                ],
            ),
        ]
    }

    #[test]
    fn test_menu_id_from_str_is_stable() {
        assert_eq!(MenuId::from_str("Open"), MenuId::from_str("Open"));
        assert_ne!(MenuId::from_str("Open"), MenuId::from_str("Close"));
        assert_ne!(MenuId::from_str("x").child(0), MenuId::from_str("x").child(1));
    }

    #[test]
    fn test_node_at_nested() {
        let items = tree();

        assert_eq!(node_at(&items, &[1, 0]).and_then(MenuNode::label), Some("a.txt"));
        assert!(node_at(&items, &[1, 1]).is_some_and(MenuNode::is_checked));
        assert!(node_at(&items, &[0, 0]).is_none());
        assert!(node_at(&items, &[]).is_none());
    }

    #[test]
    fn test_find_path_depth_first() {
        let items = tree();

        assert_eq!(find_path(&items, MenuId::from_str("Pinned")), Some(vec![1, 1]));
        assert_eq!(find_path(&items, MenuId::from_str("missing")), None);
    }

    #[test]
    fn test_set_checked_ignores_plain_items() {
        let mut items = tree();

        if let Some(node) = node_at_mut(&mut items, &[0]) {
            node.set_checked(true);
        }

        assert!(!items[0].is_checked());
    }

    #[test]
    fn test_action_receives_checked_state() {
        let node = MenuNode::check_item("Wrap", false).on_activate(|_, checked| checked);
        let event = Event::Window(crate::window::Event::Focused);

        assert_eq!(node.action().map(|action| action.call(&event, true)), Some(true));
    }
}
