//! A horizontal bar of drop-down menus.
//!
//! A primary press anywhere inside the bar arms it. While armed, the
//! highlighted title shows its menu and hovering another title switches to
//! it. A click outside the bar, a window blur or `Escape` at the top level
//! disarms it again.

mod state;
mod widget;

use crate::Error;
use crate::core::menu::{self, MenuId, MenuNode};
use crate::core::widget::Id;
use crate::core::{Listeners, Point};
use crate::menu::CloseCondition;
use crate::menu::item::{ItemView, TitleView};
use crate::menu::menu_tree;
use crate::menu::popup::Popup;
use crate::menu::style::{Appearance, Overrides};

use state::MenuBarState;

/// A child of a [`MenuBar`].
#[derive(Debug)]
pub enum BarChild<Message> {
    /// A top-level menu. It must be a submenu.
    Menu(MenuNode<Message>),
    /// Caller content shown among the titles.
    ///
    /// It is skipped by keyboard navigation and never opens anything.
    Passthrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    /// A title, by menu index.
    Title(usize),
    /// Passthrough content, by child position.
    Content(usize),
}

/// A horizontal bar of titles, each opening a drop-down menu.
///
/// Menus are indexed in the order they were given, ignoring passthrough
/// children.
#[derive(Debug)]
pub struct MenuBar<Message> {
    id: Id,
    menus: Vec<MenuNode<Message>>,
    entries: Vec<Entry>,
    state: MenuBarState,
    close_condition: CloseCondition,
    mnemonics: bool,
    style: Overrides,
}

impl<Message> MenuBar<Message> {
    /// Creates a new [`MenuBar`] with the given children.
    ///
    /// Fails if a [`BarChild::Menu`] is not a submenu.
    pub fn new(children: Vec<BarChild<Message>>) -> Result<Self, Error> {
        let mut menus = Vec::new();
        let mut entries = Vec::with_capacity(children.len());

        for (index, child) in children.into_iter().enumerate() {
            match child {
                BarChild::Menu(menu) if menu.is_submenu() => {
                    entries.push(Entry::Title(menus.len()));
                    menus.push(menu);
                }
                BarChild::Menu(_) => return Err(Error::NotAMenu { index }),
                BarChild::Passthrough => entries.push(Entry::Content(index)),
            }
        }

        Ok(Self {
            id: Id::unique(),
            state: MenuBarState::new(&menus),
            menus,
            entries,
            close_condition: CloseCondition::default(),
            mnemonics: false,
            style: Overrides::default(),
        })
    }

    /// Sets the [`CloseCondition`] of the [`MenuBar`].
    #[must_use]
    pub fn close_condition(mut self, close_condition: CloseCondition) -> Self {
        self.close_condition = close_condition;
        self
    }

    /// Sets whether `Alt` plus a shortcut character opens a menu.
    ///
    /// Enabling mnemonics keeps a key subscription even while the bar is
    /// closed.
    #[must_use]
    pub fn mnemonics(mut self, enabled: bool) -> Self {
        self.mnemonics = enabled;
        self.state.listeners = self.desired_listeners();
        self
    }

    /// Sets the style [`Overrides`] of the [`MenuBar`].
    #[must_use]
    pub fn style(mut self, style: Overrides) -> Self {
        self.style = style;
        self
    }

    /// Returns the top-level menus.
    pub fn menus(&self) -> &[MenuNode<Message>] {
        &self.menus
    }

    /// Returns whether the bar is armed.
    pub fn is_open(&self) -> bool {
        self.state.open
    }

    /// Returns the highlighted top-level menu.
    pub fn active(&self) -> Option<usize> {
        self.state.active
    }

    /// Returns the root [`Popup`] of a top-level menu.
    pub fn menu(&self, index: usize) -> Option<&Popup> {
        self.state.menus.get(index)
    }

    /// Returns the path of the highlighted item, starting with the index of
    /// its top-level menu.
    pub fn active_path(&self) -> Option<Vec<usize>> {
        let index = self.state.open_menu()?;
        let mut path = menu_tree::active_path(self.state.menus.get(index)?)?;

        path.insert(0, index);
        Some(path)
    }

    /// Returns the position of the open popup owned by the item at `path`.
    ///
    /// A single index names a top-level menu, placed relative to its title.
    pub fn position(&self, path: &[usize]) -> Option<Point> {
        let (&index, rest) = path.split_first()?;

        menu_tree::popup_at(self.state.menus.get(index)?, rest)
            .filter(|popup| popup.is_open())
            .map(Popup::position)
    }

    /// Describes the title of a top-level menu.
    pub fn title_view(&self, index: usize) -> Option<TitleView> {
        let menu = self.menus.get(index)?;

        Some(TitleView::new(
            menu,
            self.state.active == Some(index),
            &self.style,
        ))
    }

    /// Describes the item at `path`.
    pub fn item_view(&self, path: &[usize]) -> Option<ItemView> {
        let node = menu::node_at(&self.menus, path)?;
        let (&last, parent) = path.split_last()?;
        let (&index, rest) = parent.split_first()?;
        let popup = menu_tree::popup_at(self.state.menus.get(index)?, rest)?;

        Some(ItemView::new(node, popup.active() == Some(last), &self.style))
    }

    /// Resolves the appearance of the popup lists.
    pub fn list_appearance(&self) -> Appearance {
        self.style.list()
    }

    /// Enables or disables the node with the given identifier.
    ///
    /// Returns `false` if no such node exists.
    ///
    /// Disabling a menu that is shown closes it.
    pub fn set_enabled(&mut self, id: MenuId, enabled: bool) -> bool {
        let Some(path) = menu::find_path(&self.menus, id) else {
            return false;
        };

        let Some(node) = menu::node_at_mut(&mut self.menus, &path) else {
            return false;
        };

        node.set_enabled(enabled);

        if !enabled {
            match path.split_first() {
                Some((_, [])) => {
                    let _ = self.state.sync(&self.menus);
                }
                Some((&index, rest)) => {
                    if let Some(popup) = self.state.menus.get_mut(index) {
                        let _ = menu_tree::close_at(popup, rest);
                    }
                }
                None => {}
            }
        }

        true
    }

    /// Sets the checked state of the checkable node with the given
    /// identifier.
    ///
    /// Returns `false` if no such node exists.
    pub fn set_checked(&mut self, id: MenuId, checked: bool) -> bool {
        match menu::find_path(&self.menus, id).and_then(|path| menu::node_at_mut(&mut self.menus, &path)) {
            Some(node) if node.is_checkable() => {
                node.set_checked(checked);
                true
            }
            _ => false,
        }
    }

    fn desired_listeners(&self) -> Listeners {
        if self.state.open {
            let mut listeners = Listeners::KEY_DOWN;

            if self.close_condition.click_outside {
                listeners |= Listeners::CLICK;
            }

            if self.close_condition.blur {
                listeners |= Listeners::BLUR;
            }

            listeners
        } else if self.mnemonics {
            Listeners::KEY_DOWN
        } else {
            Listeners::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Widget;

    #[test]
    fn test_new_rejects_leaf_child() {
        let result = MenuBar::<()>::new(vec![
            BarChild::Menu(MenuNode::submenu("File", vec![])),
            BarChild::Passthrough,
            BarChild::Menu(MenuNode::item("Quit")),
        ]);

        assert_eq!(result.err(), Some(Error::NotAMenu { index: 2 }));
    }

    #[test]
    fn test_passthrough_is_not_indexed() {
        let Ok(bar) = MenuBar::<()>::new(vec![
            BarChild::Passthrough,
            BarChild::Menu(MenuNode::submenu("File", vec![])),
            BarChild::Menu(MenuNode::submenu("Edit", vec![])),
        ]) else {
            panic!("valid menu bar");
        };

        assert_eq!(bar.menus().len(), 2);
        assert_eq!(
            bar.entries,
            vec![Entry::Content(0), Entry::Title(0), Entry::Title(1)]
        );
        assert_eq!(bar.listeners(), Listeners::empty());
    }

    #[test]
    fn test_mnemonics_hold_key_subscription() {
        let Ok(bar) = MenuBar::<()>::new(vec![BarChild::Menu(MenuNode::submenu("&File", vec![]))])
        else {
            panic!("valid menu bar");
        };

        assert_eq!(bar.mnemonics(true).listeners(), Listeners::KEY_DOWN);
    }

    #[test]
    fn test_disabling_shown_menu_closes_it() {
        let Ok(mut bar) = MenuBar::<()>::new(vec![BarChild::Menu(MenuNode::submenu(
            "Edit",
            vec![MenuNode::submenu("Find", vec![MenuNode::item("Next")])],
        ))]) else {
            panic!("valid menu bar");
        };

        bar.state.open = true;
        bar.state.active = Some(0);
        let _ = bar.state.sync(&bar.menus);
        let _ = menu_tree::hover(&mut bar.state.menus[0], bar.menus[0].children(), &[0]);
        assert_eq!(bar.position(&[0, 0]), Some(Point::ORIGIN));

        assert!(bar.set_enabled(MenuId::from_str("Find"), false));
        assert_eq!(bar.position(&[0, 0]), None);
        assert_eq!(bar.position(&[0]), Some(Point::ORIGIN));

        assert!(bar.set_enabled(MenuId::from_str("Edit"), false));
        assert_eq!(bar.position(&[0]), None);
        assert!(bar.is_open());
        assert_eq!(bar.active(), Some(0));
    }

    #[test]
    fn test_set_checked_by_id() {
        let Ok(mut bar) = MenuBar::<()>::new(vec![BarChild::Menu(MenuNode::submenu(
            "View",
            vec![MenuNode::check_item("Grid", false), MenuNode::item("Zoom")],
        ))]) else {
            panic!("valid menu bar");
        };

        assert!(bar.set_checked(MenuId::from_str("Grid"), true));
        assert!(!bar.set_checked(MenuId::from_str("Zoom"), true));
        assert!(!bar.set_enabled(MenuId::from_str("missing"), false));
        assert!(bar.menus()[0].children()[0].is_checked());
    }
}
