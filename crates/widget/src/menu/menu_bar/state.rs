//! Menu bar state management

use crate::core::{Listeners, MenuNode};
use crate::menu::popup::Popup;

/// The state of a menu bar and of every menu below it.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct MenuBarState {
    /// Whether a press inside the bar armed it.
    ///
    /// While armed, the active menu is shown.
    pub(crate) open: bool,
    /// The highlighted top-level menu.
    pub(crate) active: Option<usize>,
    /// One root popup per top-level menu.
    pub(crate) menus: Vec<Popup>,
    /// The subscriptions currently held.
    pub(crate) listeners: Listeners,
}

impl MenuBarState {
    pub(crate) fn new<Message>(menus: &[MenuNode<Message>]) -> Self {
        Self {
            menus: menus.iter().map(|menu| Popup::new(menu.children())).collect(),
            ..Self::default()
        }
    }

    /// Shows the active menu if the bar is armed and the menu is enabled,
    /// and hides every other one.
    ///
    /// Siblings are closed before the active menu opens, so at most one
    /// top-level menu is ever open.
    pub(crate) fn sync<Message>(&mut self, menus: &[MenuNode<Message>]) -> bool {
        let mut changed = false;

        for (index, popup) in self.menus.iter_mut().enumerate() {
            if Some(index) != self.active && popup.close() {
                log::debug!("closed menu {index}");
                changed = true;
            }
        }

        let Some(index) = self.active else {
            return changed;
        };

        let shown = self.open && menus.get(index).is_some_and(MenuNode::is_enabled);

        let Some(popup) = self.menus.get_mut(index) else {
            return changed;
        };

        if shown && popup.open() {
            log::debug!("opened menu {index}");
            changed = true;
        } else if !shown && popup.close() {
            log::debug!("closed menu {index}");
            changed = true;
        }

        changed
    }

    /// Disarms the bar, clears the highlight and closes every menu.
    pub(crate) fn collapse(&mut self) -> bool {
        let armed = std::mem::take(&mut self.open);
        let mut changed = self.active.take().is_some() || armed;

        for popup in &mut self.menus {
            changed |= popup.close();
        }

        if changed {
            log::debug!("collapsed menu bar");
        }

        changed
    }

    /// Returns the index of the open top-level menu.
    pub(crate) fn open_menu(&self) -> Option<usize> {
        self.active
            .filter(|&index| self.menus.get(index).is_some_and(Popup::is_open))
    }
}
