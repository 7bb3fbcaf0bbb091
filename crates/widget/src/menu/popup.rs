//! The state of a single popup list.

use crate::core::{MenuNode, Point};

/// The observable state of a [`Popup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The popup is not shown.
    Closed,
    /// The popup is shown and no child is highlighted.
    Open,
    /// The popup is shown and the given child is highlighted.
    Active(usize),
}

/// The state of a popup and of the submenus below it.
///
/// A [`Popup`] mirrors the shape of the items it was created for: every
/// submenu child owns a nested [`Popup`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Popup {
    open: bool,
    active: Option<usize>,
    position: Point,
    placed: bool,
    submenus: Vec<Option<Popup>>,
}

impl Popup {
    /// Creates a closed [`Popup`] for the given items.
    pub fn new<Message>(items: &[MenuNode<Message>]) -> Self {
        Self {
            submenus: items
                .iter()
                .map(|item| item.is_submenu().then(|| Popup::new(item.children())))
                .collect(),
            ..Self::default()
        }
    }

    /// Returns the [`Status`] of the popup.
    pub fn status(&self) -> Status {
        match (self.open, self.active) {
            (false, _) => Status::Closed,
            (true, None) => Status::Open,
            (true, Some(index)) => Status::Active(index),
        }
    }

    /// Returns whether the popup is shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the highlighted child, if any.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Returns the last resolved position.
    ///
    /// It is only meaningful while the popup is open.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns whether the position was resolved since the popup opened.
    pub fn is_placed(&self) -> bool {
        self.placed
    }

    pub(crate) fn place(&mut self, position: Point) {
        self.position = position;
        self.placed = true;
    }

    /// Returns the popup of the submenu at `index`, if that child is a
    /// submenu.
    pub fn submenu(&self, index: usize) -> Option<&Popup> {
        self.submenus.get(index).and_then(Option::as_ref)
    }

    pub(crate) fn submenu_mut(&mut self, index: usize) -> Option<&mut Popup> {
        self.submenus.get_mut(index).and_then(Option::as_mut)
    }

    /// Returns the open submenu of the highlighted child, if any.
    pub fn open_submenu(&self) -> Option<&Popup> {
        self.active
            .and_then(|index| self.submenu(index))
            .filter(|popup| popup.open)
    }

    pub(crate) fn open_submenu_mut(&mut self) -> Option<&mut Popup> {
        let index = self.active?;

        self.submenu_mut(index).filter(|popup| popup.open)
    }

    /// Returns true if a submenu of the highlighted child is open.
    pub fn has_open_submenu(&self) -> bool {
        self.open_submenu().is_some()
    }

    /// Returns true if this popup or any popup below it is open.
    pub fn is_any_open(&self) -> bool {
        self.open || self.submenus.iter().flatten().any(Popup::is_any_open)
    }

    /// Shows the popup with no highlighted child.
    ///
    /// Returns `false` if it was already open.
    pub fn open(&mut self) -> bool {
        if self.open {
            return false;
        }

        self.open = true;
        self.active = None;
        self.placed = false;

        true
    }

    /// Hides the popup and every submenu below it.
    ///
    /// Returns `false` if nothing was open.
    pub fn close(&mut self) -> bool {
        let mut changed = std::mem::take(&mut self.open);
        self.active = None;

        for submenu in self.submenus.iter_mut().flatten() {
            changed |= submenu.close();
        }

        changed
    }

    /// Highlights the child at `index`.
    ///
    /// The submenu of the previously highlighted child is closed, and an
    /// enabled submenu child gets its popup opened. Highlighting the current
    /// child again only reopens its submenu if it was closed in between.
    ///
    /// Returns `false` if nothing changed.
    pub fn select<Message>(&mut self, index: usize, items: &[MenuNode<Message>]) -> bool {
        let Some(item) = items.get(index) else {
            return false;
        };

        if !self.open || item.is_separator() {
            return false;
        }

        if self.active == Some(index) {
            return item.is_enabled()
                && self.submenu_mut(index).is_some_and(Popup::open);
        }

        if let Some(previous) = self.active.and_then(|active| self.submenu_mut(active)) {
            let _ = previous.close();
        }

        self.active = Some(index);

        if item.is_enabled() {
            if let Some(submenu) = self.submenu_mut(index) {
                let _ = submenu.open();
            }
        }

        true
    }

    /// Removes the highlight, closing the submenu of the highlighted child.
    pub fn deselect(&mut self) -> bool {
        if let Some(submenu) = self.open_submenu_mut() {
            let _ = submenu.close();
        }

        self.active.take().is_some()
    }

    /// Moves the highlight by `delta` children, wrapping around and skipping
    /// separators.
    ///
    /// With nothing highlighted, a forward step lands on the first child and
    /// a backward step on the last one.
    pub fn step<Message>(&mut self, delta: isize, items: &[MenuNode<Message>]) -> bool {
        if !self.open || items.iter().all(MenuNode::is_separator) {
            return false;
        }

        let len = items.len();
        let mut index = match self.active {
            Some(current) => wrap(current, delta, len),
            None if delta >= 0 => 0,
            None => len - 1,
        };

        while items[index].is_separator() {
            index = wrap(index, delta.signum(), len);
        }

        self.select(index, items)
    }
}

/// Cycles `current` by `delta` within `0..len`.
///
/// `len` must not be zero.
pub fn wrap(current: usize, delta: isize, len: usize) -> usize {
    let len = len as isize;

    (current as isize + delta).rem_euclid(len) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<MenuNode<()>> {
        vec![
            MenuNode::item("Cut"),
            MenuNode::separator(),
            MenuNode::submenu(
                "More",
                vec![
                    MenuNode::item("One"),
                    MenuNode::submenu("Deeper", vec![MenuNode::item("Two")]),
                ],
            ),
            MenuNode::item("Paste").enabled(false),
        ]
    }

    fn opened(items: &[MenuNode<()>]) -> Popup {
        let mut popup = Popup::new(items);
        let _ = popup.open();
        popup
    }

    #[test]
    fn test_status_transitions() {
        let items = items();
        let mut popup = Popup::new(&items);
        assert_eq!(popup.status(), Status::Closed);

        assert!(popup.open());
        assert!(!popup.open());
        assert_eq!(popup.status(), Status::Open);

        assert!(popup.select(0, &items));
        assert_eq!(popup.status(), Status::Active(0));

        assert!(popup.close());
        assert!(!popup.close());
        assert_eq!(popup.status(), Status::Closed);
    }

    #[test]
    fn test_select_is_idempotent() {
        let items = items();
        let mut popup = opened(&items);

        assert!(popup.select(2, &items));
        let first = popup.clone();

        assert!(!popup.select(2, &items));
        assert_eq!(popup, first);
    }

    #[test]
    fn test_select_opens_submenu_without_closing_parent() {
        let items = items();
        let mut popup = opened(&items);

        assert!(popup.select(2, &items));
        assert!(popup.is_open());
        assert_eq!(popup.submenu(2).map(Popup::status), Some(Status::Open));
        assert!(popup.has_open_submenu());
    }

    #[test]
    fn test_select_sibling_closes_previous_submenu() {
        let items = items();
        let mut popup = opened(&items);

        assert!(popup.select(2, &items));
        assert!(popup.select(0, &items));

        assert_eq!(popup.submenu(2).map(Popup::status), Some(Status::Closed));
        assert!(!popup.has_open_submenu());
    }

    #[test]
    fn test_select_ignores_separators_and_closed_popups() {
        let items = items();
        let mut popup = Popup::new(&items);

        assert!(!popup.select(0, &items));

        let _ = popup.open();
        assert!(!popup.select(1, &items));
        assert!(!popup.select(9, &items));
        assert_eq!(popup.status(), Status::Open);
    }

    #[test]
    fn test_reselect_reopens_closed_submenu() {
        let items = items();
        let mut popup = opened(&items);

        assert!(popup.select(2, &items));
        if let Some(submenu) = popup.submenu_mut(2) {
            let _ = submenu.close();
        }

        assert!(popup.select(2, &items));
        assert!(popup.has_open_submenu());
    }

    #[test]
    fn test_close_cascades() {
        let items = items();
        let mut popup = opened(&items);

        assert!(popup.select(2, &items));
        if let Some(more) = popup.submenu_mut(2) {
            assert!(more.select(1, items[2].children()));
        }
        assert!(popup.submenu(2).and_then(|more| more.submenu(1)).is_some_and(Popup::is_open));

        assert!(popup.close());
        assert!(!popup.is_any_open());
        assert_eq!(popup.submenu(2).and_then(Popup::active), None);
    }

    #[test]
    fn test_step_wraps_and_skips_separators() {
        let items = items();
        let mut popup = opened(&items);

        assert!(popup.step(1, &items));
        assert_eq!(popup.active(), Some(0));

        assert!(popup.step(1, &items));
        assert_eq!(popup.active(), Some(2));

        assert!(popup.step(1, &items));
        assert_eq!(popup.active(), Some(3));

        assert!(popup.step(1, &items));
        assert_eq!(popup.active(), Some(0));

        assert!(popup.step(-1, &items));
        assert_eq!(popup.active(), Some(3));
    }

    #[test]
    fn test_step_backward_from_nothing_selects_last() {
        let items = items();
        let mut popup = opened(&items);

        assert!(popup.step(-1, &items));
        assert_eq!(popup.active(), Some(3));
    }

    #[test]
    fn test_disabled_submenu_is_highlighted_but_not_opened() {
        let items = vec![MenuNode::<()>::submenu("Off", vec![MenuNode::item("x")]).enabled(false)];
        let mut popup = opened(&items);

        assert!(popup.select(0, &items));
        assert_eq!(popup.active(), Some(0));
        assert!(!popup.has_open_submenu());
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(0, 1, 3), 1);
        assert_eq!(wrap(2, 1, 3), 0);
        assert_eq!(wrap(0, -1, 3), 2);
    }
}
