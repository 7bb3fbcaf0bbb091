//! Coordination of nested popups.
//!
//! A root [`Popup`] and the items it was created for form one menu tree.
//! These helpers route hover, keyboard and activation through the tree and
//! keep the open submenus along a single chain of highlighted children.

use crate::core::keyboard::{Key, Named};
use crate::core::menu::{self, MenuNode};
use crate::core::scene::Path;
use crate::core::{Event, Measure, NodeId, Point, Scene, Shell, Slot, widget};
use crate::menu::placement::{self, Placement};
use crate::menu::popup::Popup;

/// The outcome of a key press inside a menu tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Navigation {
    /// The tree handled the key.
    Handled,
    /// The leaf at the given path, relative to the root, must be activated.
    Activate(Path),
    /// The whole tree must be closed.
    CloseAll,
    /// The key concerns the owner of the tree.
    Unhandled,
}

/// The outcome of activating an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Activation {
    /// Nothing happened: the item is disabled, a separator or missing.
    Ignored,
    /// The item is a submenu; it opens instead of firing.
    Submenu,
    /// A leaf fired.
    Leaf,
}

/// Returns the children of the submenu at `path`, or `items` for the root.
pub(crate) fn items_at<'a, Message>(
    items: &'a [MenuNode<Message>],
    path: &[usize],
) -> &'a [MenuNode<Message>] {
    if path.is_empty() {
        items
    } else {
        menu::node_at(items, path)
            .map(MenuNode::children)
            .unwrap_or_default()
    }
}

/// Returns the popup of the submenu at `path`, or `root` itself.
pub(crate) fn popup_at<'a>(root: &'a Popup, path: &[usize]) -> Option<&'a Popup> {
    path.iter()
        .try_fold(root, |popup, &index| popup.submenu(index))
}

pub(crate) fn popup_at_mut<'a>(root: &'a mut Popup, path: &[usize]) -> Option<&'a mut Popup> {
    path.iter()
        .try_fold(root, |popup, &index| popup.submenu_mut(index))
}

/// Returns the path to the deepest open popup, following highlighted
/// children whose submenus are open.
pub fn open_path(root: &Popup) -> Path {
    let mut path = Vec::new();
    let mut popup = root;

    while let Some(index) = popup.active() {
        let Some(submenu) = popup.open_submenu() else {
            break;
        };

        path.push(index);
        popup = submenu;
    }

    path
}

/// Returns the path of the highlighted item in the deepest open popup.
pub fn active_path(root: &Popup) -> Option<Path> {
    let mut path = open_path(root);
    let deepest = popup_at(root, &path)?;

    match deepest.active() {
        Some(index) => {
            path.push(index);
            Some(path)
        }
        None if path.is_empty() => None,
        None => Some(path),
    }
}

/// Highlights the item at `path` if its popup is open.
pub(crate) fn hover<Message>(root: &mut Popup, items: &[MenuNode<Message>], path: &[usize]) -> bool {
    let Some((&index, parent)) = path.split_last() else {
        return false;
    };

    let Some(popup) = popup_at_mut(root, parent).filter(|popup| popup.is_open()) else {
        return false;
    };

    let changed = popup.select(index, items_at(items, parent));

    if changed {
        log::trace!("hover {path:?}");
    }

    changed
}

/// Hides the popup owned by the item at `path`, along with its submenus.
pub(crate) fn close_at(root: &mut Popup, path: &[usize]) -> bool {
    let changed = popup_at_mut(root, path).is_some_and(Popup::close);

    if changed {
        log::debug!("closed submenu {path:?}");
    }

    changed
}

/// Opens the submenu of the child at `index` and highlights its first
/// selectable child.
fn enter<Message>(popup: &mut Popup, index: usize, children: &[MenuNode<Message>]) {
    if let Some(submenu) = popup.submenu_mut(index) {
        let _ = submenu.open();

        if submenu.active().is_none() {
            let _ = submenu.step(1, children);
        }
    }
}

/// Routes a key press through the tree.
///
/// The deepest open popup receives the key. Horizontal keys fall through to
/// the owner only while no submenu is open.
pub(crate) fn on_key<Message>(root: &mut Popup, items: &[MenuNode<Message>], key: &Key) -> Navigation {
    let depth = open_path(root);

    let Some(deepest) = popup_at_mut(root, &depth) else {
        return Navigation::Unhandled;
    };

    let children = items_at(items, &depth);
    let enterable = |index: usize| {
        children
            .get(index)
            .is_some_and(|child| child.is_submenu() && child.is_enabled())
    };

    let Key::Named(named) = key.as_ref() else {
        return Navigation::Unhandled;
    };

    match named {
        Named::Escape => {
            if depth.is_empty() {
                return Navigation::CloseAll;
            }

            let _ = deepest.close();
        }
        Named::ArrowDown => {
            let _ = deepest.step(1, children);
        }
        Named::ArrowUp => {
            let _ = deepest.step(-1, children);
        }
        Named::Home => {
            let _ = deepest.deselect();
            let _ = deepest.step(1, children);
        }
        Named::End => {
            let _ = deepest.deselect();
            let _ = deepest.step(-1, children);
        }
        Named::ArrowRight => match deepest.active() {
            None if !depth.is_empty() => {
                let _ = deepest.step(1, children);
            }
            Some(index) if enterable(index) => {
                enter(deepest, index, items_at(children, &[index]));
            }
            _ if depth.is_empty() => return Navigation::Unhandled,
            _ => {}
        },
        Named::ArrowLeft => {
            if depth.is_empty() {
                return Navigation::Unhandled;
            }

            let _ = deepest.close();
        }
        Named::Enter | Named::Space => match deepest.active() {
            Some(index) if enterable(index) => {
                enter(deepest, index, items_at(children, &[index]));
            }
            Some(index) if children.get(index).is_some_and(MenuNode::is_submenu) => {}
            Some(index) => {
                let mut path = depth;
                path.push(index);

                return Navigation::Activate(path);
            }
            None => {}
        },
        Named::Alt | Named::Control | Named::Shift | Named::Super | Named::Tab => {
            return Navigation::Unhandled;
        }
    }

    Navigation::Handled
}

/// Activates the item at `path`.
///
/// A checkable leaf toggles first; its callback then receives the new
/// checked state, and its message is published. Disabled items do nothing
/// at all.
pub(crate) fn activate<Message>(
    items: &mut [MenuNode<Message>],
    path: &[usize],
    event: &Event,
    shell: &mut Shell<'_, Message>,
) -> Activation {
    let Some(node) = menu::node_at_mut(items, path) else {
        return Activation::Ignored;
    };

    if !node.is_enabled() {
        log::trace!("ignored activation of disabled item {path:?}");
        return Activation::Ignored;
    }

    if node.is_submenu() {
        return Activation::Submenu;
    }

    let checked = if node.is_checkable() {
        let next = !node.is_checked();
        node.set_checked(next);
        next
    } else {
        false
    };

    if let Some(action) = node.action() {
        shell.publish(action.call(event, checked));
    }

    log::debug!("activated {:?} at {path:?} (checked: {checked})", node.id);

    Activation::Leaf
}

/// Positions every open submenu below `root` that was not placed since it
/// opened.
///
/// `base` is the path of `root` itself, as used by its [`Slot`]s.
pub(crate) fn place_submenus(
    owner: widget::Id,
    root: &mut Popup,
    base: &[usize],
    scene: &Scene,
    measure: &dyn Measure,
) {
    let mut path = base.to_vec();
    let mut popup = root;

    while let Some(index) = popup.active() {
        let Some(submenu) = popup.submenu_mut(index).filter(|submenu| submenu.is_open()) else {
            break;
        };

        path.push(index);

        if !submenu.is_placed() {
            match measure_submenu(owner, &path, scene, measure) {
                Some(position) => {
                    log::debug!("placed submenu {path:?} at {position:?}");
                    submenu.place(position);
                }
                None => log::debug!("submenu {path:?} cannot be measured yet"),
            }
        }

        popup = submenu;
    }
}

fn measure_submenu(
    owner: widget::Id,
    path: &[usize],
    scene: &Scene,
    measure: &dyn Measure,
) -> Option<Point> {
    let item = scene.find(owner, &Slot::Item(path.to_vec()))?;
    let list = scene.find(owner, &Slot::Menu(path.to_vec()))?;

    let placement = Placement::Submenu {
        item: measure.offset(item)?,
        item_bounds: measure.bounds(item)?,
    };

    Some(placement::resolve(
        placement,
        measure.bounds(list)?.size(),
        measure.viewport(),
    ))
}

/// Emits the list of an open popup and its items below `parent`.
pub(crate) fn build<Message>(
    scene: &mut Scene,
    owner: widget::Id,
    parent: NodeId,
    popup: &Popup,
    items: &[MenuNode<Message>],
    path: &[usize],
) -> NodeId {
    let list = scene.insert_tagged(Some(parent), owner, Slot::Menu(path.to_vec()));
    scene.set_position(list, popup.position());

    for (index, item) in items.iter().enumerate() {
        let mut item_path = path.to_vec();
        item_path.push(index);

        let node = scene.insert_tagged(Some(list), owner, Slot::Item(item_path.clone()));

        if let Some(submenu) = popup.submenu(index).filter(|submenu| submenu.is_open()) {
            let _ = build(scene, owner, node, submenu, item.children(), &item_path);
        }
    }

    list
}
