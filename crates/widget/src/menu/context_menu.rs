//! A context menu is a menu in a graphical user interface that appears upon
//! user interaction, such as a right-click mouse operation.

use crate::Error;
use crate::core::keyboard::{self, Key};
use crate::core::menu::{self, MenuId, MenuNode};
use crate::core::mouse::{self, Button};
use crate::core::widget::Id;
use crate::core::{
    Event, Listeners, Measure, NodeId, Point, Scene, Shell, Slot, Widget, window,
};
use crate::menu::CloseCondition;
use crate::menu::item::ItemView;
use crate::menu::menu_tree::{self, Activation, Navigation};
use crate::menu::placement::{self, Placement};
use crate::menu::popup::Popup;
use crate::menu::style::{Appearance, Overrides};

/// A child of a [`ContextMenu`].
#[derive(Debug)]
pub enum Child<Message> {
    /// The element the menu is attached to.
    Trigger,
    /// The items of the menu.
    Menu(Vec<MenuNode<Message>>),
}

/// A menu opened by a right click on its trigger, at the pointer.
#[derive(Debug)]
pub struct ContextMenu<Message> {
    id: Id,
    items: Vec<MenuNode<Message>>,
    popup: Popup,
    pointer: Point,
    listeners: Listeners,
    close_on_escape: bool,
    close_condition: CloseCondition,
    style: Overrides,
}

impl<Message> ContextMenu<Message> {
    /// Creates a new [`ContextMenu`] from exactly one [`Child::Trigger`] and
    /// one [`Child::Menu`], in any order.
    pub fn new(children: Vec<Child<Message>>) -> Result<Self, Error> {
        if children.len() != 2 {
            return Err(Error::ContextMenuArity {
                found: children.len(),
            });
        }

        let mut trigger = false;
        let mut items = None;

        for child in children {
            match child {
                Child::Trigger if trigger => return Err(Error::MissingMenu),
                Child::Trigger => trigger = true,
                Child::Menu(_) if items.is_some() => return Err(Error::MissingTrigger),
                Child::Menu(menu) => items = Some(menu),
            }
        }

        let items = items.ok_or(Error::MissingMenu)?;

        Ok(Self {
            id: Id::unique(),
            popup: Popup::new(&items),
            items,
            pointer: Point::ORIGIN,
            listeners: Listeners::empty(),
            close_on_escape: true,
            close_condition: CloseCondition::default(),
            style: Overrides::default(),
        })
    }

    /// Sets whether `Escape` closes the menu.
    #[must_use]
    pub fn close_on_escape(mut self, close_on_escape: bool) -> Self {
        self.close_on_escape = close_on_escape;
        self
    }

    /// Sets the [`CloseCondition`] of the [`ContextMenu`].
    #[must_use]
    pub fn close_condition(mut self, close_condition: CloseCondition) -> Self {
        self.close_condition = close_condition;
        self
    }

    /// Sets the style [`Overrides`] of the [`ContextMenu`].
    #[must_use]
    pub fn style(mut self, style: Overrides) -> Self {
        self.style = style;
        self
    }

    /// Returns the items of the menu.
    pub fn items(&self) -> &[MenuNode<Message>] {
        &self.items
    }

    /// Returns whether the menu is shown.
    pub fn is_open(&self) -> bool {
        self.popup.is_open()
    }

    /// Returns the root [`Popup`].
    pub fn popup(&self) -> &Popup {
        &self.popup
    }

    /// Returns the path of the highlighted item.
    pub fn active_path(&self) -> Option<Vec<usize>> {
        menu_tree::active_path(&self.popup)
    }

    /// Returns the position of the open popup owned by the item at `path`.
    ///
    /// The empty path names the menu itself, placed relative to the trigger.
    pub fn position(&self, path: &[usize]) -> Option<Point> {
        menu_tree::popup_at(&self.popup, path)
            .filter(|popup| popup.is_open())
            .map(Popup::position)
    }

    /// Describes the item at `path`.
    pub fn item_view(&self, path: &[usize]) -> Option<ItemView> {
        let node = menu::node_at(&self.items, path)?;
        let (&last, parent) = path.split_last()?;
        let popup = menu_tree::popup_at(&self.popup, parent)?;

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
    /// Disabling a submenu that is shown closes it.
    pub fn set_enabled(&mut self, id: MenuId, enabled: bool) -> bool {
        let Some(path) = menu::find_path(&self.items, id) else {
            return false;
        };

        let Some(node) = menu::node_at_mut(&mut self.items, &path) else {
            return false;
        };

        node.set_enabled(enabled);

        if !enabled {
            let _ = menu_tree::close_at(&mut self.popup, &path);
        }

        true
    }

    /// Sets the checked state of the checkable node with the given
    /// identifier.
    ///
    /// Returns `false` if no such node exists.
    pub fn set_checked(&mut self, id: MenuId, checked: bool) -> bool {
        match menu::find_path(&self.items, id).and_then(|path| menu::node_at_mut(&mut self.items, &path)) {
            Some(node) if node.is_checkable() => {
                node.set_checked(checked);
                true
            }
            _ => false,
        }
    }

    fn on_mouse(
        &mut self,
        mouse_event: &mouse::Event,
        event: &Event,
        scene: &Scene,
        shell: &mut Shell<'_, Message>,
    ) -> bool {
        let target = mouse_event.target();
        let within = |slot: &Slot| {
            target
                .zip(scene.find(self.id, slot))
                .is_some_and(|(target, root)| scene.is_inside(target, root))
        };

        let in_trigger = within(&Slot::Trigger);
        let in_menu = self.popup.is_open() && within(&Slot::Menu(Vec::new()));
        let item = target
            .and_then(|target| scene.slot_of(self.id, target))
            .and_then(|(_, slot)| match slot {
                Slot::Item(path) if in_menu => Some(path.clone()),
                _ => None,
            });

        match mouse_event {
            mouse::Event::ButtonReleased {
                button: Button::Right,
                position,
                ..
            } if in_trigger && !in_menu => {
                let _ = self.popup.close();
                let _ = self.popup.open();
                self.pointer = *position;

                log::debug!("context menu opened at {position:?}");
                shell.capture_event();

                true
            }
            mouse::Event::ButtonReleased { .. } if !in_menu => {
                if self.listeners.contains(Listeners::POINTER_UP) && self.popup.close() {
                    log::debug!("context menu closed by a release outside");
                    true
                } else {
                    false
                }
            }
            mouse::Event::ButtonReleased {
                button: Button::Left,
                ..
            } => match item {
                Some(path) => self.click_item(&path, event, shell),
                None => false,
            },
            mouse::Event::CursorMoved { .. } => match item {
                Some(path) => menu_tree::hover(&mut self.popup, &self.items, &path),
                None => false,
            },
            _ => false,
        }
    }

    fn click_item(&mut self, path: &[usize], event: &Event, shell: &mut Shell<'_, Message>) -> bool {
        match menu_tree::activate(&mut self.items, path, event, shell) {
            Activation::Ignored => false,
            Activation::Submenu => menu_tree::hover(&mut self.popup, &self.items, path),
            Activation::Leaf => {
                shell.capture_event();
                self.close_condition.click_inside && self.popup.close()
            }
        }
    }

    fn on_key(&mut self, key: &Key, event: &Event, shell: &mut Shell<'_, Message>) -> bool {
        if !self.popup.is_open() || !self.listeners.contains(Listeners::KEY_DOWN) {
            return false;
        }

        let navigation = menu_tree::on_key(&mut self.popup, &self.items, key);

        log::trace!("context menu key {key:?}: {navigation:?}");

        match navigation {
            Navigation::Handled => {
                shell.capture_event();
                true
            }
            Navigation::Activate(path) => {
                shell.capture_event();

                match menu_tree::activate(&mut self.items, &path, event, shell) {
                    Activation::Leaf => self.popup.close(),
                    Activation::Ignored | Activation::Submenu => false,
                }
            }
            Navigation::CloseAll if self.close_on_escape => {
                shell.capture_event();
                self.popup.close()
            }
            Navigation::CloseAll | Navigation::Unhandled => false,
        }
    }

    fn place(&mut self, scene: &Scene, measure: &dyn Measure) {
        if !self.popup.is_open() {
            return;
        }

        if !self.popup.is_placed() {
            match self.measure(scene, measure) {
                Some(position) => {
                    log::debug!("placed context menu at {position:?}");
                    self.popup.place(position);
                }
                None => log::debug!("context menu cannot be measured yet"),
            }
        }

        menu_tree::place_submenus(self.id, &mut self.popup, &[], scene, measure);
    }

    fn measure(&self, scene: &Scene, measure: &dyn Measure) -> Option<Point> {
        let trigger = scene.find(self.id, &Slot::Trigger)?;
        let list = scene.find(self.id, &Slot::Menu(Vec::new()))?;

        let placement = Placement::Context {
            pointer: self.pointer,
            origin: measure.bounds(trigger)?.position(),
        };

        Some(placement::resolve(
            placement,
            measure.bounds(list)?.size(),
            measure.viewport(),
        ))
    }

    fn desired_listeners(&self) -> Listeners {
        if !self.popup.is_open() {
            return Listeners::empty();
        }

        let mut listeners = Listeners::KEY_DOWN;

        if self.close_condition.click_outside {
            listeners |= Listeners::POINTER_UP;
        }

        if self.close_condition.blur {
            listeners |= Listeners::BLUR;
        }

        listeners
    }

    fn refresh_listeners(&mut self, shell: &mut Shell<'_, Message>) {
        let next = self.desired_listeners();
        let (acquired, released) = self.listeners.diff(next);

        if acquired.is_empty() && released.is_empty() {
            return;
        }

        log::debug!("context menu acquired {acquired:?}, released {released:?}");

        self.listeners = next;
        shell.listen(next);
    }
}

impl<Message> Widget<Message> for ContextMenu<Message> {
    fn id(&self) -> Id {
        self.id
    }

    fn update(
        &mut self,
        event: &Event,
        scene: &Scene,
        measure: &dyn Measure,
        shell: &mut Shell<'_, Message>,
    ) {
        let changed = match event {
            Event::Mouse(mouse_event) => self.on_mouse(mouse_event, event, scene, shell),
            Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                self.on_key(key, event, shell)
            }
            Event::Window(window::Event::Unfocused) => {
                self.listeners.contains(Listeners::BLUR) && self.popup.close()
            }
            _ => false,
        };

        if changed {
            shell.request_redraw();
        }

        self.place(scene, measure);
        self.refresh_listeners(shell);
    }

    fn layout(&mut self, scene: &Scene, measure: &dyn Measure) {
        self.place(scene, measure);
    }

    fn build(&self, scene: &mut Scene, parent: Option<NodeId>) -> NodeId {
        let trigger = scene.insert_tagged(parent, self.id, Slot::Trigger);

        if self.popup.is_open() {
            let _ = menu_tree::build(scene, self.id, trigger, &self.popup, &self.items, &[]);
        }

        trigger
    }

    fn listeners(&self) -> Listeners {
        self.listeners
    }

    fn close(&mut self, shell: &mut Shell<'_, Message>) {
        if self.popup.close() {
            shell.request_redraw();
        }

        self.refresh_listeners(shell);
    }
}
