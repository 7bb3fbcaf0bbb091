//! Widget implementation for MenuBar

use crate::core::keyboard::{self, Key, Modifiers, Named};
use crate::core::mouse::{self, Button};
use crate::core::widget::Id;
use crate::core::{
    Event, Listeners, Measure, NodeId, Point, Scene, Shell, Slot, Widget, window,
};
use crate::menu::menu_tree::{self, Activation, Navigation};
use crate::menu::mnemonic;
use crate::menu::placement::{self, Placement};
use crate::menu::popup;

use super::{Entry, MenuBar};

impl<Message> Widget<Message> for MenuBar<Message> {
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
            Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers }) => {
                self.on_key(key, *modifiers, event, shell)
            }
            Event::Window(window::Event::Unfocused) => {
                self.state.listeners.contains(Listeners::BLUR) && self.state.collapse()
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
        let bar = scene.insert_tagged(parent, self.id, Slot::Bar);

        for entry in &self.entries {
            match *entry {
                Entry::Title(index) => {
                    let title = scene.insert_tagged(Some(bar), self.id, Slot::Title(index));

                    let open = self.state.menus.get(index).filter(|popup| popup.is_open());

                    if let Some((popup, menu)) = open.zip(self.menus.get(index)) {
                        let _ = menu_tree::build(scene, self.id, title, popup, menu.children(), &[index]);
                    }
                }
                Entry::Content(position) => {
                    let _ = scene.insert_tagged(Some(bar), self.id, Slot::Content(position));
                }
            }
        }

        bar
    }

    fn listeners(&self) -> Listeners {
        self.state.listeners
    }

    fn close(&mut self, shell: &mut Shell<'_, Message>) {
        if self.state.collapse() {
            shell.request_redraw();
        }

        if !self.state.listeners.is_empty() {
            log::debug!("menu bar released {:?}", self.state.listeners);

            self.state.listeners = Listeners::empty();
            shell.listen(Listeners::empty());
        }
    }
}

impl<Message> MenuBar<Message> {
    fn on_mouse(
        &mut self,
        mouse_event: &mouse::Event,
        event: &Event,
        scene: &Scene,
        shell: &mut Shell<'_, Message>,
    ) -> bool {
        let bar = scene.find(self.id, &Slot::Bar);
        let target = mouse_event.target();
        let inside = target
            .zip(bar)
            .is_some_and(|(target, bar)| scene.is_inside(target, bar));
        let slot = target
            .and_then(|target| scene.slot_of(self.id, target))
            .map(|(_, slot)| slot.clone());

        match mouse_event {
            mouse::Event::ButtonPressed {
                button: Button::Left,
                ..
            } if inside => {
                let mut changed = !std::mem::replace(&mut self.state.open, true);

                if let Some(Slot::Title(index)) = slot {
                    changed |= self.state.active.replace(index) != Some(index);
                }

                self.state.sync(&self.menus) || changed
            }
            mouse::Event::CursorMoved { .. } => {
                if !inside {
                    return !self.state.open && self.state.active.take().is_some();
                }

                match slot {
                    Some(Slot::Title(index)) => self.hover_title(index),
                    Some(Slot::Item(path)) => self.hover_item(&path),
                    _ => false,
                }
            }
            mouse::Event::ButtonReleased {
                button: Button::Left,
                ..
            } => {
                if inside {
                    match slot {
                        Some(Slot::Item(path)) => self.click_item(&path, event, shell),
                        _ => false,
                    }
                } else if self.state.listeners.contains(Listeners::CLICK) {
                    log::trace!("click outside menu bar");
                    self.state.collapse()
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    fn hover_title(&mut self, index: usize) -> bool {
        let changed = self.state.active.replace(index) != Some(index);

        if changed {
            log::trace!("hover title {index}");
        }

        self.state.sync(&self.menus) || changed
    }

    fn hover_item(&mut self, path: &[usize]) -> bool {
        let Some((&index, rest)) = path.split_first() else {
            return false;
        };

        if self.state.open_menu() != Some(index) {
            return false;
        }

        match (self.state.menus.get_mut(index), self.menus.get(index)) {
            (Some(popup), Some(menu)) => menu_tree::hover(popup, menu.children(), rest),
            _ => false,
        }
    }

    fn click_item(&mut self, path: &[usize], event: &Event, shell: &mut Shell<'_, Message>) -> bool {
        let Some((&index, rest)) = path.split_first() else {
            return false;
        };

        if self.state.open_menu() != Some(index) {
            return false;
        }

        match self.activate(index, rest, event, shell) {
            Activation::Ignored => false,
            Activation::Submenu => match (self.state.menus.get_mut(index), self.menus.get(index)) {
                (Some(popup), Some(menu)) => menu_tree::hover(popup, menu.children(), rest),
                _ => false,
            },
            Activation::Leaf => {
                shell.capture_event();
                self.close_condition.click_inside && self.state.collapse()
            }
        }
    }

    fn activate(
        &mut self,
        index: usize,
        path: &[usize],
        event: &Event,
        shell: &mut Shell<'_, Message>,
    ) -> Activation {
        match self.menus.get_mut(index) {
            Some(menu) => menu_tree::activate(menu.children_mut(), path, event, shell),
            None => Activation::Ignored,
        }
    }

    fn on_key(
        &mut self,
        key: &Key,
        modifiers: Modifiers,
        event: &Event,
        shell: &mut Shell<'_, Message>,
    ) -> bool {
        if !self.state.listeners.contains(Listeners::KEY_DOWN) {
            return false;
        }

        if self.mnemonics && modifiers.alt() {
            if let Some(c) = key.to_char() {
                return self.open_by_shortcut(c, shell);
            }
        }

        if !self.state.open {
            return false;
        }

        let open_menu = self.state.open_menu();

        let navigation = match open_menu {
            Some(index) => match (self.state.menus.get_mut(index), self.menus.get(index)) {
                (Some(popup), Some(menu)) => menu_tree::on_key(popup, menu.children(), key),
                _ => Navigation::Unhandled,
            },
            None if matches!(key.as_ref(), Key::Named(Named::Escape)) => Navigation::CloseAll,
            None => Navigation::Unhandled,
        };

        log::trace!("menu bar key {key:?}: {navigation:?}");

        match navigation {
            Navigation::Handled => {
                shell.capture_event();
                true
            }
            Navigation::Activate(path) => {
                shell.capture_event();

                let Some(index) = open_menu else {
                    return false;
                };

                match self.activate(index, &path, event, shell) {
                    Activation::Leaf => self.state.collapse(),
                    Activation::Ignored | Activation::Submenu => false,
                }
            }
            Navigation::CloseAll => {
                shell.capture_event();
                self.state.collapse()
            }
            Navigation::Unhandled => self.cycle(key, shell),
        }
    }

    /// Moves the highlight to the neighboring title on a horizontal arrow.
    fn cycle(&mut self, key: &Key, shell: &mut Shell<'_, Message>) -> bool {
        let delta = match key.as_ref() {
            Key::Named(Named::ArrowLeft) => -1,
            Key::Named(Named::ArrowRight) => 1,
            _ => return false,
        };

        let len = self.menus.len();

        if len == 0 {
            return false;
        }

        let next = match self.state.active {
            Some(current) => popup::wrap(current, delta, len),
            None if delta > 0 => 0,
            None => len - 1,
        };

        shell.capture_event();

        self.hover_title(next)
    }

    fn open_by_shortcut(&mut self, c: char, shell: &mut Shell<'_, Message>) -> bool {
        let c = c.to_ascii_lowercase();

        let Some(index) = self
            .menus
            .iter()
            .position(|menu| mnemonic::shortcut_of(menu) == Some(c))
        else {
            return false;
        };

        log::debug!("mnemonic {c:?} opens menu {index}");
        shell.capture_event();

        let armed = !std::mem::replace(&mut self.state.open, true);

        self.hover_title(index) || armed
    }

    fn place(&mut self, scene: &Scene, measure: &dyn Measure) {
        let Some(index) = self.state.open_menu() else {
            return;
        };

        let Some(popup) = self.state.menus.get_mut(index) else {
            return;
        };

        if !popup.is_placed() {
            match dropdown(self.id, index, scene, measure) {
                Some(position) => {
                    log::debug!("placed menu {index} at {position:?}");
                    popup.place(position);
                }
                None => log::debug!("menu {index} cannot be measured yet"),
            }
        }

        menu_tree::place_submenus(self.id, popup, &[index], scene, measure);
    }

    fn refresh_listeners(&mut self, shell: &mut Shell<'_, Message>) {
        let next = self.desired_listeners();
        let (acquired, released) = self.state.listeners.diff(next);

        if acquired.is_empty() && released.is_empty() {
            return;
        }

        log::debug!("menu bar acquired {acquired:?}, released {released:?}");

        self.state.listeners = next;
        shell.listen(next);
    }
}

fn dropdown(owner: Id, index: usize, scene: &Scene, measure: &dyn Measure) -> Option<Point> {
    let title = scene.find(owner, &Slot::Title(index))?;
    let list = scene.find(owner, &Slot::Menu(vec![index]))?;

    Some(placement::resolve(
        Placement::Dropdown {
            title: measure.bounds(title)?,
        },
        measure.bounds(list)?.size(),
        measure.viewport(),
    ))
}
