//! Test popmenu widgets in headless mode.
//!
//! A [`Simulator`] hosts a single widget next to an unrelated root node,
//! lays the rendered [`Scene`] out with a deterministic fake engine and
//! feeds it synthetic input:
//!
//! ```
//! use popmenu_test::core::{MenuNode, Slot};
//! use popmenu_test::widget::menu::{BarChild, MenuBar};
//! use popmenu_test::Simulator;
//!
//! let menu_bar = MenuBar::new(vec![BarChild::Menu(MenuNode::submenu(
//!     "File",
//!     vec![MenuNode::item("Quit").message("quit")],
//! ))])
//! .expect("valid menu bar");
//!
//! let mut ui = Simulator::new(menu_bar);
//!
//! ui.click(Slot::Title(0)).expect("title is rendered");
//! ui.click(Slot::Item(vec![0, 0])).expect("menu is open");
//!
//! assert_eq!(ui.into_messages(), vec!["quit"]);
//! ```
//!
//! The fake engine draws titles as 60x20 cells from the top-left corner of
//! the viewport, popup lists as columns of 150x20 items, and the trigger of
//! a context menu over the whole viewport unless told otherwise.
pub use popmenu_core as core;
pub use popmenu_widget as widget;

use crate::core::event;
use crate::core::keyboard::{self, Key, Modifiers};
use crate::core::mouse::{self, Button};
use crate::core::{
    Event, Listeners, Measure, NodeId, Point, Rectangle, Scene, Shell, Size, Slot, Widget,
    window,
};

use rustc_hash::FxHashMap;

/// A simulation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No node is tagged with the given [`Slot`].
    #[error("no node is rendered for {0:?}")]
    NotFound(Slot),
}

/// The geometry produced by the fake layout engine.
#[derive(Debug, Clone)]
pub struct Layout {
    viewport: Size,
    bounds: FxHashMap<NodeId, Rectangle>,
    offsets: FxHashMap<NodeId, Rectangle>,
    available: bool,
}

impl Measure for Layout {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn bounds(&self, node: NodeId) -> Option<Rectangle> {
        self.available
            .then(|| self.bounds.get(&node).copied())
            .flatten()
    }

    fn offset(&self, node: NodeId) -> Option<Rectangle> {
        self.available
            .then(|| self.offsets.get(&node).copied())
            .flatten()
    }
}

/// The cell sizes used by the fake layout engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// The size of a title or of passthrough content in a menu bar.
    pub title: Size,
    /// The size of an item in a popup list.
    pub item: Size,
    /// The bounds of a context menu trigger, if not the whole viewport.
    pub trigger: Option<Rectangle>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            title: Size::new(60.0, 20.0),
            item: Size::new(150.0, 20.0),
            trigger: None,
        }
    }
}

/// A headless host for a single widget.
#[allow(missing_debug_implementations)]
pub struct Simulator<Message, W> {
    widget: W,
    scene: Scene,
    layout: Layout,
    metrics: Metrics,
    outside: Option<NodeId>,
    messages: Vec<Message>,
    listen_log: Vec<Listeners>,
    status: event::Status,
}

impl<Message, W> Simulator<Message, W>
where
    W: Widget<Message>,
{
    /// Hosts `widget` in an 800x600 viewport.
    pub fn new(widget: W) -> Self {
        Self::with_viewport(widget, Size::new(800.0, 600.0))
    }

    /// Hosts `widget` in a viewport of the given size.
    pub fn with_viewport(widget: W, viewport: Size) -> Self {
        let mut simulator = Self {
            widget,
            scene: Scene::new(),
            layout: Layout {
                viewport,
                bounds: FxHashMap::default(),
                offsets: FxHashMap::default(),
                available: true,
            },
            metrics: Metrics::default(),
            outside: None,
            messages: Vec::new(),
            listen_log: Vec::new(),
            status: event::Status::Ignored,
        };

        simulator.render();
        simulator
    }

    /// Replaces the [`Metrics`] of the fake layout engine.
    #[must_use]
    pub fn metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self.render();
        self
    }

    /// Makes every measurement fail, as if nothing had been rendered yet.
    pub fn set_measurable(&mut self, available: bool) {
        self.layout.available = available;
        self.render();
    }

    /// Returns the hosted widget.
    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Returns the current [`Scene`].
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Finds the node the hosted widget tagged with the given [`Slot`].
    pub fn find(&self, slot: Slot) -> Result<NodeId, Error> {
        self.scene
            .find(self.widget.id(), &slot)
            .ok_or(Error::NotFound(slot))
    }

    /// Returns the client bounds of the node tagged with the given [`Slot`].
    pub fn bounds(&self, slot: Slot) -> Result<Rectangle, Error> {
        let node = self.find(slot.clone())?;

        self.layout
            .bounds
            .get(&node)
            .copied()
            .ok_or(Error::NotFound(slot))
    }

    /// Returns every subscription set the widget reported, oldest first.
    pub fn listen_log(&self) -> &[Listeners] {
        &self.listen_log
    }

    /// Returns the [`event::Status`] of the last event.
    pub fn status(&self) -> event::Status {
        self.status
    }

    /// Returns the messages published so far.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Consumes the [`Simulator`] and returns the published messages.
    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }

    /// Moves the cursor over the node tagged with `slot`.
    pub fn hover(&mut self, slot: Slot) -> Result<(), Error> {
        let (target, position) = self.locate(slot)?;

        self.dispatch(Event::Mouse(mouse::Event::CursorMoved {
            position,
            target: Some(target),
        }));

        Ok(())
    }

    /// Moves the cursor over the unrelated root node.
    pub fn hover_outside(&mut self) {
        self.dispatch(Event::Mouse(mouse::Event::CursorMoved {
            position: Point::ORIGIN,
            target: self.outside,
        }));
    }

    /// Presses and releases the left button on the node tagged with `slot`.
    pub fn click(&mut self, slot: Slot) -> Result<(), Error> {
        let (_, position) = self.locate(slot.clone())?;

        self.press_and_release(Button::Left, Some(slot), position);

        Ok(())
    }

    /// Presses and releases `button` on the unrelated root node.
    pub fn click_outside(&mut self, button: Button) {
        self.press_and_release(button, None, Point::ORIGIN);
    }

    /// Presses and releases the right button at `position`, over the node
    /// tagged with `slot`.
    pub fn right_click(&mut self, slot: Slot, position: Point) -> Result<(), Error> {
        let _ = self.find(slot.clone())?;

        self.press_and_release(Button::Right, Some(slot), position);

        Ok(())
    }

    /// Presses `key` without modifiers.
    pub fn tap_key(&mut self, key: impl Into<Key>) {
        self.press_key(key, Modifiers::empty());
    }

    /// Presses `key` while holding `modifiers`.
    pub fn press_key(&mut self, key: impl Into<Key>, modifiers: Modifiers) {
        self.dispatch(Event::Keyboard(keyboard::Event::KeyPressed {
            key: key.into(),
            modifiers,
        }));
    }

    /// Takes the focus away from the window.
    pub fn blur(&mut self) {
        self.dispatch(Event::Window(window::Event::Unfocused));
    }

    /// Unmounts the widget.
    pub fn close(&mut self) {
        let mut shell = Shell::new(&mut self.messages);

        self.widget.close(&mut shell);

        if let Some(listeners) = shell.listeners() {
            self.listen_log.push(listeners);
        }

        self.render();
    }

    fn locate(&self, slot: Slot) -> Result<(NodeId, Point), Error> {
        let target = self.find(slot)?;
        let position = self
            .layout
            .bounds
            .get(&target)
            .map_or(Point::ORIGIN, Rectangle::center);

        Ok((target, position))
    }

    /// Presses and releases `button` over the node tagged with `slot`, or
    /// over the unrelated root node.
    ///
    /// The press redraws the scene, so the release target is looked up
    /// again in the new one.
    fn press_and_release(&mut self, button: Button, slot: Option<Slot>, position: Point) {
        self.dispatch(Event::Mouse(mouse::Event::ButtonPressed {
            button,
            position,
            target: self.target(slot.as_ref()),
        }));

        let status = self.status;

        self.dispatch(Event::Mouse(mouse::Event::ButtonReleased {
            button,
            position,
            target: self.target(slot.as_ref()),
        }));

        self.status = status.merge(self.status);
    }

    fn target(&self, slot: Option<&Slot>) -> Option<NodeId> {
        match slot {
            Some(slot) => {
                let target = self.scene.find(self.widget.id(), slot);

                if target.is_none() {
                    log::trace!("{slot:?} is gone, releasing over nothing");
                }

                target
            }
            None => self.outside,
        }
    }

    fn dispatch(&mut self, event: Event) {
        log::trace!("simulating {event:?}");

        let mut shell = Shell::new(&mut self.messages);

        self.widget
            .update(&event, &self.scene, &self.layout, &mut shell);

        self.status = shell.event_status();

        if let Some(listeners) = shell.listeners() {
            self.listen_log.push(listeners);
        }

        self.render();
    }

    /// Renders, measures, lets the widget place its popups and renders the
    /// new positions.
    fn render(&mut self) {
        self.build();
        self.widget.layout(&self.scene, &self.layout);
        self.build();
    }

    fn build(&mut self) {
        self.scene.clear();
        self.outside = Some(self.scene.insert(None));

        let _ = self.widget.build(&mut self.scene, None);

        self.layout.bounds.clear();
        self.layout.offsets.clear();

        let viewport = Rectangle::new(Point::ORIGIN, self.layout.viewport);

        for root in self.scene.roots().to_vec() {
            self.measure(root, viewport, 0);
        }
    }

    fn measure(&mut self, node: NodeId, parent: Rectangle, index: usize) {
        let metrics = self.metrics;
        let scene = &self.scene;

        let offset = match scene.slot(node) {
            Some(Slot::Bar) => Rectangle::new(
                Point::ORIGIN,
                Size::new(
                    metrics.title.width * scene.children(node).len() as f32,
                    metrics.title.height,
                ),
            ),
            Some(Slot::Title(_) | Slot::Content(_)) => Rectangle::new(
                Point::new(metrics.title.width * index as f32, 0.0),
                metrics.title,
            ),
            Some(Slot::Trigger) => metrics.trigger.unwrap_or(parent),
            Some(Slot::Menu(_)) => Rectangle::new(
                scene.position(node).unwrap_or(Point::ORIGIN),
                Size::new(
                    metrics.item.width,
                    metrics.item.height * scene.children(node).len() as f32,
                ),
            ),
            Some(Slot::Item(_)) => Rectangle::new(
                Point::new(0.0, metrics.item.height * index as f32),
                metrics.item,
            ),
            None => Rectangle::new(Point::ORIGIN, parent.size()),
        };

        // Submenu lists are positioned against the list of their item.
        let anchor = match scene.slot(node) {
            Some(Slot::Menu(_)) => scene
                .parent(node)
                .filter(|&item| matches!(scene.slot(item), Some(Slot::Item(_))))
                .and_then(|item| scene.parent(item))
                .and_then(|list| self.layout.bounds.get(&list).copied())
                .unwrap_or(parent),
            _ => parent,
        };

        let bounds = Rectangle {
            x: anchor.x + offset.x,
            y: anchor.y + offset.y,
            ..offset
        };

        let _ = self.layout.bounds.insert(node, bounds);
        let _ = self.layout.offsets.insert(node, offset);

        let children = self.scene.children(node).to_vec();

        for (index, child) in children.into_iter().enumerate() {
            self.measure(child, bounds, index);
        }
    }
}
