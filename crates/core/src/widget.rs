//! Create custom widgets and operate on them.
use crate::scene::NodeId;
use crate::{Event, Listeners, Measure, Scene, Shell};

use std::fmt;
use std::sync::atomic::{self, AtomicU64};

/// The identifier of a widget instance.
///
/// Several widgets may build into the same [`Scene`]; their tagged nodes are
/// told apart by the [`Id`] of their owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(u64);

static COUNT: AtomicU64 = AtomicU64::new(1);

impl Id {
    /// Creates a new unique [`Id`].
    pub fn unique() -> Id {
        Id(COUNT.fetch_add(1, atomic::Ordering::Relaxed))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A component that reacts to [`Event`]s and describes what must be
/// rendered for it.
///
/// A host drives a [`Widget`] in cycles:
///
/// 1. [`update`](Self::update) with every incoming [`Event`],
/// 2. [`build`](Self::build) to emit the visible structure into a fresh
///    [`Scene`], which the renderer lays out,
/// 3. [`layout`](Self::layout) once the new geometry can be measured.
pub trait Widget<Message> {
    /// Returns the [`Id`] the widget tags its nodes with.
    fn id(&self) -> Id;

    /// Processes a runtime [`Event`].
    ///
    /// Transitions are applied in full, cascades included, before this
    /// returns.
    fn update(
        &mut self,
        event: &Event,
        scene: &Scene,
        measure: &dyn Measure,
        shell: &mut Shell<'_, Message>,
    );

    /// Positions popups that opened since the last measurement.
    fn layout(&mut self, scene: &Scene, measure: &dyn Measure);

    /// Emits the currently visible nodes of the widget below `parent`.
    ///
    /// Returns the root node of the widget.
    fn build(&self, scene: &mut Scene, parent: Option<NodeId>) -> NodeId;

    /// Returns the document-wide subscriptions the widget currently holds.
    fn listeners(&self) -> Listeners;

    /// Closes everything and releases all subscriptions.
    ///
    /// Hosts call this before dropping the widget.
    fn close(&mut self, shell: &mut Shell<'_, Message>);
}
