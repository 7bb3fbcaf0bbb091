//! The rendered structure of a user interface.
//!
//! A [`Scene`] mirrors the tree the renderer actually drew. Each node may be
//! tagged with a [`Slot`] naming the menu part it displays, so widgets can
//! resolve hit-test targets back to items and answer containment questions
//! structurally instead of geometrically.
//!
//! Tags are scoped by the [`widget::Id`] of the widget that emitted them, so
//! any number of widgets can share one [`Scene`].
use crate::Point;
use crate::widget;

use rustc_hash::FxHashMap;
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// The identifier of a node in a [`Scene`].
    pub struct NodeId;
}

/// A path of child indices from the root of a menu.
///
/// For a menu bar, the first index selects the top-level menu.
pub type Path = Vec<usize>;

/// The menu part a node of the [`Scene`] displays.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The root of a menu bar.
    Bar,
    /// The title of the n-th top-level menu of a menu bar.
    Title(usize),
    /// Caller content placed among the titles of a menu bar, by child
    /// position.
    Content(usize),
    /// The element a context menu is attached to.
    Trigger,
    /// The list of items of an open popup.
    ///
    /// The path is the path of the item owning the popup. The root list of a
    /// context menu has an empty path.
    Menu(Path),
    /// A single item.
    Item(Path),
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    tag: Option<(widget::Id, Slot)>,
    position: Option<Point>,
}

/// A tree of rendered nodes.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: SlotMap<NodeId, Node>,
    roots: Vec<NodeId>,
    slots: FxHashMap<(widget::Id, Slot), NodeId>,
}

impl Scene {
    /// Creates an empty [`Scene`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every node.
    ///
    /// Identifiers handed out before clearing are never valid again, so
    /// targets of stale events simply resolve to nothing.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
        self.slots.clear();
    }

    /// Inserts an untagged node below `parent`, or as a new root.
    pub fn insert(&mut self, parent: Option<NodeId>) -> NodeId {
        self.push(parent, None)
    }

    /// Inserts a node tagged with `slot` on behalf of `owner`.
    ///
    /// A tagged node replaces any earlier node with the same owner and
    /// [`Slot`] in lookups.
    pub fn insert_tagged(&mut self, parent: Option<NodeId>, owner: widget::Id, slot: Slot) -> NodeId {
        let id = self.push(parent, Some((owner, slot.clone())));

        if let Some(previous) = self.slots.insert((owner, slot), id) {
            log::trace!("slot of {previous:?} taken over by {id:?}");
        }

        id
    }

    fn push(&mut self, parent: Option<NodeId>, tag: Option<(widget::Id, Slot)>) -> NodeId {
        let id = self.nodes.insert(Node {
            parent,
            children: Vec::new(),
            tag,
            position: None,
        });

        match parent.and_then(|parent| self.nodes.get_mut(parent)) {
            Some(node) => node.children.push(id),
            None => self.roots.push(id),
        }

        id
    }

    /// Sets the position a widget computed for a node.
    ///
    /// The renderer applies it relative to the node's positioning ancestor.
    pub fn set_position(&mut self, node: NodeId, position: Point) {
        if let Some(node) = self.nodes.get_mut(node) {
            node.position = Some(position);
        }
    }

    /// Returns the position a widget computed for a node, if any.
    pub fn position(&self, node: NodeId) -> Option<Point> {
        self.nodes.get(node).and_then(|node| node.position)
    }

    /// Returns true if the node exists.
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(node)
    }

    /// Returns the root nodes, in insertion order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Returns the parent of a node.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|node| node.parent)
    }

    /// Returns the children of a node, in insertion order.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node)
            .map_or(&[], |node| node.children.as_slice())
    }

    /// Returns the [`Slot`] a node is tagged with.
    pub fn slot(&self, node: NodeId) -> Option<&Slot> {
        self.nodes
            .get(node)
            .and_then(|node| node.tag.as_ref())
            .map(|(_, slot)| slot)
    }

    /// Returns the widget that tagged a node.
    pub fn owner(&self, node: NodeId) -> Option<widget::Id> {
        self.nodes
            .get(node)
            .and_then(|node| node.tag.as_ref())
            .map(|(owner, _)| *owner)
    }

    /// Finds the node `owner` tagged with the given [`Slot`].
    pub fn find(&self, owner: widget::Id, slot: &Slot) -> Option<NodeId> {
        self.slots.get(&(owner, slot.clone())).copied()
    }

    /// Iterates over a node and all of its ancestors, nearest first.
    pub fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let first = self.contains(node).then_some(node);

        std::iter::successors(first, |&node| self.parent(node))
    }

    /// Returns true if `target` is `root` or one of its descendants.
    pub fn is_inside(&self, target: NodeId, root: NodeId) -> bool {
        self.ancestors(target).any(|node| node == root)
    }

    /// Resolves a target to its nearest ancestor tagged by `owner`, itself
    /// included.
    ///
    /// Nodes tagged by other widgets are skipped.
    pub fn slot_of(&self, owner: widget::Id, target: NodeId) -> Option<(NodeId, &Slot)> {
        self.ancestors(target).find_map(|node| {
            self.nodes
                .get(node)
                .and_then(|node| node.tag.as_ref())
                .filter(|(tag_owner, _)| *tag_owner == owner)
                .map(|(_, slot)| (node, slot))
        })
    }
}
