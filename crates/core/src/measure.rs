use crate::scene::NodeId;
use crate::{Rectangle, Size};

/// Geometry of the rendered [`Scene`](crate::Scene).
///
/// Implemented by the renderer. Every query reflects the latest layout; a
/// node that has not been rendered yet returns `None`, in which case widgets
/// skip positioning for that cycle and try again later.
pub trait Measure {
    /// Returns the size of the visible viewport.
    fn viewport(&self) -> Size;

    /// Returns the bounds of a node in client coordinates.
    fn bounds(&self, node: NodeId) -> Option<Rectangle>;

    /// Returns the bounds of a node relative to its positioning ancestor.
    fn offset(&self, node: NodeId) -> Option<Rectangle>;
}
