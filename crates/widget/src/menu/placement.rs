//! Viewport-aware popup placement.
//!
//! Every function here is pure: the caller measures, [`resolve`] decides.

use crate::core::{Point, Rectangle, Size};

/// Where a popup is anchored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// At the pointer, for context menus.
    Context {
        /// The pointer position in client coordinates.
        pointer: Point,
        /// The client position of the popup's positioning ancestor.
        origin: Point,
    },
    /// Next to the item owning a submenu.
    Submenu {
        /// The item bounds relative to the parent popup.
        item: Rectangle,
        /// The item bounds in client coordinates.
        item_bounds: Rectangle,
    },
    /// Below the title of a top-level menu.
    Dropdown {
        /// The title bounds in client coordinates.
        title: Rectangle,
    },
}

/// Computes the position of a popup of the given size.
///
/// The result is relative to the popup's positioning ancestor. The popup
/// stays inside the viewport whenever it fits in it; a larger popup is left
/// where the flip rules put it.
pub fn resolve(placement: Placement, popup: Size, viewport: Size) -> Point {
    match placement {
        Placement::Context { pointer, origin } => Point::new(
            flip(pointer.x, popup.width, viewport.width) - origin.x,
            flip(pointer.y, popup.height, viewport.height) - origin.y,
        ),
        Placement::Submenu { item, item_bounds } => {
            let x = if item_bounds.right() + popup.width > viewport.width {
                -popup.width
            } else {
                item.width
            };

            let y = if item_bounds.bottom() + popup.height > viewport.height {
                item.y + item.height - popup.height
            } else {
                item.y
            };

            Point::new(x, y)
        }
        Placement::Dropdown { title } => {
            let overflow = title.x + popup.width - viewport.width;

            let x = if overflow > 0.0 && popup.width <= viewport.width {
                -overflow
            } else {
                0.0
            };

            Point::new(x, title.height)
        }
    }
}

/// Flips `anchor` to the other side of the popup on overflow, then falls
/// back to aligning the popup with the far edge of the viewport.
fn flip(anchor: f32, size: f32, max: f32) -> f32 {
    if anchor + size <= max {
        return anchor;
    }

    let flipped = anchor - size;

    if flipped < 0.0 { max - size } else { flipped }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(800.0, 600.0);
    const MENU: Size = Size::new(150.0, 200.0);

    fn context(x: f32, y: f32) -> Placement {
        Placement::Context {
            pointer: Point::new(x, y),
            origin: Point::ORIGIN,
        }
    }

    #[test]
    fn test_context_flips_horizontally() {
        assert_eq!(resolve(context(790.0, 10.0), MENU, VIEWPORT), Point::new(640.0, 10.0));
    }

    #[test]
    fn test_context_flips_vertically() {
        assert_eq!(resolve(context(10.0, 590.0), MENU, VIEWPORT), Point::new(10.0, 390.0));
    }

    #[test]
    fn test_context_clamps_to_far_edge() {
        let viewport = Size::new(200.0, 250.0);

        assert_eq!(
            resolve(context(100.0, 100.0), Size::new(180.0, 220.0), viewport),
            Point::new(20.0, 30.0)
        );
    }

    #[test]
    fn test_context_relative_to_origin() {
        let placement = Placement::Context {
            pointer: Point::new(300.0, 120.0),
            origin: Point::new(100.0, 20.0),
        };

        assert_eq!(resolve(placement, MENU, VIEWPORT), Point::new(200.0, 100.0));
    }

    #[test]
    fn test_context_stays_inside_viewport() {
        let sizes = [
            Size::new(1.0, 1.0),
            MENU,
            Size::new(400.0, 300.0),
            Size::new(799.0, 599.0),
            VIEWPORT,
        ];

        for size in sizes {
            for step_x in 0..=16 {
                for step_y in 0..=12 {
                    let pointer = Point::new(step_x as f32 * 50.0, step_y as f32 * 50.0);
                    let position = resolve(context(pointer.x, pointer.y), size, VIEWPORT);

                    assert!(position.x >= 0.0, "{pointer:?} {size:?} -> {position:?}");
                    assert!(position.y >= 0.0, "{pointer:?} {size:?} -> {position:?}");
                    assert!(position.x + size.width <= VIEWPORT.width);
                    assert!(position.y + size.height <= VIEWPORT.height);
                }
            }
        }
    }

    #[test]
    fn test_context_oversized_is_not_corrected() {
        let position = resolve(context(100.0, 10.0), Size::new(900.0, 100.0), VIEWPORT);

        assert_eq!(position, Point::new(-100.0, 10.0));
    }

    #[test]
    fn test_submenu_opens_right_and_down() {
        let placement = Placement::Submenu {
            item: Rectangle::new(Point::new(0.0, 40.0), Size::new(150.0, 20.0)),
            item_bounds: Rectangle::new(Point::new(100.0, 140.0), Size::new(150.0, 20.0)),
        };

        assert_eq!(resolve(placement, MENU, VIEWPORT), Point::new(150.0, 40.0));
    }

    #[test]
    fn test_submenu_flips_left() {
        let placement = Placement::Submenu {
            item: Rectangle::new(Point::new(0.0, 40.0), Size::new(150.0, 20.0)),
            item_bounds: Rectangle::new(Point::new(600.0, 140.0), Size::new(150.0, 20.0)),
        };

        assert_eq!(resolve(placement, MENU, VIEWPORT), Point::new(-150.0, 40.0));
    }

    #[test]
    fn test_submenu_anchors_bottom() {
        let placement = Placement::Submenu {
            item: Rectangle::new(Point::new(0.0, 100.0), Size::new(150.0, 20.0)),
            item_bounds: Rectangle::new(Point::new(10.0, 500.0), Size::new(150.0, 20.0)),
        };

        assert_eq!(resolve(placement, MENU, VIEWPORT), Point::new(150.0, -80.0));
    }

    #[test]
    fn test_dropdown_below_title() {
        let title = Rectangle::new(Point::new(60.0, 0.0), Size::new(60.0, 20.0));

        assert_eq!(
            resolve(Placement::Dropdown { title }, MENU, VIEWPORT),
            Point::new(0.0, 20.0)
        );
    }

    #[test]
    fn test_dropdown_shifts_left_at_edge() {
        let title = Rectangle::new(Point::new(700.0, 0.0), Size::new(60.0, 20.0));

        assert_eq!(
            resolve(Placement::Dropdown { title }, MENU, VIEWPORT),
            Point::new(-50.0, 20.0)
        );
    }
}
