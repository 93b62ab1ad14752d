use lumen_types::{Point, Size};

pub const DEFAULT_MARGIN: f64 = 10.0;

/// Top-left position for a popup of `popup` size anchored at `anchor`, kept
/// `margin` away from the viewport edges.
///
/// Overflowing the right edge shifts the popup left; the left margin is
/// applied last and wins when the popup is wider than the viewport.
/// Overflowing the bottom flips the popup above the anchor; the top margin
/// is applied last.
pub fn place(popup: Size, anchor: Point, viewport: Size, margin: f64) -> Point {
    let mut x = anchor.x;
    if x + popup.width > viewport.width - margin {
        x = viewport.width - popup.width - margin;
    }
    if x < margin {
        x = margin;
    }

    let mut y = anchor.y;
    if y + popup.height > viewport.height - margin {
        y = anchor.y - popup.height - margin;
    }
    if y < margin {
        y = margin;
    }

    Point::new(x, y)
}
