use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The hosted viewer finished loading its document frame
    ViewerLoaded,
    SelectionChanged(Selection),
    PointerClick(Point),
    BrightnessInput(u8),
    Quit,
}

/// Snapshot of the viewer's active text selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Selection {
    pub text: String,
    /// Bounding rectangle of the selected range, in viewer surface coordinates
    pub range: Rect,
    /// The viewer surface's own rectangle within the host page
    pub surface: Rect,
    /// Host page scroll offset
    pub scroll: Point,
}

impl Selection {
    pub fn new(text: impl Into<String>, range: Rect) -> Self {
        Self {
            text: text.into(),
            range,
            surface: Rect::default(),
            scroll: Point::default(),
        }
    }

    pub fn with_surface(mut self, surface: Rect) -> Self {
        self.surface = surface;
        self
    }

    pub fn with_scroll(mut self, scroll: Point) -> Self {
        self.scroll = scroll;
        self
    }

    /// Bottom-left corner of the selected range in page coordinates, pushed
    /// down by `offset`
    pub fn anchor(&self, offset: f64) -> Point {
        Point::new(
            self.surface.x + self.range.x + self.scroll.x,
            self.surface.y + self.range.bottom() + self.scroll.y + offset,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_is_bottom_left_in_page_space() {
        let selection = Selection::new("bonjour", Rect::new(40.0, 100.0, 80.0, 16.0))
            .with_surface(Rect::new(20.0, 60.0, 800.0, 600.0))
            .with_scroll(Point::new(0.0, 30.0));

        let anchor = selection.anchor(5.0);

        assert_eq!(anchor, Point::new(60.0, 60.0 + 116.0 + 30.0 + 5.0));
    }
}
