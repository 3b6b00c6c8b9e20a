use super::{DisplayBounds, Point, Rect};

#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub name: String,
    /// Full display rectangle.
    pub frame: Rect,
    /// Usable part of `frame`, without menu bar and dock.
    pub visible_frame: DisplayBounds,
}

impl Screen {
    pub fn new(name: impl Into<String>, frame: Rect, visible_frame: DisplayBounds) -> Self {
        Self {
            name: name.into(),
            frame,
            visible_frame,
        }
    }
}

/// Pick the screen whose full frame contains `pointer`, falling back to the
/// primary screen. `screens` is ordered with the primary screen first.
pub fn screen_under_pointer(screens: &[Screen], pointer: Point) -> Option<&Screen> {
    screens
        .iter()
        .find(|s| s.frame.contains_pointer(pointer))
        .or_else(|| screens.first())
}

/// Top edge of the primary screen; the accessibility API measures y from here.
pub fn primary_max_y(screens: &[Screen]) -> Option<f64> {
    screens.first().map(|s| s.frame.max_y())
}
