use apricot_ipc::SnapTarget;

/// Share of each axis a centered window covers.
pub const CENTER_RATIO: f64 = 0.70;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rectangle in global screen coordinates with the origin at the bottom-left
/// and y increasing upward.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Usable area of one display, menu bar and dock already excluded.
pub type DisplayBounds = Rect;

/// Placement of a window.
pub type WindowFrame = Rect;

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    #[cfg(test)]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Mouse-in-rect test for a non-flipped coordinate space: the left and
    /// top edges belong to the rectangle, the right and bottom edges do not.
    pub fn contains_pointer(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y > self.min_y()
            && point.y <= self.max_y()
    }
}

/// Compute the frame a window snapped to `target` occupies inside `bounds`.
///
/// Every half and corner is anchored to the edge it is named after, so
/// opposite placements meet exactly at the middle of the display.
pub fn rect_for(target: SnapTarget, bounds: &DisplayBounds) -> WindowFrame {
    let half_width = bounds.width / 2.0;
    let half_height = bounds.height / 2.0;

    let left_x = bounds.min_x();
    let right_x = bounds.max_x() - half_width;
    let top_y = bounds.max_y() - half_height;
    let bottom_y = bounds.min_y();

    match target {
        SnapTarget::Left => Rect::new(left_x, bounds.y, half_width, bounds.height),
        SnapTarget::Right => Rect::new(right_x, bounds.y, half_width, bounds.height),
        SnapTarget::Top => Rect::new(bounds.x, top_y, bounds.width, half_height),
        SnapTarget::Bottom => Rect::new(bounds.x, bottom_y, bounds.width, half_height),
        SnapTarget::TopLeft => Rect::new(left_x, top_y, half_width, half_height),
        SnapTarget::TopRight => Rect::new(right_x, top_y, half_width, half_height),
        SnapTarget::BottomLeft => Rect::new(left_x, bottom_y, half_width, half_height),
        SnapTarget::BottomRight => Rect::new(right_x, bottom_y, half_width, half_height),
        SnapTarget::Maximize => *bounds,
        SnapTarget::Center70 => {
            let width = CENTER_RATIO * bounds.width;
            let height = CENTER_RATIO * bounds.height;
            Rect::new(
                bounds.x + (bounds.width - width) / 2.0,
                bounds.y + (bounds.height - height) / 2.0,
                width,
                height,
            )
        }
    }
}

/// Convert a frame's origin into the accessibility API's top-left space.
/// `primary_max_y` is the top edge of the primary display, where AX y == 0.
pub fn to_top_left_origin(frame: &WindowFrame, primary_max_y: f64) -> Point {
    Point::new(frame.x, primary_max_y - frame.max_y())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bounds() -> Vec<Rect> {
        vec![
            Rect::new(0.0, 0.0, 1920.0, 1055.0),
            Rect::new(0.0, 70.0, 1440.0, 805.0),
            Rect::new(-1280.0, 200.0, 1279.0, 777.0),
            Rect::new(1920.0, -300.0, 2561.0, 1415.0),
            Rect::new(3.0, 5.0, 1.0, 1.0),
        ]
    }

    #[test]
    fn test_left_right_partition_width() {
        for b in sample_bounds() {
            let left = rect_for(SnapTarget::Left, &b);
            let right = rect_for(SnapTarget::Right, &b);

            assert_eq!(left.width + right.width, b.width);
            assert_eq!(left.min_x(), b.min_x());
            assert_eq!(right.max_x(), b.max_x());
            assert_eq!(left.max_x(), right.min_x(), "gap or overlap in {:?}", b);
            for half in [left, right] {
                assert_eq!(half.y, b.y);
                assert_eq!(half.height, b.height);
            }
        }
    }

    #[test]
    fn test_top_bottom_partition_height() {
        for b in sample_bounds() {
            let top = rect_for(SnapTarget::Top, &b);
            let bottom = rect_for(SnapTarget::Bottom, &b);

            assert_eq!(top.height + bottom.height, b.height);
            assert_eq!(top.max_y(), b.max_y());
            assert_eq!(bottom.min_y(), b.min_y());
            assert_eq!(bottom.max_y(), top.min_y(), "gap or overlap in {:?}", b);
            for half in [top, bottom] {
                assert_eq!(half.x, b.x);
                assert_eq!(half.width, b.width);
            }
        }
    }

    #[test]
    fn test_right_half_anchors_to_far_edge_for_odd_width() {
        let b = Rect::new(0.0, 0.0, 1439.0, 900.0);
        let right = rect_for(SnapTarget::Right, &b);
        assert_eq!(right.x, 719.5);
        assert_eq!(right.max_x(), 1439.0);
    }

    #[test]
    fn test_corners_tile_two_by_two() {
        for b in sample_bounds() {
            let tl = rect_for(SnapTarget::TopLeft, &b);
            let tr = rect_for(SnapTarget::TopRight, &b);
            let bl = rect_for(SnapTarget::BottomLeft, &b);
            let br = rect_for(SnapTarget::BottomRight, &b);

            // Outer edges follow the display
            assert_eq!(tl.min_x(), b.min_x());
            assert_eq!(bl.min_x(), b.min_x());
            assert_eq!(tr.max_x(), b.max_x());
            assert_eq!(br.max_x(), b.max_x());
            assert_eq!(tl.max_y(), b.max_y());
            assert_eq!(tr.max_y(), b.max_y());
            assert_eq!(bl.min_y(), b.min_y());
            assert_eq!(br.min_y(), b.min_y());

            // Inner edges meet
            assert_eq!(tl.max_x(), tr.min_x());
            assert_eq!(bl.max_x(), br.min_x());
            assert_eq!(bl.max_y(), tl.min_y());
            assert_eq!(br.max_y(), tr.min_y());

            let total = tl.area() + tr.area() + bl.area() + br.area();
            assert!((total - b.area()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_corners_match_half_anchors() {
        let b = Rect::new(10.0, 20.0, 1001.0, 601.0);
        let left = rect_for(SnapTarget::Left, &b);
        let right = rect_for(SnapTarget::Right, &b);
        let top = rect_for(SnapTarget::Top, &b);
        let bottom = rect_for(SnapTarget::Bottom, &b);

        let tr = rect_for(SnapTarget::TopRight, &b);
        assert_eq!(tr.x, right.x);
        assert_eq!(tr.y, top.y);
        assert_eq!(tr.width, right.width);
        assert_eq!(tr.height, top.height);

        let bl = rect_for(SnapTarget::BottomLeft, &b);
        assert_eq!(bl.x, left.x);
        assert_eq!(bl.y, bottom.y);
    }

    #[test]
    fn test_maximize_is_identity() {
        for b in sample_bounds() {
            assert_eq!(rect_for(SnapTarget::Maximize, &b), b);
        }
    }

    #[test]
    fn test_center70() {
        for b in sample_bounds() {
            let r = rect_for(SnapTarget::Center70, &b);
            assert_eq!(r.width, 0.70 * b.width);
            assert_eq!(r.height, 0.70 * b.height);
            assert_eq!(r.x, b.x + (b.width - r.width) / 2.0);
            assert_eq!(r.y, b.y + (b.height - r.height) / 2.0);

            let left_slack = r.min_x() - b.min_x();
            let right_slack = b.max_x() - r.max_x();
            assert!((left_slack - right_slack).abs() < 1e-6);

            let ratio = r.area() / b.area();
            assert!((ratio - 0.49).abs() < 1e-9);
        }
    }

    #[test]
    fn test_contains_pointer_edges() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert!(r.contains_pointer(Point::new(0.0, 25.0)));
        assert!(!r.contains_pointer(Point::new(100.0, 25.0)));
        assert!(r.contains_pointer(Point::new(50.0, 50.0)));
        assert!(!r.contains_pointer(Point::new(50.0, 0.0)));
        assert!(!r.contains_pointer(Point::new(-1.0, 10.0)));
    }

    #[test]
    fn test_to_top_left_origin() {
        // Primary display 1920x1080; visible area below a 25pt menu bar
        let frame = Rect::new(0.0, 0.0, 960.0, 1055.0);
        assert_eq!(to_top_left_origin(&frame, 1080.0), Point::new(0.0, 25.0));

        let bottom = Rect::new(960.0, 0.0, 960.0, 527.5);
        assert_eq!(to_top_left_origin(&bottom, 1080.0), Point::new(960.0, 552.5));
    }

    #[test]
    fn test_to_top_left_origin_display_above_primary() {
        // Secondary display stacked above the primary has negative AX y
        let frame = Rect::new(0.0, 1080.0, 1280.0, 800.0);
        assert_eq!(to_top_left_origin(&frame, 1080.0), Point::new(0.0, -800.0));
    }
}
