use crate::point::Point;
use crate::surface::Surface;

/// Axis-aligned hit-test region derived from a shape's geometry.
///
/// Stored both as two corners (`bottom_left` has the larger y because screen
/// y grows downward) and as a top-left/size rectangle used for drawing.
/// Every constructor produces the same canonical form. Boxes are rebuilt
/// whenever the owning geometry changes; there are no setters.
///
/// Negative sizes are accepted as given and produce an inverted box that
/// contains no point. Corner and size arithmetic saturates at the `i32`
/// limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    bottom_left: Point,
    top_right: Point,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl BoundingBox {
    /// Square box circumscribing a circle whose top-left corner is `(x, y)`.
    pub fn from_diameter(x: i32, y: i32, diameter: i32) -> Self {
        Self::from_size(x, y, diameter, diameter)
    }

    /// Box from a top-left corner and a size.
    pub fn from_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            bottom_left: Point::new(x, y.saturating_add(height)),
            top_right: Point::new(x.saturating_add(width), y),
            x,
            y,
            width,
            height,
        }
    }

    /// Box from its two defining corners.
    pub fn from_corners(bottom_left: Point, top_right: Point) -> Self {
        Self {
            bottom_left,
            top_right,
            x: bottom_left.x(),
            y: top_right.y(),
            width: top_right.x().saturating_sub(bottom_left.x()),
            height: bottom_left.y().saturating_sub(top_right.y()),
        }
    }

    /// Min/max envelope of parallel coordinate arrays.
    ///
    /// Returns `None` when there are no coordinates. Extremes are seeded from
    /// the first element so all-negative or all-positive inputs work.
    pub fn envelope(xs: &[i32], ys: &[i32]) -> Option<Self> {
        let (min_x, max_x) = extremes(xs)?;
        let (min_y, max_y) = extremes(ys)?;
        Some(Self::from_corners(
            Point::new(min_x, max_y),
            Point::new(max_x, min_y),
        ))
    }

    pub fn bottom_left(&self) -> Point {
        self.bottom_left
    }

    pub fn top_right(&self) -> Point {
        self.top_right
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Inclusive on all four edges.
    pub fn contains_point(&self, px: i32, py: i32) -> bool {
        (px >= self.bottom_left.x() && px <= self.top_right.x())
            && (py >= self.top_right.y() && py <= self.bottom_left.y())
    }

    /// Draw the box as a dashed outline. Purely illustrative.
    pub fn render_outline(&self, surface: &mut dyn Surface) {
        surface.draw_dashed_rect(self.x, self.y, self.width, self.height);
    }
}

fn extremes(values: &[i32]) -> Option<(i32, i32)> {
    let (&first, rest) = values.split_first()?;
    Some(
        rest.iter()
            .fold((first, first), |(min, max), &v| (min.min(v), max.max(v))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCall, RecordingSurface};

    #[test]
    fn size_constructor_derives_corners() {
        let bb = BoundingBox::from_size(10, 20, 30, 40);
        assert_eq!(bb.bottom_left(), Point::new(10, 60));
        assert_eq!(bb.top_right(), Point::new(40, 20));
    }

    #[test]
    fn diameter_constructor_is_square() {
        let bb = BoundingBox::from_diameter(50, 150, 100);
        assert_eq!(bb, BoundingBox::from_size(50, 150, 100, 100));
        assert_eq!(bb.bottom_left(), Point::new(50, 250));
        assert_eq!(bb.top_right(), Point::new(150, 150));
    }

    #[test]
    fn corners_round_trip_to_size_form() {
        let from_size = BoundingBox::from_size(-5, 7, 12, 3);
        let from_corners = BoundingBox::from_corners(from_size.bottom_left(), from_size.top_right());
        assert_eq!(from_corners, from_size);
    }

    #[test]
    fn contains_is_inclusive_on_edges() {
        let bb = BoundingBox::from_size(0, 0, 10, 10);
        for (x, y) in [(0, 0), (10, 0), (0, 10), (10, 10), (5, 0), (0, 5)] {
            assert!(bb.contains_point(x, y), "({x}, {y}) should be inside");
        }
        for (x, y) in [(-1, 5), (11, 5), (5, -1), (5, 11)] {
            assert!(!bb.contains_point(x, y), "({x}, {y}) should be outside");
        }
    }

    #[test]
    fn zero_size_box_only_contains_its_corner() {
        let bb = BoundingBox::from_size(4, 4, 0, 0);
        assert!(bb.contains_point(4, 4));
        assert!(!bb.contains_point(4, 5));
    }

    #[test]
    fn negative_size_contains_nothing() {
        let bb = BoundingBox::from_size(10, 10, -6, -6);
        assert_eq!(bb.width(), -6);
        for (x, y) in [(10, 10), (7, 7), (4, 4)] {
            assert!(!bb.contains_point(x, y));
        }
    }

    #[test]
    fn extreme_sizes_saturate() {
        let bb = BoundingBox::from_size(i32::MAX - 5, 0, 100, i32::MAX);
        assert_eq!(bb.top_right(), Point::new(i32::MAX, 0));
        assert_eq!(bb.bottom_left(), Point::new(i32::MAX - 5, i32::MAX));

        let bb = BoundingBox::envelope(&[i32::MIN, i32::MAX], &[0, 0]).unwrap();
        assert_eq!(bb.width(), i32::MAX);
    }

    #[test]
    fn envelope_seeds_from_first_element() {
        let bb = BoundingBox::envelope(&[-30, -10, -20], &[-5, -50, -15]).unwrap();
        assert_eq!(bb.bottom_left(), Point::new(-30, -5));
        assert_eq!(bb.top_right(), Point::new(-10, -50));

        let bb = BoundingBox::envelope(&[440, 470, 550, 560], &[210, 240, 220, 150]).unwrap();
        assert_eq!(bb.bottom_left(), Point::new(440, 240));
        assert_eq!(bb.top_right(), Point::new(560, 150));
        assert_eq!((bb.x(), bb.y(), bb.width(), bb.height()), (440, 150, 120, 90));
    }

    #[test]
    fn envelope_of_nothing_is_none() {
        assert!(BoundingBox::envelope(&[], &[]).is_none());
        assert!(BoundingBox::envelope(&[1], &[]).is_none());
    }

    #[test]
    fn outline_uses_top_left_form() {
        let mut surface = RecordingSurface::new();
        BoundingBox::from_size(1, 2, 3, 4).render_outline(&mut surface);
        assert_eq!(
            surface.calls(),
            &[DrawCall::DrawDashedRect { x: 1, y: 2, width: 3, height: 4 }]
        );
    }
}
