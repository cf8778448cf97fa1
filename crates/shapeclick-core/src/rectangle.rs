use shapeclick_geometry::{BoundingBox, Point, Surface};

use crate::shape::{Movable, ShapeGeometry};

/// Distance a rectangle travels along +x on each special action
pub const TRANSLATE_STEP: i32 = 10;

/// Axis-aligned rectangle stored as center + size.
///
/// Also backs the `Square` variant, which is a rectangle built with equal
/// sides. The top-left corner is a cache derived from the center with
/// integer division, so odd sizes lose their remainder: a width of 5 puts
/// the left edge 2 units from the center, and negative sizes truncate
/// toward zero the same way. Coordinates saturate at the `i32` limits, so a
/// rectangle pushed past `i32::MAX` stops there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rectangle {
    x_center: i32,
    y_center: i32,
    width: i32,
    height: i32,
    top_left: Point,
}

impl Rectangle {
    pub fn new(center: Point, width: i32, height: i32) -> Self {
        let mut rect = Self {
            x_center: center.x(),
            y_center: center.y(),
            width,
            height,
            top_left: center,
        };
        rect.recompute_top_left();
        rect
    }

    /// Rectangle with both sides equal to `edge_length`
    pub fn square(center: Point, edge_length: i32) -> Self {
        Self::new(center, edge_length, edge_length)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x_center, self.y_center)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn top_left(&self) -> Point {
        self.top_left
    }

    /// Corners clockwise from top-left, each as a fresh point
    pub fn corners(&self) -> [Point; 4] {
        let top_left = self.top_left;
        let top_right = Point::new(top_left.x().saturating_add(self.width), top_left.y());
        let bottom_right = Point::new(top_right.x(), top_right.y().saturating_add(self.height));
        let bottom_left = Point::new(top_left.x(), bottom_right.y());
        [top_left, top_right, bottom_right, bottom_left]
    }
}

impl Movable for Rectangle {
    fn move_right(&mut self, units: i32) {
        self.x_center = self.x_center.saturating_add(units);
        self.recompute_top_left();
    }
}

impl ShapeGeometry for Rectangle {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_rect(self.top_left.x(), self.top_left.y(), self.width, self.height);
    }

    fn fill(&self, surface: &mut dyn Surface) {
        surface.fill_rect(self.top_left.x(), self.top_left.y(), self.width, self.height);
    }

    fn label_anchor(&self) -> Point {
        self.center()
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        Some(BoundingBox::from_size(
            self.top_left.x(),
            self.top_left.y(),
            self.width,
            self.height,
        ))
    }

    fn recompute_top_left(&mut self) {
        self.top_left = Point::new(
            self.x_center.saturating_sub(self.width / 2),
            self.y_center.saturating_sub(self.height / 2),
        );
    }

    fn perform_special_action(&mut self) {
        self.move_right(TRANSLATE_STEP);
    }
}
