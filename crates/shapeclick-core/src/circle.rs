use shapeclick_geometry::{BoundingBox, Point, Surface};

use crate::shape::ShapeGeometry;

/// Circle stored as center + radius. Has no special action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circle {
    x_center: i32,
    y_center: i32,
    radius: i32,
    top_left: Point,
}

impl Circle {
    pub fn new(center: Point, radius: i32) -> Self {
        let mut circle = Self {
            x_center: center.x(),
            y_center: center.y(),
            radius,
            top_left: center,
        };
        circle.recompute_top_left();
        circle
    }

    pub fn center(&self) -> Point {
        Point::new(self.x_center, self.y_center)
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn diameter(&self) -> i32 {
        self.radius.saturating_mul(2)
    }

    pub fn top_left(&self) -> Point {
        self.top_left
    }
}

impl ShapeGeometry for Circle {
    fn draw(&self, surface: &mut dyn Surface) {
        let d = self.diameter();
        surface.draw_ellipse(self.top_left.x(), self.top_left.y(), d, d);
    }

    fn fill(&self, surface: &mut dyn Surface) {
        let d = self.diameter();
        surface.fill_ellipse(self.top_left.x(), self.top_left.y(), d, d);
    }

    fn label_anchor(&self) -> Point {
        self.center()
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        Some(BoundingBox::from_diameter(
            self.top_left.x(),
            self.top_left.y(),
            self.diameter(),
        ))
    }

    fn recompute_top_left(&mut self) {
        self.top_left = Point::new(
            self.x_center.saturating_sub(self.radius),
            self.y_center.saturating_sub(self.radius),
        );
    }
}
