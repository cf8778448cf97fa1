use shapeclick_geometry::{BoundingBox, Point, Surface, quarter_turn};

use crate::rectangle::Rectangle;
use crate::shape::{Rotatable, ShapeGeometry};

/// Polygon with a caller-declared center.
///
/// Vertex order is the winding order used for drawing and is never changed.
/// `xs`/`ys` are the vertex coordinates split into parallel arrays for the
/// polygon primitives; they are rebuilt from `vertices` on every change.
/// The center is the label anchor and rotation pivot and need not be the
/// centroid of the vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quadrilateral {
    center: Point,
    vertices: Vec<Point>,
    xs: Vec<i32>,
    ys: Vec<i32>,
}

impl Quadrilateral {
    pub fn new(center: Point, vertices: Vec<Point>) -> Self {
        let (xs, ys) = split_coordinates(&vertices);
        Self { center, vertices, xs, ys }
    }

    pub fn from_corners(center: Point, p1: Point, p2: Point, p3: Point, p4: Point) -> Self {
        Self::new(center, vec![p1, p2, p3, p4])
    }

    /// Quadrilateral tracing `rect` clockwise from its top-left corner,
    /// centered on the rectangle's center.
    pub fn from_rectangle(rect: &Rectangle) -> Self {
        Self::new(rect.center(), rect.corners().to_vec())
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn x_coordinates(&self) -> &[i32] {
        &self.xs
    }

    pub fn y_coordinates(&self) -> &[i32] {
        &self.ys
    }

    fn set_vertices(&mut self, vertices: Vec<Point>) {
        let (xs, ys) = split_coordinates(&vertices);
        self.vertices = vertices;
        self.xs = xs;
        self.ys = ys;
    }
}

impl Rotatable for Quadrilateral {
    fn rotate_quarter_turn(&mut self) {
        let rotated = quarter_turn(&self.vertices, self.center);
        self.set_vertices(rotated);
    }
}

impl ShapeGeometry for Quadrilateral {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_polygon(&self.xs, &self.ys);
    }

    fn fill(&self, surface: &mut dyn Surface) {
        surface.fill_polygon(&self.xs, &self.ys);
    }

    fn label_anchor(&self) -> Point {
        self.center
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::envelope(&self.xs, &self.ys)
    }

    fn perform_special_action(&mut self) {
        self.rotate_quarter_turn();
    }
}

fn split_coordinates(vertices: &[Point]) -> (Vec<i32>, Vec<i32>) {
    vertices.iter().map(|p| (p.x(), p.y())).unzip()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Quadrilateral {
        Quadrilateral::from_corners(
            Point::new(5, 5),
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
        )
    }

    #[test]
    fn coordinates_follow_vertex_order() {
        let quad = unit_square();
        assert_eq!(quad.x_coordinates(), &[0, 10, 10, 0]);
        assert_eq!(quad.y_coordinates(), &[0, 0, 10, 10]);
    }

    #[test]
    fn rotation_keeps_arrays_in_sync() {
        let mut quad = unit_square();
        quad.rotate_quarter_turn();
        assert_eq!(
            quad.vertices(),
            &[
                Point::new(10, 0),
                Point::new(10, 10),
                Point::new(0, 10),
                Point::new(0, 0),
            ]
        );
        assert_eq!(quad.x_coordinates(), &[10, 10, 0, 0]);
        assert_eq!(quad.y_coordinates(), &[0, 10, 10, 0]);
    }

    #[test]
    fn envelope_handles_negative_vertices() {
        let quad = Quadrilateral::from_corners(
            Point::new(-20, -20),
            Point::new(-30, -30),
            Point::new(-10, -30),
            Point::new(-10, -10),
            Point::new(-30, -10),
        );
        let bb = quad.bounding_box().unwrap();
        assert_eq!(bb.bottom_left(), Point::new(-30, -10));
        assert_eq!(bb.top_right(), Point::new(-10, -30));
        assert!(bb.contains_point(-20, -20));
    }

    #[test]
    fn empty_vertex_list_has_no_box() {
        let quad = Quadrilateral::new(Point::new(0, 0), Vec::new());
        assert!(quad.bounding_box().is_none());
    }

    #[test]
    fn label_sits_on_declared_center() {
        let quad = Quadrilateral::from_corners(
            Point::new(0, 0),
            Point::new(10, 10),
            Point::new(20, 10),
            Point::new(20, 20),
            Point::new(10, 20),
        );
        assert_eq!(quad.label_anchor(), Point::new(0, 0));
    }
}
