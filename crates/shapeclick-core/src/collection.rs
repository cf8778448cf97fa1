use shapeclick_geometry::Surface;
use tracing::debug;

use crate::shape::Shape;

/// Pointer buttons the collection reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Toggles the fill state
    Primary,
    /// Triggers the shape's special action
    Secondary,
}

/// Ordered shapes plus display flags.
///
/// Insertion order is the z-order and the iteration order for both drawing
/// and hit-testing.
#[derive(Debug, Clone, Default)]
pub struct ShapeCollection {
    shapes: Vec<Shape>,
    show_names: bool,
    show_bounding_boxes: bool,
}

impl ShapeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Iterate all shapes in draw order
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn show_names(&self) -> bool {
        self.show_names
    }

    pub fn show_bounding_boxes(&self) -> bool {
        self.show_bounding_boxes
    }

    pub fn set_show_names(&mut self, show: bool) {
        self.show_names = show;
    }

    pub fn set_show_bounding_boxes(&mut self, show: bool) {
        self.show_bounding_boxes = show;
    }

    /// Render every shape, then its label and box outline when enabled.
    pub fn render_all(&self, surface: &mut dyn Surface) {
        for shape in &self.shapes {
            shape.render(surface);
            if self.show_names {
                shape.display_label(surface);
            }
            if self.show_bounding_boxes
                && let Some(bb) = shape.bounding_box()
            {
                bb.render_outline(surface);
            }
        }
    }

    /// Deliver a click to every shape whose bounding box contains it.
    ///
    /// Overlapping shapes all react; there is no topmost-wins rule. Returns
    /// how many shapes received the event.
    pub fn dispatch_pointer_event(&mut self, px: i32, py: i32, button: PointerButton) -> usize {
        let mut hits = 0;
        for shape in self.shapes.iter_mut() {
            if !shape.contains_point(px, py) {
                continue;
            }
            match button {
                PointerButton::Primary => shape.toggle_filled(),
                PointerButton::Secondary => shape.perform_special_action(),
            }
            hits += 1;
        }
        debug!(px, py, ?button, hits, "pointer event dispatched");
        hits
    }
}

impl Extend<Shape> for ShapeCollection {
    fn extend<I: IntoIterator<Item = Shape>>(&mut self, iter: I) {
        self.shapes.extend(iter);
    }
}

impl FromIterator<Shape> for ShapeCollection {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CircleConfig, RectangleConfig};
    use shapeclick_geometry::Point;

    #[test]
    fn miss_is_a_no_op() {
        let mut shapes: ShapeCollection =
            [Shape::circle(CircleConfig::new(Point::new(10, 10), 5))].into_iter().collect();
        assert_eq!(shapes.dispatch_pointer_event(100, 100, PointerButton::Primary), 0);
        assert!(!shapes.get(0).unwrap().is_filled());
    }

    #[test]
    fn flags_default_off() {
        let shapes = ShapeCollection::new();
        assert!(!shapes.show_names());
        assert!(!shapes.show_bounding_boxes());
        assert!(shapes.is_empty());
    }

    #[test]
    fn add_keeps_duplicates_in_order() {
        let mut shapes = ShapeCollection::new();
        let rect = Shape::rectangle(RectangleConfig::new(Point::new(0, 0), 4, 4));
        shapes.add(rect.clone());
        shapes.add(rect);
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes.dispatch_pointer_event(0, 0, PointerButton::Primary), 2);
    }
}
