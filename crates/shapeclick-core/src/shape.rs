//! The closed set of shape variants and the common shape wrapper.
//!
//! `ShapeKind` holds the variant geometry. `Shape` adds the state every
//! variant shares (resolved color, fill flag, derived bounding box) and is
//! the only place geometry is mutated, so the bounding box is rebuilt after
//! every change.

use shapeclick_geometry::{BoundingBox, Point, ShapeColor, Surface};
use tracing::debug;

use crate::circle::Circle;
use crate::config::{CircleConfig, QuadrilateralConfig, RectangleConfig, SquareConfig};
use crate::quadrilateral::Quadrilateral;
use crate::rectangle::Rectangle;

/// Geometry behavior every variant provides.
pub trait ShapeGeometry {
    /// Outline primitive
    fn draw(&self, surface: &mut dyn Surface);

    /// Solid primitive
    fn fill(&self, surface: &mut dyn Surface);

    /// Where the variant name is drawn
    fn label_anchor(&self) -> Point;

    /// Box derived from the current geometry, `None` when there is nothing
    /// to enclose.
    fn bounding_box(&self) -> Option<BoundingBox>;

    /// Refresh any top-left cache from center and size.
    fn recompute_top_left(&mut self) {}

    fn perform_special_action(&mut self) {}
}

/// Shapes that can be moved along the x axis
pub trait Movable {
    fn move_right(&mut self, units: i32);
}

/// Shapes that can be turned about their center
pub trait Rotatable {
    fn rotate_quarter_turn(&mut self);
}

/// Different types of shapes we can draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle(Rectangle),
    /// A rectangle with equal sides, labelled as a square
    Square(Rectangle),
    Circle(Circle),
    Quadrilateral(Quadrilateral),
}

impl ShapeKind {
    /// Type name drawn as the shape's label
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle(_) => "Rectangle",
            ShapeKind::Square(_) => "Square",
            ShapeKind::Circle(_) => "Circle",
            ShapeKind::Quadrilateral(_) => "Quadrilateral",
        }
    }

    /// Color used when the shape was built without one
    pub fn default_color(&self) -> ShapeColor {
        ShapeColor::Black
    }

    pub fn as_quadrilateral(&self) -> Option<&Quadrilateral> {
        match self {
            ShapeKind::Quadrilateral(quad) => Some(quad),
            _ => None,
        }
    }

    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match self {
            ShapeKind::Rectangle(rect) | ShapeKind::Square(rect) => Some(rect),
            _ => None,
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            ShapeKind::Circle(circle) => Some(circle),
            _ => None,
        }
    }

    fn geometry(&self) -> &dyn ShapeGeometry {
        match self {
            ShapeKind::Rectangle(rect) | ShapeKind::Square(rect) => rect,
            ShapeKind::Circle(circle) => circle,
            ShapeKind::Quadrilateral(quad) => quad,
        }
    }

    fn geometry_mut(&mut self) -> &mut dyn ShapeGeometry {
        match self {
            ShapeKind::Rectangle(rect) | ShapeKind::Square(rect) => rect,
            ShapeKind::Circle(circle) => circle,
            ShapeKind::Quadrilateral(quad) => quad,
        }
    }
}

/// A drawable, clickable shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    kind: ShapeKind,
    color: ShapeColor,
    filled: bool,
    bounding_box: Option<BoundingBox>,
}

impl Shape {
    /// Wrap `kind`, resolving `color` against the variant default.
    pub fn new(kind: ShapeKind, color: Option<ShapeColor>) -> Self {
        let color = color.unwrap_or_else(|| kind.default_color());
        let bounding_box = kind.geometry().bounding_box();
        match &bounding_box {
            None => debug!(shape = kind.name(), "shape has no bounding box"),
            Some(bb) if bb.width() <= 0 || bb.height() <= 0 => debug!(
                shape = kind.name(),
                width = bb.width(),
                height = bb.height(),
                "accepting degenerate geometry"
            ),
            Some(_) => {}
        }
        Self { kind, color, filled: false, bounding_box }
    }

    pub fn rectangle(config: RectangleConfig) -> Self {
        let rect = Rectangle::new(config.center, config.width, config.height);
        Self::new(ShapeKind::Rectangle(rect), config.color)
    }

    pub fn square(config: SquareConfig) -> Self {
        let rect = Rectangle::square(config.center, config.edge_length);
        Self::new(ShapeKind::Square(rect), config.color)
    }

    pub fn circle(config: CircleConfig) -> Self {
        let circle = Circle::new(config.center, config.radius);
        Self::new(ShapeKind::Circle(circle), config.color)
    }

    pub fn quadrilateral(config: QuadrilateralConfig) -> Self {
        let quad = Quadrilateral::new(config.center, config.vertices);
        Self::new(ShapeKind::Quadrilateral(quad), config.color)
    }

    /// Quadrilateral traced around `rect`, drawn in the default color
    pub fn quadrilateral_from_rectangle(rect: &Rectangle) -> Self {
        Self::new(ShapeKind::Quadrilateral(Quadrilateral::from_rectangle(rect)), None)
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn color(&self) -> ShapeColor {
        self.color
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    pub fn bounding_box(&self) -> Option<&BoundingBox> {
        self.bounding_box.as_ref()
    }

    /// Hit-test against the bounding box. A shape without one is never hit.
    pub fn contains_point(&self, px: i32, py: i32) -> bool {
        self.bounding_box
            .is_some_and(|bb| bb.contains_point(px, py))
    }

    /// Draw filled or outlined depending on the fill state
    pub fn render(&self, surface: &mut dyn Surface) {
        surface.set_color(self.color);
        if self.filled {
            self.fill(surface);
        } else {
            self.draw(surface);
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        self.kind.geometry().draw(surface);
    }

    pub fn fill(&self, surface: &mut dyn Surface) {
        self.kind.geometry().fill(surface);
    }

    /// Draw the variant name at the shape's center
    pub fn display_label(&self, surface: &mut dyn Surface) {
        surface.draw_text(self.name(), self.kind.geometry().label_anchor());
    }

    pub fn recompute_top_left(&mut self) {
        self.kind.geometry_mut().recompute_top_left();
        self.rebuild_bounding_box();
    }

    /// Translate rectangles and squares, rotate quadrilaterals, leave
    /// circles alone.
    pub fn perform_special_action(&mut self) {
        self.kind.geometry_mut().perform_special_action();
        self.rebuild_bounding_box();
        debug!(shape = self.name(), bounds = ?self.bounding_box, "special action performed");
    }

    pub fn toggle_filled(&mut self) {
        self.filled = !self.filled;
    }

    fn rebuild_bounding_box(&mut self) {
        self.bounding_box = self.kind.geometry().bounding_box();
    }
}
