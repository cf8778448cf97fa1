//! Scene descriptions: the built-in demo set and JSON scene files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shapeclick_geometry::{Point, ShapeColor};
use tracing::info;

use crate::collection::ShapeCollection;
use crate::config::{CircleConfig, QuadrilateralConfig, RectangleConfig, SquareConfig};
use crate::rectangle::Rectangle;
use crate::shape::Shape;

/// Default canvas width in canvas units
pub const DEFAULT_WIDTH: i32 = 1024;

/// Default canvas height in canvas units
pub const DEFAULT_HEIGHT: i32 = 768;

/// One entry of a scene's shape list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeSpec {
    Rectangle(RectangleConfig),
    Square(SquareConfig),
    Circle(CircleConfig),
    Quadrilateral(QuadrilateralConfig),
    /// Quadrilateral traced around a rectangle. The rectangle's color is
    /// not carried over.
    QuadrilateralFromRectangle(RectangleConfig),
}

impl ShapeSpec {
    pub fn build(&self) -> Shape {
        match self {
            ShapeSpec::Rectangle(config) => Shape::rectangle(config.clone()),
            ShapeSpec::Square(config) => Shape::square(config.clone()),
            ShapeSpec::Circle(config) => Shape::circle(config.clone()),
            ShapeSpec::Quadrilateral(config) => Shape::quadrilateral(config.clone()),
            ShapeSpec::QuadrilateralFromRectangle(config) => {
                let rect = Rectangle::new(config.center, config.width, config.height);
                Shape::quadrilateral_from_rectangle(&rect)
            }
        }
    }
}

/// Shapes to show plus the initial display flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    #[serde(default = "default_show_names")]
    pub show_names: bool,
    #[serde(default)]
    pub show_bounding_boxes: bool,
    #[serde(default)]
    pub shapes: Vec<ShapeSpec>,
}

fn default_width() -> i32 {
    DEFAULT_WIDTH
}

fn default_height() -> i32 {
    DEFAULT_HEIGHT
}

fn default_show_names() -> bool {
    true
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            show_names: default_show_names(),
            show_bounding_boxes: false,
            shapes: Vec::new(),
        }
    }
}

impl Scene {
    /// The fixed demo set: a rectangle, a circle, a square, a quadrilateral
    /// with explicit vertices and a quadrilateral traced around a rectangle.
    pub fn demo() -> Self {
        Self {
            shapes: vec![
                ShapeSpec::Rectangle(
                    RectangleConfig::new(Point::new(70, 120), 100, 200).with_color(ShapeColor::Red),
                ),
                ShapeSpec::Circle(
                    CircleConfig::new(Point::new(100, 200), 50).with_color(ShapeColor::Blue),
                ),
                ShapeSpec::Square(
                    SquareConfig::new(Point::new(300, 300), 100).with_color(ShapeColor::Green),
                ),
                ShapeSpec::Quadrilateral(
                    QuadrilateralConfig::new(
                        Point::new(500, 200),
                        vec![
                            Point::new(440, 210),
                            Point::new(470, 240),
                            Point::new(550, 220),
                            Point::new(560, 150),
                        ],
                    )
                    .with_color(ShapeColor::Magenta),
                ),
                ShapeSpec::QuadrilateralFromRectangle(
                    RectangleConfig::new(Point::new(400, 120), 50, 100).with_color(ShapeColor::Red),
                ),
            ],
            ..Self::default()
        }
    }

    /// Parse a scene from JSON text
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Invalid scene description")
    }

    /// Load a scene file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file {}", path.display()))?;
        let scene = Self::from_json_str(&content)
            .with_context(|| format!("Failed to parse scene file {}", path.display()))?;
        info!(path = %path.display(), shapes = scene.shapes.len(), "loaded scene");
        Ok(scene)
    }

    /// Build the shapes and apply the display flags
    pub fn to_collection(&self) -> ShapeCollection {
        let mut collection: ShapeCollection = self.shapes.iter().map(ShapeSpec::build).collect();
        collection.set_show_names(self.show_names);
        collection.set_show_bounding_boxes(self.show_bounding_boxes);
        collection
    }
}
