//! Construction parameters for each shape variant.
//!
//! Every optional field is spelled out here and resolved once when the shape
//! is built. A missing `color` means "use the variant default".

use serde::{Deserialize, Serialize};
use shapeclick_geometry::{Point, ShapeColor};

/// Axis-aligned rectangle given by its center and size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RectangleConfig {
    pub center: Point,
    pub width: i32,
    pub height: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ShapeColor>,
}

/// Square given by its center and edge length
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareConfig {
    pub center: Point,
    pub edge_length: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ShapeColor>,
}

/// Circle given by its center and radius
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircleConfig {
    pub center: Point,
    pub radius: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ShapeColor>,
}

/// Quadrilateral given by a declared center and its vertices in winding order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadrilateralConfig {
    pub center: Point,
    pub vertices: Vec<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ShapeColor>,
}

impl RectangleConfig {
    pub fn new(center: Point, width: i32, height: i32) -> Self {
        Self { center, width, height, color: None }
    }

    pub fn with_color(mut self, color: ShapeColor) -> Self {
        self.color = Some(color);
        self
    }
}

impl SquareConfig {
    pub fn new(center: Point, edge_length: i32) -> Self {
        Self { center, edge_length, color: None }
    }

    pub fn with_color(mut self, color: ShapeColor) -> Self {
        self.color = Some(color);
        self
    }
}

impl CircleConfig {
    pub fn new(center: Point, radius: i32) -> Self {
        Self { center, radius, color: None }
    }

    pub fn with_color(mut self, color: ShapeColor) -> Self {
        self.color = Some(color);
        self
    }
}

impl QuadrilateralConfig {
    pub fn new(center: Point, vertices: Vec<Point>) -> Self {
        Self { center, vertices, color: None }
    }

    pub fn with_color(mut self, color: ShapeColor) -> Self {
        self.color = Some(color);
        self
    }
}
