//! Geometry primitives for shapeclick.
//!
//! Integer points, derived bounding boxes, quarter-turn rotation and the
//! [`Surface`] contract that rendering backends implement.

pub mod bounds;
pub mod color;
pub mod point;
pub mod rotate;
pub mod surface;

pub use bounds::BoundingBox;
pub use color::ShapeColor;
pub use point::Point;
pub use rotate::{QUARTER_TURN_DEGREES, quarter_turn, rotate_about};
pub use surface::{DrawCall, RecordingSurface, Surface};
