//! Core shape model for shapeclick.
//!
//! Shape variants own their geometry and derive an axis-aligned bounding box
//! from it. A [`ShapeCollection`] draws them in insertion order and routes
//! pointer clicks to every shape whose box contains the click: the primary
//! button toggles the fill, the secondary button runs the variant's special
//! action (rectangles and squares move right, quadrilaterals turn a quarter,
//! circles do nothing).

pub mod circle;
pub mod collection;
pub mod config;
pub mod quadrilateral;
pub mod rectangle;
pub mod scene;
pub mod shape;

pub use circle::Circle;
pub use collection::{PointerButton, ShapeCollection};
pub use config::{CircleConfig, QuadrilateralConfig, RectangleConfig, SquareConfig};
pub use quadrilateral::Quadrilateral;
pub use rectangle::{Rectangle, TRANSLATE_STEP};
pub use scene::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Scene, ShapeSpec};
pub use shape::{Movable, Rotatable, Shape, ShapeGeometry, ShapeKind};
