//! The drawing contract every rendering backend implements.
//!
//! Shapes never know what they are drawn on: the terminal front-end
//! rasterizes these calls into character cells, the SVG exporter turns them
//! into elements, and [`RecordingSurface`] keeps them for inspection.

use crate::color::ShapeColor;
use crate::point::Point;

/// Primitive draw calls accepted by a rendering surface.
///
/// Rectangles and ellipses are given by their top-left corner and size,
/// polygons by parallel x/y coordinate slices in winding order.
pub trait Surface {
    fn set_color(&mut self, color: ShapeColor);

    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32);

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32);

    fn draw_ellipse(&mut self, x: i32, y: i32, width: i32, height: i32);

    fn fill_ellipse(&mut self, x: i32, y: i32, width: i32, height: i32);

    fn draw_polygon(&mut self, xs: &[i32], ys: &[i32]);

    fn fill_polygon(&mut self, xs: &[i32], ys: &[i32]);

    /// Draw text with its anchor at `at`.
    fn draw_text(&mut self, text: &str, at: Point);

    /// Dashed rectangle outline, used for bounding boxes.
    fn draw_dashed_rect(&mut self, x: i32, y: i32, width: i32, height: i32);
}

/// A single call received by a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    SetColor(ShapeColor),
    DrawRect { x: i32, y: i32, width: i32, height: i32 },
    FillRect { x: i32, y: i32, width: i32, height: i32 },
    DrawEllipse { x: i32, y: i32, width: i32, height: i32 },
    FillEllipse { x: i32, y: i32, width: i32, height: i32 },
    DrawPolygon { xs: Vec<i32>, ys: Vec<i32> },
    FillPolygon { xs: Vec<i32>, ys: Vec<i32> },
    DrawText { text: String, at: Point },
    DrawDashedRect { x: i32, y: i32, width: i32, height: i32 },
}

/// Surface that records every call in order instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Text drawn so far, in call order
    pub fn texts(&self) -> Vec<(&str, Point)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::DrawText { text, at } => Some((text.as_str(), *at)),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn set_color(&mut self, color: ShapeColor) {
        self.calls.push(DrawCall::SetColor(color));
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.calls.push(DrawCall::DrawRect { x, y, width, height });
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.calls.push(DrawCall::FillRect { x, y, width, height });
    }

    fn draw_ellipse(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.calls.push(DrawCall::DrawEllipse { x, y, width, height });
    }

    fn fill_ellipse(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.calls.push(DrawCall::FillEllipse { x, y, width, height });
    }

    fn draw_polygon(&mut self, xs: &[i32], ys: &[i32]) {
        self.calls.push(DrawCall::DrawPolygon { xs: xs.to_vec(), ys: ys.to_vec() });
    }

    fn fill_polygon(&mut self, xs: &[i32], ys: &[i32]) {
        self.calls.push(DrawCall::FillPolygon { xs: xs.to_vec(), ys: ys.to_vec() });
    }

    fn draw_text(&mut self, text: &str, at: Point) {
        self.calls.push(DrawCall::DrawText { text: text.to_string(), at });
    }

    fn draw_dashed_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.calls.push(DrawCall::DrawDashedRect { x, y, width, height });
    }
}
