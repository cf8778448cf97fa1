//! SVG rendering for shapeclick
//!
//! [`SvgSurface`] turns surface calls into SVG elements, one element per
//! call, using the current color for stroke or fill. Canvas units map 1:1
//! to SVG user units.

use std::path::Path;

use anyhow::{Context, Result};
use shapeclick_core::ShapeCollection;
use shapeclick_geometry::{Point, ShapeColor, Surface};

/// Font size for shape labels
const LABEL_FONT_SIZE: i32 = 12;

/// Surface that accumulates SVG elements
#[derive(Debug, Default)]
pub struct SvgSurface {
    body: String,
    color: ShapeColor,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elements written so far, without the document wrapper
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Wrap the elements in an `<svg>` document of the given size
    pub fn into_document(self, width: i32, height: i32) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{width}" height="{height}"
     viewBox="0 0 {width} {height}"
     style="background-color: white;">
"#
        ));
        output.push_str(&self.body);
        output.push_str("</svg>\n");
        output
    }

    fn stroke(&self) -> String {
        format!(r#"fill="none" stroke="{}" stroke-width="1""#, self.color.to_css())
    }

    fn solid(&self) -> String {
        format!(r#"fill="{}" stroke="none""#, self.color.to_css())
    }

    fn rect(&mut self, x: i32, y: i32, width: i32, height: i32, paint: &str) {
        // SVG rejects negative sizes; draw inverted boxes from their other corner
        let (x, width) = normalize(x, width);
        let (y, height) = normalize(y, height);
        self.body.push_str(&format!(
            "  <rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" {paint}/>\n"
        ));
    }

    fn ellipse(&mut self, x: i32, y: i32, width: i32, height: i32, paint: &str) {
        let (x, width) = normalize(x, width);
        let (y, height) = normalize(y, height);
        let rx = f64::from(width) / 2.0;
        let ry = f64::from(height) / 2.0;
        let cx = f64::from(x) + rx;
        let cy = f64::from(y) + ry;
        self.body.push_str(&format!(
            "  <ellipse cx=\"{cx}\" cy=\"{cy}\" rx=\"{rx}\" ry=\"{ry}\" {paint}/>\n"
        ));
    }

    fn polygon(&mut self, xs: &[i32], ys: &[i32], paint: &str) {
        let points = xs
            .iter()
            .zip(ys)
            .map(|(x, y)| format!("{x},{y}"))
            .collect::<Vec<_>>()
            .join(" ");
        self.body
            .push_str(&format!("  <polygon points=\"{points}\" {paint}/>\n"));
    }
}

impl Surface for SvgSurface {
    fn set_color(&mut self, color: ShapeColor) {
        self.color = color;
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let paint = self.stroke();
        self.rect(x, y, width, height, &paint);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let paint = self.solid();
        self.rect(x, y, width, height, &paint);
    }

    fn draw_ellipse(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let paint = self.stroke();
        self.ellipse(x, y, width, height, &paint);
    }

    fn fill_ellipse(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let paint = self.solid();
        self.ellipse(x, y, width, height, &paint);
    }

    fn draw_polygon(&mut self, xs: &[i32], ys: &[i32]) {
        let paint = self.stroke();
        self.polygon(xs, ys, &paint);
    }

    fn fill_polygon(&mut self, xs: &[i32], ys: &[i32]) {
        let paint = self.solid();
        self.polygon(xs, ys, &paint);
    }

    fn draw_text(&mut self, text: &str, at: Point) {
        self.body.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"{}\" fill=\"{}\">{}</text>\n",
            at.x(),
            at.y(),
            LABEL_FONT_SIZE,
            self.color.to_css(),
            escape_xml(text)
        ));
    }

    fn draw_dashed_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let paint = format!("{} stroke-dasharray=\"2,2\"", self.stroke());
        self.rect(x, y, width, height, &paint);
    }
}

/// Render a collection to a standalone SVG document
pub fn export_svg(shapes: &ShapeCollection, width: i32, height: i32) -> String {
    let mut surface = SvgSurface::new();
    shapes.render_all(&mut surface);
    surface.into_document(width, height)
}

/// Save SVG to a file
pub fn save_svg(shapes: &ShapeCollection, width: i32, height: i32, path: &Path) -> Result<()> {
    let svg = export_svg(shapes, width, height);
    std::fs::write(path, svg)
        .with_context(|| format!("Failed to write SVG to {}", path.display()))?;
    Ok(())
}

fn normalize(start: i32, extent: i32) -> (i32, i32) {
    if extent < 0 {
        (start.saturating_add(extent), extent.saturating_neg())
    } else {
        (start, extent)
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_and_fill_paint() {
        let mut surface = SvgSurface::new();
        surface.set_color(ShapeColor::Red);
        surface.draw_rect(20, 20, 100, 200);
        surface.fill_rect(20, 20, 100, 200);
        assert_eq!(
            surface.body(),
            concat!(
                "  <rect x=\"20\" y=\"20\" width=\"100\" height=\"200\" fill=\"none\" stroke=\"#ff0000\" stroke-width=\"1\"/>\n",
                "  <rect x=\"20\" y=\"20\" width=\"100\" height=\"200\" fill=\"#ff0000\" stroke=\"none\"/>\n",
            )
        );
    }

    #[test]
    fn ellipse_is_centered_in_its_box() {
        let mut surface = SvgSurface::new();
        surface.draw_ellipse(50, 150, 100, 100);
        assert!(surface.body().contains(r#"cx="100" cy="200" rx="50" ry="50""#));
    }

    #[test]
    fn polygon_lists_points_in_order() {
        let mut surface = SvgSurface::new();
        surface.fill_polygon(&[0, 10, 10, 0], &[0, 0, 10, 10]);
        assert!(surface.body().contains(r#"points="0,0 10,0 10,10 0,10""#));
    }

    #[test]
    fn inverted_rect_is_normalized() {
        let mut surface = SvgSurface::new();
        surface.draw_dashed_rect(10, 10, -6, -4);
        assert!(surface.body().contains(r#"x="4" y="6" width="6" height="4""#));
        assert!(surface.body().contains("stroke-dasharray"));
    }

    #[test]
    fn text_is_escaped() {
        let mut surface = SvgSurface::new();
        surface.draw_text("a<b & c", Point::new(1, 2));
        assert!(surface.body().contains(">a&lt;b &amp; c</text>"));
    }
}
