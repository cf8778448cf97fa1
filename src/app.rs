use std::path::PathBuf;

use anyhow::Result;
use shapeclick_core::{PointerButton, Scene, ShapeCollection};
use shapeclick_export::save_svg;
use tracing::info;

use crate::canvas::{CellSurface, Viewport};

/// Where `e` writes the SVG export
pub const DEFAULT_EXPORT_PATH: &str = "shapeclick.svg";

/// Application state
pub struct App {
    /// Shapes plus display flags
    pub shapes: ShapeCollection,
    /// Visible part of the canvas
    pub viewport: Viewport,
    /// Is the app running?
    pub running: bool,
    /// Status message to display
    pub status_message: Option<String>,
    /// Canvas size used for SVG export
    pub scene_width: i32,
    pub scene_height: i32,
    /// Target of the SVG export key
    pub export_path: PathBuf,
    /// Scene file the shapes came from, if any
    pub scene_path: Option<PathBuf>,
}

impl App {
    pub fn new(scene: &Scene, viewport: Viewport) -> Self {
        Self {
            shapes: scene.to_collection(),
            viewport,
            running: true,
            status_message: None,
            scene_width: scene.width,
            scene_height: scene.height,
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            scene_path: None,
        }
    }

    /// Route a click on a screen cell to the shapes under it.
    /// Clicks outside the canvas area are ignored.
    pub fn click(&mut self, column: u16, row: u16, button: PointerButton) -> usize {
        if !self.viewport.contains_screen(column, row) {
            return 0;
        }
        let point = self.viewport.screen_to_canvas(column, row);
        // collected before dispatch, special actions move the boxes
        let targets: Vec<String> = self
            .shapes
            .iter()
            .filter(|shape| shape.contains_point(point.x(), point.y()))
            .map(|shape| format!("{} {}", shape.color().name(), shape.name()))
            .collect();
        let hits = self
            .shapes
            .dispatch_pointer_event(point.x(), point.y(), button);
        let action = match button {
            PointerButton::Primary => "fill toggled",
            PointerButton::Secondary => "special action",
        };
        let status = if targets.is_empty() {
            format!("({}, {}): no shape here", point.x(), point.y())
        } else {
            format!("({}, {}): {} on {}", point.x(), point.y(), action, targets.join(", "))
        };
        self.set_status(status);
        hits
    }

    pub fn toggle_names(&mut self) {
        let show = !self.shapes.show_names();
        self.shapes.set_show_names(show);
        self.set_status(if show { "Names shown" } else { "Names hidden" });
    }

    pub fn toggle_bounding_boxes(&mut self) {
        let show = !self.shapes.show_bounding_boxes();
        self.shapes.set_show_bounding_boxes(show);
        self.set_status(if show {
            "Bounding boxes shown"
        } else {
            "Bounding boxes hidden"
        });
    }

    /// Write the current state to `export_path`
    pub fn export_svg(&mut self) -> Result<()> {
        save_svg(&self.shapes, self.scene_width, self.scene_height, &self.export_path)?;
        info!(path = %self.export_path.display(), "exported svg");
        self.set_status(format!("Exported to {}", self.export_path.display()));
        Ok(())
    }

    /// Rasterize the shapes for the terminal
    pub fn rasterize(&self) -> CellSurface {
        let mut surface = CellSurface::for_viewport(&self.viewport);
        self.shapes.render_all(&mut surface);
        surface
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{FILL_CHAR, Position};
    use tempfile::TempDir;

    fn demo_app() -> App {
        App::new(&Scene::demo(), Viewport::new(80, 22, 10, 20))
    }

    #[test]
    fn click_on_rectangle_toggles_fill() {
        let mut app = demo_app();
        // cell (7, 6) covers canvas point (75, 130)
        assert_eq!(app.click(7, 6, PointerButton::Primary), 1);
        assert!(app.shapes.get(0).unwrap().is_filled());
        assert_eq!(
            app.status_message.as_deref(),
            Some("(75, 130): fill toggled on Red Rectangle")
        );

        let cells = app.rasterize();
        assert_eq!(cells.get(Position::new(5, 3)).map(|(ch, _)| ch), Some(FILL_CHAR));
    }

    #[test]
    fn click_on_overlap_reaches_both_shapes() {
        let mut app = demo_app();
        // canvas point (105, 190): inside the rectangle and the circle
        assert_eq!(app.click(10, 9, PointerButton::Primary), 2);
        assert!(app.shapes.get(0).unwrap().is_filled());
        assert!(app.shapes.get(1).unwrap().is_filled());
        assert!(
            app.status_message
                .as_deref()
                .unwrap()
                .ends_with("fill toggled on Red Rectangle, Blue Circle")
        );
    }

    #[test]
    fn click_on_empty_canvas_says_so() {
        let mut app = demo_app();
        // canvas point (795, 430) is clear of every demo shape
        assert_eq!(app.click(79, 21, PointerButton::Primary), 0);
        assert_eq!(app.status_message.as_deref(), Some("(795, 430): no shape here"));
    }

    #[test]
    fn secondary_click_moves_rectangle() {
        let mut app = demo_app();
        app.click(7, 6, PointerButton::Secondary);
        let rect = app.shapes.get(0).unwrap().kind().as_rectangle().unwrap();
        assert_eq!(rect.center().x(), 80);
    }

    #[test]
    fn clicks_outside_canvas_area_are_ignored() {
        let mut app = demo_app();
        assert_eq!(app.click(7, 22, PointerButton::Primary), 0);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn flag_toggles_change_rasterized_output() {
        let mut app = demo_app();
        let with_names = app.rasterize().len();
        app.toggle_names();
        assert!(!app.shapes.show_names());
        assert!(app.rasterize().len() < with_names);

        app.toggle_bounding_boxes();
        assert!(app.shapes.show_bounding_boxes());
        assert_eq!(app.status_message.as_deref(), Some("Bounding boxes shown"));
    }

    #[test]
    fn huge_scene_rasterizes_to_the_screen_only() {
        let scene = Scene::from_json_str(
            r#"{"shapes": [
                {"type": "rectangle", "center": {"x": 0, "y": 0}, "width": 200000, "height": 200000},
                {"type": "circle", "center": {"x": 0, "y": 0}, "radius": 2000000000}
            ]}"#,
        )
        .unwrap();
        let mut app = App::new(&scene, Viewport::new(80, 22, 10, 20));
        app.click(0, 0, PointerButton::Primary);
        let cells = app.rasterize();
        assert!(cells.len() <= 80 * 22);
        assert!(cells.iter().all(|(pos, _, _)| app.viewport.canvas_to_screen(pos).is_some()));
    }

    #[test]
    fn export_writes_svg_file() {
        let dir = TempDir::new().unwrap();
        let mut app = demo_app();
        app.export_path = dir.path().join("out.svg");
        app.export_svg().unwrap();
        let svg = std::fs::read_to_string(&app.export_path).unwrap();
        assert!(svg.contains(r#"width="1024" height="768""#));
    }
}
