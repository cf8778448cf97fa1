use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use shapeclick_geometry::ShapeColor;

use crate::app::App;
use crate::canvas::CellSurface;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Canvas area
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    render_canvas(frame, app, chunks[0]);
    render_status_bar(frame, app, chunks[1]);
    render_help_bar(frame, chunks[2]);
}

/// Terminal color for a shape color. Black maps to the terminal's default
/// foreground so outlines stay visible on dark backgrounds.
pub fn terminal_color(color: ShapeColor) -> Color {
    match color {
        ShapeColor::Black => Color::Reset,
        ShapeColor::White => Color::White,
        ShapeColor::Red => Color::Red,
        ShapeColor::Green => Color::Green,
        ShapeColor::Blue => Color::Blue,
        ShapeColor::Magenta => Color::Magenta,
        ShapeColor::Yellow => Color::Yellow,
        ShapeColor::Cyan => Color::Cyan,
        ShapeColor::Gray => Color::Gray,
        ShapeColor::Orange => Color::Rgb(255, 200, 0),
    }
}

fn render_canvas(frame: &mut Frame, app: &App, area: Rect) {
    let cells = app.rasterize();
    let canvas_widget = CanvasWidget { app, cells: &cells };
    frame.render_widget(canvas_widget, area);
}

/// Custom widget for rendering rasterized shapes
struct CanvasWidget<'a> {
    app: &'a App,
    cells: &'a CellSurface,
}

impl Widget for CanvasWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (pos, ch, color) in self.cells.iter() {
            let Some((sx, sy)) = self.app.viewport.canvas_to_screen(pos) else {
                continue;
            };
            let x = area.x + sx;
            let y = area.y + sy;
            if x < area.x + area.width && y < area.y + area.height {
                buf[(x, y)]
                    .set_char(ch)
                    .set_style(Style::default().fg(terminal_color(color)));
            }
        }
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mode_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Blue)
        .add_modifier(Modifier::BOLD);

    let scene_name = app
        .scene_path
        .as_ref()
        .map(|p| p.file_name().unwrap_or_default().to_string_lossy().to_string())
        .unwrap_or_else(|| "[demo]".to_string());

    let on_off = |flag: bool| if flag { "on" } else { "off" };
    let flags = format!(
        " names:{} bounds:{}",
        on_off(app.shapes.show_names()),
        on_off(app.shapes.show_bounding_boxes())
    );

    let status_text = app
        .status_message
        .as_ref()
        .map(|m| format!(" | {}", m))
        .unwrap_or_default();

    let spans = vec![
        Span::styled(" SHAPES ", mode_style),
        Span::raw(format!(
            " {} {} shapes{} @{},{}{}",
            scene_name,
            app.shapes.len(),
            flags,
            app.viewport.offset_x,
            app.viewport.offset_y,
            status_text
        )),
    ];

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn render_help_bar(frame: &mut Frame, area: Rect) {
    let help_text =
        "[LMB] fill [RMB] action | [n]ames [b]ounds [e]xport svg | arrows pan | [q]uit";

    let paragraph = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Viewport;
    use ratatui::{Terminal, backend::TestBackend};
    use shapeclick_core::Scene;

    #[test]
    fn demo_renders_shapes_and_bars() {
        let app = App::new(&Scene::demo(), Viewport::new(80, 22, 10, 20));
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        // top-left corner of the red rectangle
        let corner = &buffer[(2u16, 1u16)];
        assert_eq!(corner.symbol(), "┌");
        assert_eq!(corner.fg, Color::Red);

        let status: String = (0..80u16).map(|x| buffer[(x, 22u16)].symbol().to_string()).collect();
        assert!(status.contains("names:on bounds:off"));
        let help: String = (0..80u16).map(|x| buffer[(x, 23u16)].symbol().to_string()).collect();
        assert!(help.contains("[q]uit"));
    }

    #[test]
    fn black_uses_default_foreground() {
        assert_eq!(terminal_color(ShapeColor::Black), Color::Reset);
        assert_eq!(terminal_color(ShapeColor::Magenta), Color::Magenta);
    }
}
