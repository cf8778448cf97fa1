use std::collections::HashMap;

use shapeclick_geometry::{Point, ShapeColor, Surface};

/// Character used for solid areas
pub const FILL_CHAR: char = '█';

/// Character used for polygon edges
pub const EDGE_CHAR: char = '*';

/// Character used for ellipse outlines
pub const ELLIPSE_CHAR: char = 'o';

/// A terminal cell position (can be negative, shapes may sit left of or above the origin)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn neighbors(self) -> [Position; 4] {
        [
            Position::new(self.x.saturating_sub(1), self.y),
            Position::new(self.x.saturating_add(1), self.y),
            Position::new(self.x, self.y.saturating_sub(1)),
            Position::new(self.x, self.y.saturating_add(1)),
        ]
    }
}

/// Inclusive rectangle of cells. Empty when a max is below its min.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl CellRect {
    /// Every representable cell
    pub const UNBOUNDED: CellRect = CellRect {
        min_x: i32::MIN,
        min_y: i32::MIN,
        max_x: i32::MAX,
        max_y: i32::MAX,
    };

    /// Smallest rectangle holding both cells
    pub fn spanning(a: Position, b: Position) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        (self.min_x..=self.max_x).contains(&pos.x) && (self.min_y..=self.max_y).contains(&pos.y)
    }

    /// Overlap of two rectangles, `None` when they share no cell
    pub fn intersect(&self, other: &CellRect) -> Option<CellRect> {
        let overlap = CellRect {
            min_x: self.min_x.max(other.min_x),
            min_y: self.min_y.max(other.min_y),
            max_x: self.max_x.min(other.max_x),
            max_y: self.max_y.min(other.max_y),
        };
        (overlap.min_x <= overlap.max_x && overlap.min_y <= overlap.max_y).then_some(overlap)
    }

    /// Box-drawing glyph for `pos` on the outline of this rectangle
    fn outline_glyph(&self, pos: Position) -> char {
        let on_left = pos.x == self.min_x;
        let on_right = pos.x == self.max_x;
        let on_top = pos.y == self.min_y;
        let on_bottom = pos.y == self.max_y;

        if self.min_x == self.max_x && self.min_y == self.max_y {
            return '┼';
        }
        if self.min_y == self.max_y {
            return '─';
        }
        if self.min_x == self.max_x {
            return '│';
        }
        match (on_left, on_right, on_top, on_bottom) {
            (true, _, true, _) => '┌',
            (_, true, true, _) => '┐',
            (true, _, _, true) => '└',
            (_, true, _, true) => '┘',
            (_, _, true, _) | (_, _, _, true) => '─',
            _ => '│',
        }
    }
}

/// Generate all points on a line using Bresenham's algorithm
pub fn line_points(from: Position, to: Position) -> Vec<Position> {
    let mut points = Vec::new();

    let dx = (i64::from(to.x) - i64::from(from.x)).abs();
    let dy = -(i64::from(to.y) - i64::from(from.y)).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = from.x;
    let mut y = from.y;

    loop {
        points.push(Position::new(x, y));

        if x == to.x && y == to.y {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }

    points
}

/// Cut a segment down to the part inside `clip` (Liang-Barsky).
/// Segments already inside come back unchanged.
fn clip_segment(from: Position, to: Position, clip: &CellRect) -> Option<(Position, Position)> {
    let (x0, y0) = (f64::from(from.x), f64::from(from.y));
    let (dx, dy) = (f64::from(to.x) - x0, f64::from(to.y) - y0);
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;

    for (p, q) in [
        (-dx, x0 - f64::from(clip.min_x)),
        (dx, f64::from(clip.max_x) - x0),
        (-dy, y0 - f64::from(clip.min_y)),
        (dy, f64::from(clip.max_y) - y0),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let at = |t: f64| Position::new((x0 + t * dx).round() as i32, (y0 + t * dy).round() as i32);
    Some((at(t0), at(t1)))
}

/// Viewport - which cells of the canvas are visible, and how many canvas
/// units one cell covers
#[derive(Debug, Clone)]
pub struct Viewport {
    pub offset_x: i32,
    pub offset_y: i32,
    pub width: u16,
    pub height: u16,
    pub cell_width: i32,
    pub cell_height: i32,
}

impl Viewport {
    pub fn new(width: u16, height: u16, cell_width: i32, cell_height: i32) -> Self {
        Self {
            offset_x: 0,
            offset_y: 0,
            width,
            height,
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
        }
    }

    /// Canvas point at the middle of a screen cell
    pub fn screen_to_canvas(&self, screen_x: u16, screen_y: u16) -> Point {
        let col = self.offset_x.saturating_add(i32::from(screen_x));
        let row = self.offset_y.saturating_add(i32::from(screen_y));
        Point::new(
            col.saturating_mul(self.cell_width)
                .saturating_add(self.cell_width / 2),
            row.saturating_mul(self.cell_height)
                .saturating_add(self.cell_height / 2),
        )
    }

    /// Convert a cell position to screen coordinates (if visible)
    pub fn canvas_to_screen(&self, pos: Position) -> Option<(u16, u16)> {
        let screen_x = i64::from(pos.x) - i64::from(self.offset_x);
        let screen_y = i64::from(pos.y) - i64::from(self.offset_y);

        if screen_x >= 0
            && screen_x < i64::from(self.width)
            && screen_y >= 0
            && screen_y < i64::from(self.height)
        {
            Some((screen_x as u16, screen_y as u16))
        } else {
            None
        }
    }

    /// Cells currently on screen
    pub fn visible_cells(&self) -> CellRect {
        CellRect {
            min_x: self.offset_x,
            min_y: self.offset_y,
            max_x: self.offset_x.saturating_add(i32::from(self.width) - 1),
            max_y: self.offset_y.saturating_add(i32::from(self.height) - 1),
        }
    }

    /// Whether a screen cell lies inside the canvas area
    pub fn contains_screen(&self, screen_x: u16, screen_y: u16) -> bool {
        screen_x < self.width && screen_y < self.height
    }

    /// Pan the viewport by whole cells
    pub fn pan(&mut self, dx: i32, dy: i32) {
        self.offset_x = self.offset_x.saturating_add(dx);
        self.offset_y = self.offset_y.saturating_add(dy);
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }
}

/// Ellipse inscribed in a box, in canvas units
struct EllipseArea {
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
}

/// Surface that rasterizes shapes into terminal cells.
///
/// Later calls overwrite earlier ones, so draw order is z-order. Only cells
/// inside the clip rectangle are visited, so the cost of a frame follows
/// the screen size rather than the shape size.
#[derive(Debug, Clone)]
pub struct CellSurface {
    cells: HashMap<Position, (char, ShapeColor)>,
    color: ShapeColor,
    cell_width: i32,
    cell_height: i32,
    clip: CellRect,
}

impl CellSurface {
    pub fn new(cell_width: i32, cell_height: i32) -> Self {
        Self {
            cells: HashMap::new(),
            color: ShapeColor::default(),
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
            clip: CellRect::UNBOUNDED,
        }
    }

    /// Surface limited to the cells the viewport shows
    pub fn for_viewport(viewport: &Viewport) -> Self {
        let mut surface = Self::new(viewport.cell_width, viewport.cell_height);
        surface.clip = viewport.visible_cells();
        surface
    }

    pub fn get(&self, pos: Position) -> Option<(char, ShapeColor)> {
        self.cells.get(&pos).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, char, ShapeColor)> + '_ {
        self.cells.iter().map(|(pos, &(ch, color))| (*pos, ch, color))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell containing a canvas point
    pub fn cell_at(&self, x: i32, y: i32) -> Position {
        Position::new(x.div_euclid(self.cell_width), y.div_euclid(self.cell_height))
    }

    /// Cells covered by a box given as top-left and size
    fn cell_box(&self, x: i32, y: i32, width: i32, height: i32) -> CellRect {
        CellRect::spanning(
            self.cell_at(x, y),
            self.cell_at(x.saturating_add(width), y.saturating_add(height)),
        )
    }

    fn cell_center(&self, pos: Position) -> (f64, f64) {
        let (w, h) = (f64::from(self.cell_width), f64::from(self.cell_height));
        (f64::from(pos.x) * w + w / 2.0, f64::from(pos.y) * h + h / 2.0)
    }

    fn plot(&mut self, pos: Position, ch: char) {
        if self.clip.contains(pos) {
            self.cells.insert(pos, (ch, self.color));
        }
    }

    fn plot_rect_outline(&mut self, bounds: CellRect, dashed: bool) {
        let Some(visible) = bounds.intersect(&self.clip) else {
            return;
        };
        let mut outline = Vec::new();
        for row in visible.min_y..=visible.max_y {
            if row == bounds.min_y || row == bounds.max_y {
                outline.extend((visible.min_x..=visible.max_x).map(|col| Position::new(col, row)));
            } else {
                outline.push(Position::new(bounds.min_x, row));
                outline.push(Position::new(bounds.max_x, row));
            }
        }
        for pos in outline {
            let glyph = match bounds.outline_glyph(pos) {
                '─' if dashed => '╌',
                '│' if dashed => '╎',
                other => other,
            };
            self.plot(pos, glyph);
        }
    }

    fn ellipse_area(x: i32, y: i32, width: i32, height: i32) -> Option<EllipseArea> {
        let (x, width) = normalize(x, width);
        let (y, height) = normalize(y, height);
        if width == 0 || height == 0 {
            return None;
        }
        let rx = f64::from(width) / 2.0;
        let ry = f64::from(height) / 2.0;
        Some(EllipseArea { cx: f64::from(x) + rx, cy: f64::from(y) + ry, rx, ry })
    }

    fn in_ellipse(&self, area: &EllipseArea, pos: Position) -> bool {
        let (px, py) = self.cell_center(pos);
        let dx = (px - area.cx) / area.rx;
        let dy = (py - area.cy) / area.ry;
        dx * dx + dy * dy <= 1.0
    }

    /// Visible cells whose centers fall inside the ellipse inscribed in the
    /// box; with `outline_only`, just those with a neighbor outside it. An
    /// ellipse smaller than a cell keeps its middle cell.
    fn ellipse_cells(&self, x: i32, y: i32, width: i32, height: i32, outline_only: bool) -> Vec<Position> {
        let bounds = self.cell_box(x, y, width, height);
        let mut cells = Vec::new();

        if let (Some(area), Some(visible)) =
            (Self::ellipse_area(x, y, width, height), bounds.intersect(&self.clip))
        {
            for row in visible.min_y..=visible.max_y {
                for col in visible.min_x..=visible.max_x {
                    let pos = Position::new(col, row);
                    if !self.in_ellipse(&area, pos) {
                        continue;
                    }
                    if !outline_only
                        || pos.neighbors().iter().any(|&n| !self.in_ellipse(&area, n))
                    {
                        cells.push(pos);
                    }
                }
            }
        }

        // emptiness only means "too small" when nothing was clipped away
        if cells.is_empty() && bounds.intersect(&self.clip) == Some(bounds) {
            let (x, width) = normalize(x, width);
            let (y, height) = normalize(y, height);
            cells.push(self.cell_at(x.saturating_add(width / 2), y.saturating_add(height / 2)));
        }
        cells
    }

    fn polygon_cells(&self, xs: &[i32], ys: &[i32]) -> Vec<Position> {
        xs.iter().zip(ys).map(|(&x, &y)| self.cell_at(x, y)).collect()
    }

    fn plot_polygon_edges(&mut self, vertices: &[Position], ch: char) {
        let Some(&first) = vertices.first() else {
            return;
        };
        let closing = vertices.iter().skip(1).chain(std::iter::once(&first));
        let edges: Vec<_> = vertices.iter().zip(closing).collect();
        for (&from, &to) in edges {
            let Some((from, to)) = clip_segment(from, to, &self.clip) else {
                continue;
            };
            for pos in line_points(from, to) {
                self.plot(pos, ch);
            }
        }
    }
}

impl Surface for CellSurface {
    fn set_color(&mut self, color: ShapeColor) {
        self.color = color;
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let bounds = self.cell_box(x, y, width, height);
        self.plot_rect_outline(bounds, false);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let Some(visible) = self.cell_box(x, y, width, height).intersect(&self.clip) else {
            return;
        };
        for row in visible.min_y..=visible.max_y {
            for col in visible.min_x..=visible.max_x {
                self.plot(Position::new(col, row), FILL_CHAR);
            }
        }
    }

    fn draw_ellipse(&mut self, x: i32, y: i32, width: i32, height: i32) {
        for pos in self.ellipse_cells(x, y, width, height, true) {
            self.plot(pos, ELLIPSE_CHAR);
        }
    }

    fn fill_ellipse(&mut self, x: i32, y: i32, width: i32, height: i32) {
        for pos in self.ellipse_cells(x, y, width, height, false) {
            self.plot(pos, FILL_CHAR);
        }
    }

    fn draw_polygon(&mut self, xs: &[i32], ys: &[i32]) {
        let vertices = self.polygon_cells(xs, ys);
        self.plot_polygon_edges(&vertices, EDGE_CHAR);
    }

    fn fill_polygon(&mut self, xs: &[i32], ys: &[i32]) {
        let vertices = self.polygon_cells(xs, ys);
        let Some(bounds) = vertices.iter().map(|&p| CellRect::spanning(p, p)).reduce(|a, b| {
            CellRect::spanning(
                Position::new(a.min_x.min(b.min_x), a.min_y.min(b.min_y)),
                Position::new(a.max_x.max(b.max_x), a.max_y.max(b.max_y)),
            )
        }) else {
            return;
        };

        if let Some(visible) = bounds.intersect(&self.clip) {
            for row in visible.min_y..=visible.max_y {
                for col in visible.min_x..=visible.max_x {
                    let pos = Position::new(col, row);
                    let (px, py) = self.cell_center(pos);
                    if point_in_polygon(px, py, xs, ys) {
                        self.plot(pos, FILL_CHAR);
                    }
                }
            }
        }
        // thin polygons may cover no cell centers
        self.plot_polygon_edges(&vertices, FILL_CHAR);
    }

    fn draw_text(&mut self, text: &str, at: Point) {
        let anchor = self.cell_at(at.x(), at.y());
        let start = anchor.x.saturating_sub(text.chars().count() as i32 / 2);
        for (i, ch) in text.chars().enumerate() {
            self.plot(Position::new(start.saturating_add(i as i32), anchor.y), ch);
        }
    }

    fn draw_dashed_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let bounds = self.cell_box(x, y, width, height);
        self.plot_rect_outline(bounds, true);
    }
}

fn normalize(start: i32, extent: i32) -> (i32, i32) {
    if extent < 0 {
        (start.saturating_add(extent), extent.saturating_neg())
    } else {
        (start, extent)
    }
}

/// Even-odd test against the polygon given by parallel coordinate slices
fn point_in_polygon(px: f64, py: f64, xs: &[i32], ys: &[i32]) -> bool {
    let n = xs.len().min(ys.len());
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (f64::from(xs[i]), f64::from(ys[i]));
        let (xj, yj) = (f64::from(xs[j]), f64::from(ys[j]));
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
