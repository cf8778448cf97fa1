//! Integer point rotation about a pivot.

use crate::point::Point;

/// Angle applied by a single quarter turn.
pub const QUARTER_TURN_DEGREES: f64 = 90.0;

/// Rotate `point` about `pivot` by `degrees`.
///
/// The offset from the pivot is taken with y flipped into mathematical
/// orientation (`yP = pivot.y - y`), rotated with
/// `(xP·cosθ + yP·sinθ, yP·cosθ − xP·sinθ)`, flipped back and truncated
/// toward zero. Truncation happens on every call, so chained rotations can
/// drift by a unit. The math runs in `f64`; results outside `i32` saturate.
pub fn rotate_about(point: Point, pivot: Point, degrees: f64) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let xp = f64::from(point.x()) - f64::from(pivot.x());
    let yp = f64::from(pivot.y()) - f64::from(point.y());

    let x = f64::from(pivot.x()) + (xp * cos + yp * sin);
    let y = f64::from(pivot.y()) - (yp * cos - xp * sin);
    Point::new(x as i32, y as i32)
}

/// Rotate every point of `points` a quarter turn about `pivot`, keeping order.
pub fn quarter_turn(points: &[Point], pivot: Point) -> Vec<Point> {
    points
        .iter()
        .map(|&p| rotate_about(p, pivot, QUARTER_TURN_DEGREES))
        .collect()
}
