use crate::direction::Direction;
use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer pixel coordinate. `x` is the column, `y` the row; `(0, 0)` is the
/// top-left corner and `y` grows downward.
///
/// Coordinates are signed so that neighbor arithmetic around border pixels can
/// step outside the grid; bounds are checked by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbor one unit step away in `direction` (itself for `NONE`).
    #[inline]
    pub fn step(self, direction: Direction) -> Point {
        let (dx, dy) = direction.offset();
        Point::new(self.x + dx, self.y + dy)
    }

    /// Chebyshev (chessboard) distance, the number of 8-connected steps.
    pub fn chebyshev(self, other: Point) -> i32 {
        (other.x - self.x).abs().max((other.y - self.y).abs())
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

/// Straight run of foreground pixels.
///
/// `start` is the seed pixel, the first one met in raster order; `end` is the
/// last pixel reached by the direction-locked walk. A single isolated pixel
/// yields `start == end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// One-pixel line at `p`.
    pub fn point(p: Point) -> Self {
        Self { start: p, end: p }
    }

    pub fn is_single_pixel(&self) -> bool {
        self.start == self.end
    }

    /// Euclidean distance between the endpoints, in pixels.
    pub fn length(&self) -> f32 {
        self.delta().norm()
    }

    /// Unit direction from `start` to `end`, `None` for one-pixel lines.
    pub fn direction(&self) -> Option<Vector2<f32>> {
        let d = self.delta();
        let len = d.norm();
        (len > 0.0).then(|| d / len)
    }

    /// Line representation: ax + by + c = 0, with sqrt(a^2+b^2)=1.
    /// `None` for one-pixel lines, which do not define an orientation.
    pub fn line(&self) -> Option<Vector3<f32>> {
        let (x0, y0) = (self.start.x as f32, self.start.y as f32);
        let (x1, y1) = (self.end.x as f32, self.end.y as f32);
        let a = y1 - y0;
        let b = x0 - x1;
        let c = x1 * y0 - x0 * y1;
        let norm = (a * a + b * b).sqrt();
        (norm > 0.0).then(|| Vector3::new(a / norm, b / norm, c / norm))
    }

    /// Compass heading from `start` to `end`.
    pub fn heading(&self) -> Direction {
        crate::classify::classify(self.start, self.end)
    }

    fn delta(&self) -> Vector2<f32> {
        Vector2::new(
            (self.end.x - self.start.x) as f32,
            (self.end.y - self.start.y) as f32,
        )
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line [start={}, end={}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_line_geometry() {
        let line = Line::new(Point::new(2, 9), Point::new(17, 9));
        assert_eq!(line.length(), 15.0);
        let dir = line.direction().unwrap();
        assert!((dir[0] - 1.0).abs() < 1e-6 && dir[1].abs() < 1e-6);
        let l = line.line().unwrap();
        // y = 9  ->  0*x + 1*y - 9 = 0 up to sign
        assert!((l[0].abs()) < 1e-6);
        assert!((l[1].abs() - 1.0).abs() < 1e-6);
        assert!((l[1] * 9.0 + l[2]).abs() < 1e-5);
        assert_eq!(line.heading(), Direction::E);
    }

    #[test]
    fn single_pixel_line_has_no_orientation() {
        let line = Line::point(Point::new(4, 4));
        assert!(line.is_single_pixel());
        assert_eq!(line.length(), 0.0);
        assert!(line.direction().is_none());
        assert!(line.line().is_none());
        assert_eq!(line.heading(), Direction::None);
    }

    #[test]
    fn step_and_chebyshev() {
        let p = Point::new(0, 0);
        assert_eq!(p.step(Direction::NW), Point::new(-1, -1));
        assert_eq!(p.step(Direction::None), p);
        assert_eq!(p.chebyshev(Point::new(3, -7)), 7);
    }
}
