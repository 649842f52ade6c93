use raster_lines::{Bitmap, Point};

/// Pixels of the integer Bresenham segment from `(x0, y0)` to `(x1, y1)`.
pub fn bresenham(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<Point> {
    let (mut x, mut y) = (x0, y0);
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let mut pts = Vec::new();
    loop {
        pts.push(Point::new(x, y));
        if x == x1 && y == y1 {
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
    pts
}

/// Blank `width × height` grid with the given segments drawn in.
pub fn draw_segments(width: usize, height: usize, segments: &[(i32, i32, i32, i32)]) -> Bitmap {
    assert!(width > 0 && height > 0, "grid dimensions must be positive");
    let mut grid = Bitmap::new(width, height);
    for &(x0, y0, x1, y1) in segments {
        for p in bresenham(x0, y0, x1, y1) {
            grid.plot(p);
        }
    }
    grid
}

/// Grid from ASCII art: `#` is foreground, anything else background.
pub fn from_ascii(art: &str) -> Bitmap {
    let rows: Vec<Vec<bool>> = art
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| l.chars().map(|c| c == '#').collect())
        .collect();
    Bitmap::from_rows(&rows)
}
