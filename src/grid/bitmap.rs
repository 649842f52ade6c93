//! Owned binary mask in row-major layout (stride == width).
use super::BinaryGrid;
use crate::types::Point;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bitmap {
    /// Grid width in pixels
    pub w: usize,
    /// Grid height in pixels
    pub h: usize,
    /// Foreground flags in row-major order
    pub data: Vec<bool>,
}

impl Bitmap {
    /// All-background grid of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![false; w * h],
        }
    }

    /// Build from nested rows. Width is the first row's length; rows are
    /// expected to share it.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Self {
        let w = rows.first().map_or(0, |r| r.as_ref().len());
        let h = rows.len();
        let mut data = Vec::with_capacity(w * h);
        for row in rows {
            data.extend_from_slice(&row.as_ref()[..w]);
        }
        Self { w, h, data }
    }

    /// Build by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                data.push(f(x, y));
            }
        }
        Self { w, h, data }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: bool) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Mark `p` as foreground; points outside the grid are ignored.
    pub fn plot(&mut self, p: Point) {
        if self.contains(p) {
            self.set(p.x as usize, p.y as usize, true);
        }
    }
}

impl BinaryGrid for Bitmap {
    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn is_foreground(&self, x: usize, y: usize) -> bool {
        self.get(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_matches_nested_layout() {
        let rows = vec![vec![true, false, false], vec![false, false, true]];
        let bm = Bitmap::from_rows(&rows);
        assert_eq!((bm.width(), bm.height()), (3, 2));
        assert!(bm.get(0, 0));
        assert!(bm.get(2, 1));
        assert_eq!(bm.count_foreground(), 2);
    }

    #[test]
    fn plot_ignores_points_outside() {
        let mut bm = Bitmap::new(4, 4);
        bm.plot(Point::new(-1, 2));
        bm.plot(Point::new(4, 0));
        bm.plot(Point::new(3, 3));
        assert_eq!(bm.count_foreground(), 1);
        assert!(bm.is_foreground(3, 3));
    }

    #[test]
    fn from_fn_and_zero_size() {
        let diag = Bitmap::from_fn(5, 5, |x, y| x == y);
        assert_eq!(diag.count_foreground(), 5);
        assert!(Bitmap::new(0, 7).is_degenerate());
        assert!(Bitmap::from_rows::<Vec<bool>>(&[]).is_degenerate());
    }
}
