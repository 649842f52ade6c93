use crate::types::Point;

/// Read-only rectangular grid of foreground/background pixels.
///
/// Rows are assumed to have equal length; implementations built from nested
/// rows report the first row's length as the width.
pub trait BinaryGrid {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Foreground test for an in-bounds pixel.
    fn is_foreground(&self, x: usize, y: usize) -> bool;

    /// Zero rows or zero columns.
    fn is_degenerate(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width() && (p.y as usize) < self.height()
    }

    /// Bounds-checked foreground test; out-of-grid points are background.
    #[inline]
    fn is_foreground_at(&self, p: Point) -> bool {
        self.contains(p) && self.is_foreground(p.x as usize, p.y as usize)
    }

    /// Number of foreground pixels.
    fn count_foreground(&self) -> usize {
        (0..self.height())
            .map(|y| (0..self.width()).filter(|&x| self.is_foreground(x, y)).count())
            .sum()
    }
}

impl<G: BinaryGrid + ?Sized> BinaryGrid for &G {
    #[inline]
    fn width(&self) -> usize {
        (**self).width()
    }
    #[inline]
    fn height(&self) -> usize {
        (**self).height()
    }
    #[inline]
    fn is_foreground(&self, x: usize, y: usize) -> bool {
        (**self).is_foreground(x, y)
    }
}

impl<T: AsRef<[bool]>> BinaryGrid for [T] {
    #[inline]
    fn width(&self) -> usize {
        self.first().map_or(0, |row| row.as_ref().len())
    }
    #[inline]
    fn height(&self) -> usize {
        self.len()
    }
    #[inline]
    fn is_foreground(&self, x: usize, y: usize) -> bool {
        self[y].as_ref()[x]
    }
}

impl<T: AsRef<[bool]>> BinaryGrid for Vec<T> {
    #[inline]
    fn width(&self) -> usize {
        self.as_slice().width()
    }
    #[inline]
    fn height(&self) -> usize {
        self.len()
    }
    #[inline]
    fn is_foreground(&self, x: usize, y: usize) -> bool {
        self.as_slice().is_foreground(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_rows_report_first_row_width() {
        let rows = vec![vec![false, true, false], vec![false, false, false]];
        assert_eq!(rows.width(), 3);
        assert_eq!(rows.height(), 2);
        assert!(rows.is_foreground(1, 0));
        assert!(!rows.is_degenerate());
        assert_eq!(rows.count_foreground(), 1);
    }

    #[test]
    fn empty_shapes_are_degenerate() {
        let no_rows: Vec<Vec<bool>> = Vec::new();
        assert!(no_rows.is_degenerate());
        let empty_row: Vec<Vec<bool>> = vec![Vec::new()];
        assert!(empty_row.is_degenerate());
        assert_eq!(empty_row.height(), 1);
        assert_eq!(empty_row.width(), 0);
    }

    #[test]
    fn out_of_bounds_points_are_background() {
        let rows = [[true, true], [true, true]];
        assert!(rows.is_foreground_at(Point::new(1, 1)));
        assert!(!rows.is_foreground_at(Point::new(-1, 0)));
        assert!(!rows.is_foreground_at(Point::new(0, 2)));
        assert!(!rows.is_foreground_at(Point::new(2, 0)));
    }
}
