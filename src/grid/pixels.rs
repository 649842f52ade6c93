//! Decoded RGB pixels viewed as a binary grid through a [`ForegroundRule`].
use super::BinaryGrid;
use crate::pixel::{ForegroundRule, Pixel};

#[derive(Clone, Debug)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
    rule: ForegroundRule,
}

impl PixelGrid {
    /// Wrap row-major pixels. `pixels.len()` must equal `width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<Pixel>, rule: ForegroundRule) -> Self {
        debug_assert_eq!(pixels.len(), width * height, "pixel buffer size mismatch");
        Self {
            width,
            height,
            pixels,
            rule,
        }
    }

    /// Build from nested rows of pixels, width taken from the first row.
    pub fn from_rows(rows: &[Vec<Pixel>], rule: ForegroundRule) -> Self {
        let width = rows.first().map_or(0, Vec::len);
        let height = rows.len();
        let pixels = rows.iter().flat_map(|r| r[..width].iter().copied()).collect();
        Self::new(width, height, pixels, rule)
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Pixel {
        self.pixels[y * self.width + x]
    }

    pub fn rule(&self) -> ForegroundRule {
        self.rule
    }

    /// Same pixels under a different classification rule.
    pub fn with_rule(mut self, rule: ForegroundRule) -> Self {
        self.rule = rule;
        self
    }
}

impl BinaryGrid for PixelGrid {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn is_foreground(&self, x: usize, y: usize) -> bool {
        self.rule.is_foreground(self.pixel(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_follows_rule() {
        let rows = vec![
            vec![Pixel::WHITE, Pixel::BLACK, Pixel::new(40, 40, 40)],
            vec![Pixel::new(255, 0, 0), Pixel::WHITE, Pixel::BLACK],
        ];
        let grid = PixelGrid::from_rows(&rows, ForegroundRule::ExactBlack);
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.pixel(0, 1), Pixel::new(255, 0, 0));
        assert_eq!(grid.count_foreground(), 2);

        let grid = grid.with_rule(ForegroundRule::LumaBelow(90));
        // pure red has luma 76
        assert_eq!(grid.count_foreground(), 4);
    }
}
