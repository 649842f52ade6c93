use crate::types::Point;

/// Pixels already claimed by a line during one multi-line scan.
///
/// Dense mask over the grid, created per scan and dropped with it. Points
/// outside the grid are never visited.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    width: usize,
    height: usize,
    used: Vec<u8>,
    count: usize,
}

impl VisitedSet {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            used: vec![0u8; width * height],
            count: 0,
        }
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn contains(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.used[i] != 0)
    }

    /// Mark `p`; returns `true` if it was not visited before.
    pub fn insert(&mut self, p: Point) -> bool {
        match self.index(p) {
            Some(i) if self.used[i] == 0 => {
                self.used[i] = 1;
                self.count += 1;
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
