use super::tracer::{trace_line, trace_unvisited};
use super::visited::VisitedSet;
use crate::error::ScanError;
use crate::grid::BinaryGrid;
use crate::types::{Line, Point};
use log::{debug, warn};
use serde::Serialize;
use std::time::Instant;

/// Lines found by one multi-line scan.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineScanResult {
    pub lines: Vec<Line>,
    /// Foreground pixels claimed by the returned lines.
    pub claimed_px: usize,
    pub elapsed_ms: f64,
}

/// Multi-line raster scanner over one grid.
///
/// Owns the visited mask for a single scan; consume it with
/// [`LineScanner::extract`]. Independent scanners may share a grid.
pub struct LineScanner<'a, G: BinaryGrid + ?Sized> {
    grid: &'a G,
    width: usize,
    height: usize,
    visited: VisitedSet,
    lines: Vec<Line>,
}

impl<'a, G: BinaryGrid + ?Sized> LineScanner<'a, G> {
    pub fn new(grid: &'a G) -> Result<Self, ScanError> {
        let (width, height) = checked_dims(grid)?;
        Ok(Self {
            grid,
            width,
            height,
            visited: VisitedSet::new(width, height),
            lines: Vec::new(),
        })
    }

    pub fn extract(mut self) -> LineScanResult {
        let t0 = Instant::now();
        debug!("Finding lines in grid {} x {}", self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                self.process_seed(x, y);
            }
        }
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "Line scan: lines={} claimed_px={} elapsed_ms={:.3}",
            self.lines.len(),
            self.visited.len(),
            elapsed_ms
        );
        LineScanResult {
            lines: self.lines,
            claimed_px: self.visited.len(),
            elapsed_ms,
        }
    }

    fn process_seed(&mut self, x: usize, y: usize) {
        if !self.grid.is_foreground(x, y) {
            return;
        }
        let seed = Point::new(x as i32, y as i32);
        if !self.visited.insert(seed) {
            return;
        }
        let end = match trace_unvisited(seed, self.grid, &mut self.visited) {
            Some(trace) => trace.end,
            None => {
                debug!("No other point besides seed {seed}, keeping a one-pixel line");
                seed
            }
        };
        let line = Line::new(seed, end);
        debug!("{line} found");
        self.lines.push(line);
    }
}

/// First line in raster order, or `Ok(None)` when the grid has no foreground
/// pixel. The seed is the first foreground pixel; a seed without foreground
/// neighbors gives a one-pixel line.
pub fn find_line<G: BinaryGrid + ?Sized>(grid: &G) -> Result<Option<Line>, ScanError> {
    let (width, height) = checked_dims(grid)?;
    debug!("Finding line in grid {width} x {height}");

    let Some(seed) = first_foreground(grid, width, height) else {
        debug!("No line found");
        return Ok(None);
    };
    debug!("First point found at {seed}");

    let end = match trace_line(seed, grid, None) {
        Some(trace) => trace.end,
        None => {
            warn!("No end point found for the first point {seed}");
            seed
        }
    };
    let line = Line::new(seed, end);
    debug!("{line} found");
    Ok(Some(line))
}

/// Every line in the grid, in raster order of their seeds. Pixels claimed by
/// one line are never reused by a later one.
pub fn find_lines<G: BinaryGrid + ?Sized>(grid: &G) -> Result<Vec<Line>, ScanError> {
    Ok(LineScanner::new(grid)?.extract().lines)
}

/// Independent multi-line scans, one per grid, each with its own visited set.
#[cfg(feature = "parallel")]
pub fn find_lines_batch<G: BinaryGrid + Sync>(grids: &[G]) -> Vec<Result<Vec<Line>, ScanError>> {
    use rayon::prelude::*;

    grids.par_iter().map(|g| find_lines(g)).collect()
}

/// Independent multi-line scans, one per grid, each with its own visited set.
#[cfg(not(feature = "parallel"))]
pub fn find_lines_batch<G: BinaryGrid>(grids: &[G]) -> Vec<Result<Vec<Line>, ScanError>> {
    grids.iter().map(|g| find_lines(g)).collect()
}

fn checked_dims<G: BinaryGrid + ?Sized>(grid: &G) -> Result<(usize, usize), ScanError> {
    let (width, height) = (grid.width(), grid.height());
    if grid.is_degenerate() {
        warn!("Degenerate grid {width} x {height}");
        return Err(ScanError::DegenerateGrid { width, height });
    }
    Ok((width, height))
}

fn first_foreground<G: BinaryGrid + ?Sized>(grid: &G, width: usize, height: usize) -> Option<Point> {
    (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .find(|&(x, y)| grid.is_foreground(x, y))
        .map(|(x, y)| Point::new(x as i32, y as i32))
}
