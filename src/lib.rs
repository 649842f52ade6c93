#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod direction;
pub mod error;
pub mod grid;
pub mod lines;
pub mod pixel;
pub mod types;

// Building blocks of the line walk and tool plumbing.
pub mod classify;
pub mod config;
pub mod diagnostics;
pub mod neighborhood;

// --- High-level re-exports -------------------------------------------------

// Main entry points: scanners + results.
pub use crate::lines::{find_line, find_lines, find_lines_batch, LineScanResult, LineScanner};
pub use crate::types::{Line, Point};

// Grid inputs and the error they can raise.
pub use crate::direction::Direction;
pub use crate::error::ScanError;
pub use crate::grid::{BinaryGrid, Bitmap, PixelGrid};
pub use crate::pixel::{ForegroundRule, Pixel, PixelClass};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use raster_lines::prelude::*;
///
/// let grid = Bitmap::from_fn(8, 8, |x, y| x == y);
/// let line = find_line(&grid).unwrap().unwrap();
/// assert_eq!(line, Line::new(Point::new(0, 0), Point::new(7, 7)));
/// ```
pub mod prelude {
    pub use crate::grid::{BinaryGrid, Bitmap};
    pub use crate::{find_line, find_lines, Line, Point, ScanError};
}
