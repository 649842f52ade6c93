//! Straight-line extraction from a binary grid.
//!
//! The extractor is a greedy, direction-locked walk over 8-connected pixels:
//!
//! - Seeding: the grid is raster-scanned (rows top to bottom, columns left to
//!   right); a foreground pixel not yet claimed by a line becomes a seed.
//! - First step: the seed's ring of neighbors is probed clockwise from east;
//!   the first foreground hit is the second point and the compass direction
//!   from seed to second point is locked.
//! - Walk: from the current point only the three cells `d`, `d.previous()`,
//!   `d.next()` are probed, in that order. A one-pixel lateral wobble is
//!   followed; corners and right-angle turns fall outside the window and end
//!   the line.
//! - Claiming: in a multi-line scan every pixel a line passes through is added
//!   to a per-scan visited mask, so later seeds and walks never reuse it.
//!
//! Output lines are `(start, end)` pairs. A seed without foreground neighbors
//! still yields a one-pixel line, and a second point whose locked walk cannot
//! advance yields a two-pixel line: no minimum length or colinearity test is
//! applied.
//!
//! Degenerate grids (no rows or no columns) are rejected with
//! [`ScanError::DegenerateGrid`](crate::error::ScanError), which is distinct
//! from finding no line.
//!
//! Complexity
//! - Each pixel is probed a constant number of times, once by the raster scan
//!   and at most once per neighboring walk step, giving O(W*H) per scan.
mod scanner;
mod tracer;
mod visited;

pub use scanner::{find_line, find_lines, find_lines_batch, LineScanResult, LineScanner};
pub use tracer::{find_next_point, trace_from, trace_unvisited, Trace};
pub use visited::VisitedSet;
