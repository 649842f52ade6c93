use super::visited::VisitedSet;
use crate::classify::classify;
use crate::direction::Direction;
use crate::grid::BinaryGrid;
use crate::neighborhood::neighbors;
use crate::types::Point;
use log::trace;

/// Outcome of a successful walk from a seed pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trace {
    /// First foreground neighbor of the seed; fixes the direction.
    pub second: Point,
    /// Direction from the seed to `second`, kept for the whole walk.
    pub direction: Direction,
    /// Last pixel reached.
    pub end: Point,
    /// Directed steps taken after `second`.
    pub steps: usize,
}

/// One search step: the first in-bounds foreground neighbor of `current`,
/// probing the full ring when `direction` is `None` and the three-cell window
/// around `direction` otherwise.
pub fn find_next_point<G: BinaryGrid + ?Sized>(
    current: Point,
    grid: &G,
    direction: Direction,
) -> Option<Point> {
    next_point(current, grid, direction, None)
}

/// Walk from `seed` and return the last pixel reached, or `None` when the
/// seed has no foreground neighbor at all.
pub fn trace_from<G: BinaryGrid + ?Sized>(seed: Point, grid: &G) -> Option<Point> {
    trace_line(seed, grid, None).map(|t| t.end)
}

/// Walk from `seed` during a multi-line scan.
///
/// Pixels in `visited` are unavailable, and every pixel the walk passes
/// through after the seed is added to it.
pub fn trace_unvisited<G: BinaryGrid + ?Sized>(
    seed: Point,
    grid: &G,
    visited: &mut VisitedSet,
) -> Option<Trace> {
    trace_line(seed, grid, Some(visited))
}

pub(crate) fn trace_line<G: BinaryGrid + ?Sized>(
    seed: Point,
    grid: &G,
    mut visited: Option<&mut VisitedSet>,
) -> Option<Trace> {
    trace!("Finding the end point from seed {seed}");

    let Some(second) = next_point(seed, grid, Direction::None, visited.as_deref()) else {
        trace!("No foreground neighbor around seed {seed}");
        return None;
    };
    let direction = classify(seed, second);
    if let Some(v) = visited.as_deref_mut() {
        v.insert(second);
    }
    trace!("Second point {second}, locked direction {direction:?}");

    let mut end = second;
    let mut steps = 0usize;
    while let Some(next) = next_point(end, grid, direction, visited.as_deref()) {
        if let Some(v) = visited.as_deref_mut() {
            v.insert(next);
        }
        end = next;
        steps += 1;
    }

    Some(Trace {
        second,
        direction,
        end,
        steps,
    })
}

fn next_point<G: BinaryGrid + ?Sized>(
    current: Point,
    grid: &G,
    direction: Direction,
    visited: Option<&VisitedSet>,
) -> Option<Point> {
    neighbors(current, direction).find(|&p| {
        grid.is_foreground_at(p) && !visited.is_some_and(|v| v.contains(p))
    })
}
