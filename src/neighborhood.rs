//! Candidate neighbors around a center pixel.
//!
//! Two search shapes are produced:
//!
//! - the undirected ring, all eight neighbors visited clockwise from east
//!   through north-west, with north-east and then north last;
//! - the directed window for a locked direction `d`: `d`, `d.previous()`,
//!   `d.next()`, so going straight wins over drifting and a counter-clockwise
//!   drift is tried before a clockwise one.
//!
//! The order only decides which foreground candidate is found first. Points are
//! not bounds-checked here.
use crate::direction::Direction;
use crate::types::Point;

/// Visiting order of the undirected search.
pub const RING_ORDER: [Direction; 8] = [
    Direction::E,
    Direction::SE,
    Direction::S,
    Direction::SW,
    Direction::W,
    Direction::NW,
    Direction::NE,
    Direction::N,
];

/// Directions examined around a center: the full ring when `locked` is
/// `Direction::None`, otherwise the three-cell window around `locked`.
pub fn search_order(locked: Direction) -> &'static [Direction] {
    match locked {
        Direction::None => &RING,
        d => &WINDOWS[d.ordinal() as usize - 1],
    }
}

const fn window(d: Direction) -> [Direction; 3] {
    [d, d.previous(), d.next()]
}

static RING: [Direction; 8] = RING_ORDER;

/// Directed windows indexed by `ordinal - 1`.
static WINDOWS: [[Direction; 3]; 8] = [
    window(Direction::N),
    window(Direction::NE),
    window(Direction::E),
    window(Direction::SE),
    window(Direction::S),
    window(Direction::SW),
    window(Direction::W),
    window(Direction::NW),
];

/// Neighbor points of `center` in search order (see [`search_order`]).
pub fn neighbors(center: Point, locked: Direction) -> impl Iterator<Item = Point> {
    search_order(locked).iter().map(move |&d| center.step(d))
}

/// All eight ring neighbors of `center`.
pub fn ring(center: Point) -> impl Iterator<Item = Point> {
    neighbors(center, Direction::None)
}

/// The three-cell directed window of `center` for `locked`.
pub fn directed(center: Point, locked: Direction) -> impl Iterator<Item = Point> {
    debug_assert!(!locked.is_none(), "directed search needs a locked direction");
    neighbors(center, locked)
}
