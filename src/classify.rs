use crate::direction::Direction;
use crate::types::Point;

/// Compass direction of the displacement from `from` to `to`.
///
/// The plane is split by the signs of `dx` and `dy` (image coordinates, `y`
/// grows downward). When exactly one delta is zero the result is a cardinal
/// direction, never a diagonal. Coincident points give `Direction::None`.
pub fn classify(from: Point, to: Point) -> Direction {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    match (dx.signum(), dy.signum()) {
        (0, 0) => Direction::None,
        (0, 1) => Direction::S,
        (0, _) => Direction::N,
        (-1, 0) => Direction::W,
        (-1, 1) => Direction::SW,
        (-1, _) => Direction::NW,
        (_, 0) => Direction::E,
        (_, 1) => Direction::SE,
        (_, _) => Direction::NE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coincident_points_have_no_direction() {
        let p = Point::new(10, 10);
        assert_eq!(classify(p, p), Direction::None);
        assert_eq!(classify(Point::new(-3, 7), Point::new(-3, 7)), Direction::None);
    }

    #[test]
    fn unit_offsets_classify_to_their_direction() {
        let c = Point::new(0, 0);
        for d in Direction::ALL {
            assert_eq!(classify(c, c.step(d)), d, "offset of {d:?}");
        }
    }

    #[test]
    fn axis_ties_resolve_to_cardinals() {
        let c = Point::new(5, 5);
        assert_eq!(classify(c, Point::new(5, 40)), Direction::S);
        assert_eq!(classify(c, Point::new(5, -40)), Direction::N);
        assert_eq!(classify(c, Point::new(-40, 5)), Direction::W);
        assert_eq!(classify(c, Point::new(40, 5)), Direction::E);
    }

    #[test]
    fn distinct_points_never_classify_to_none() {
        let c = Point::new(0, 0);
        for x in -4..=4 {
            for y in -4..=4 {
                let p = Point::new(x, y);
                if p != c {
                    assert_ne!(classify(c, p), Direction::None, "{p}");
                }
            }
        }
        assert_eq!(classify(c, Point::new(9, 2)), Direction::SE);
        assert_eq!(classify(c, Point::new(-9, -2)), Direction::NW);
        assert_eq!(classify(c, Point::new(3, -1)), Direction::NE);
    }
}
