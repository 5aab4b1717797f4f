use std::fmt;

use wayfarer_core::Point;

use crate::input::MoveFlags;

/// One of the eight single-tile steps. `Up` decreases `y`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

impl Direction {
    /// All directions, clockwise from `Up`.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
    ];

    /// The step leading from `from` to the adjacent `to`.
    ///
    /// Returns `None` when the two tiles are equal or not adjacent.
    pub fn between(from: Point, to: Point) -> Option<Direction> {
        let d = to - from;
        let dir = match (d.x, d.y) {
            (0, -1) => Direction::Up,
            (1, -1) => Direction::UpRight,
            (1, 0) => Direction::Right,
            (1, 1) => Direction::DownRight,
            (0, 1) => Direction::Down,
            (-1, 1) => Direction::DownLeft,
            (-1, 0) => Direction::Left,
            (-1, -1) => Direction::UpLeft,
            _ => return None,
        };
        Some(dir)
    }

    /// Unit offset of one step.
    pub fn delta(self) -> Point {
        match self {
            Direction::Up => Point::new(0, -1),
            Direction::UpRight => Point::new(1, -1),
            Direction::Right => Point::new(1, 0),
            Direction::DownRight => Point::new(1, 1),
            Direction::Down => Point::new(0, 1),
            Direction::DownLeft => Point::new(-1, 1),
            Direction::Left => Point::new(-1, 0),
            Direction::UpLeft => Point::new(-1, -1),
        }
    }

    /// Directional keys to hold for this step.
    pub fn flags(self) -> MoveFlags {
        match self {
            Direction::Up => MoveFlags::UP,
            Direction::UpRight => MoveFlags::UP | MoveFlags::RIGHT,
            Direction::Right => MoveFlags::RIGHT,
            Direction::DownRight => MoveFlags::DOWN | MoveFlags::RIGHT,
            Direction::Down => MoveFlags::DOWN,
            Direction::DownLeft => MoveFlags::DOWN | MoveFlags::LEFT,
            Direction::Left => MoveFlags::LEFT,
            Direction::UpLeft => MoveFlags::UP | MoveFlags::LEFT,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn between_inverts_delta() {
        let o = Point::new(5, 5);
        for dir in Direction::ALL {
            assert_eq!(Direction::between(o, o + dir.delta()), Some(dir));
        }
    }

    #[test]
    fn between_rejects_non_unit_steps() {
        let o = Point::new(5, 5);
        assert_eq!(Direction::between(o, o), None);
        assert_eq!(Direction::between(o, Point::new(7, 5)), None);
        assert_eq!(Direction::between(o, Point::new(6, 3)), None);
    }

    #[test]
    fn up_is_negative_y() {
        assert_eq!(
            Direction::between(Point::new(0, 1), Point::new(0, 0)),
            Some(Direction::Up)
        );
        assert_eq!(Direction::UpLeft.flags(), MoveFlags::UP | MoveFlags::LEFT);
    }
}
