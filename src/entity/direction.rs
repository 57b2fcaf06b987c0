use glam::{IVec2, Vec2};
use strum_macros::{AsRefStr, EnumIter};

use crate::error::EntityError;

/// The four cardinal directions, in tie-breaking order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The four cardinal directions in source order (up, down, left, right).
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn as_ivec2(self) -> IVec2 {
        self.into()
    }

    pub fn as_vec2(self) -> Vec2 {
        self.as_ivec2().as_vec2()
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Returns the direction as an index (0-3) into per-direction arrays.
    pub const fn as_usize(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => -IVec2::Y,
            Direction::Down => IVec2::Y,
            Direction::Left => -IVec2::X,
            Direction::Right => IVec2::X,
        }
    }
}

impl TryFrom<IVec2> for Direction {
    type Error = EntityError;

    /// Only the four cardinal unit vectors convert; diagonals and other magnitudes are rejected.
    fn try_from(value: IVec2) -> Result<Self, Self::Error> {
        match (value.x, value.y) {
            (0, -1) => Ok(Direction::Up),
            (0, 1) => Ok(Direction::Down),
            (-1, 0) => Ok(Direction::Left),
            (1, 0) => Ok(Direction::Right),
            _ => Err(EntityError::InvalidDirection(value)),
        }
    }
}

/// Converts an optional heading into the velocity vector it stands for.
pub fn velocity_vector(heading: Option<Direction>) -> IVec2 {
    heading.map_or(IVec2::ZERO, Direction::as_ivec2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_opposite() {
        for dir in Direction::DIRECTIONS {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.as_ivec2() + dir.opposite().as_ivec2(), IVec2::ZERO);
        }
    }

    #[test]
    fn test_direction_as_usize_matches_order() {
        for (i, dir) in Direction::DIRECTIONS.iter().enumerate() {
            assert_eq!(dir.as_usize(), i);
        }
    }

    #[test]
    fn test_velocity_vector() {
        assert_eq!(velocity_vector(None), IVec2::ZERO);
        assert_eq!(velocity_vector(Some(Direction::Left)), -IVec2::X);
    }

    #[test]
    fn test_direction_as_ref_str() {
        assert_eq!(Direction::Up.as_ref(), "up");
        assert_eq!(Direction::Right.as_ref(), "right");
    }
}
