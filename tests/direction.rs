use glam::IVec2;
use maze_chase::entity::direction::*;
use maze_chase::error::EntityError;
use speculoos::prelude::*;

#[test]
fn test_direction_opposite() {
    let test_cases = [
        (Direction::Up, Direction::Down),
        (Direction::Down, Direction::Up),
        (Direction::Left, Direction::Right),
        (Direction::Right, Direction::Left),
    ];

    for (dir, expected) in test_cases {
        assert_eq!(dir.opposite(), expected);
    }
}

#[test]
fn test_direction_as_ivec2() {
    let test_cases = [
        (Direction::Up, -IVec2::Y),
        (Direction::Down, IVec2::Y),
        (Direction::Left, -IVec2::X),
        (Direction::Right, IVec2::X),
    ];

    for (dir, expected) in test_cases {
        assert_eq!(dir.as_ivec2(), expected);
        assert_eq!(IVec2::from(dir), expected);
        assert_eq!(Direction::try_from(expected), Ok(dir));
    }
}

#[test]
fn test_try_from_rejects_non_cardinal_vectors() {
    for vector in [IVec2::new(1, 1), IVec2::new(-1, 1), IVec2::new(2, 0), IVec2::new(0, -3)] {
        assert_eq!(Direction::try_from(vector), Err(EntityError::InvalidDirection(vector)));
    }
    assert_that(&Direction::try_from(IVec2::ZERO)).is_err();
}

#[test]
fn test_is_horizontal() {
    assert_that(&Direction::Left.is_horizontal()).is_true();
    assert_that(&Direction::Right.is_horizontal()).is_true();
    assert_that(&Direction::Up.is_horizontal()).is_false();
    assert_that(&Direction::Down.is_horizontal()).is_false();
}
