use glam::{IVec2, Vec2};
use maze_chase::entity::collision::Rect;
use maze_chase::entity::direction::Direction;
use maze_chase::entity::moving::MovingEntity;
use maze_chase::systems::movement::resolve_heading;
use speculoos::prelude::*;

mod common;

use common::tile;

fn walls(cells: &[(i32, i32)]) -> Vec<Rect> {
    cells.iter().map(|&(x, y)| Rect::tile(IVec2::new(x, y))).collect()
}

fn entity_at(x: i32, y: i32, heading: Option<Direction>) -> MovingEntity {
    let mut entity = MovingEntity::new(tile(x, y), 3.0);
    entity.heading = heading;
    entity
}

#[test]
fn test_moving_into_wall_stops() {
    let obstacles = walls(&[(1, 0)]);
    let agent = entity_at(0, 0, Some(Direction::Right));

    let heading = resolve_heading(&agent, Some(Direction::Right), &obstacles);
    assert_that(&heading).is_none();
}

#[test]
fn test_clear_signal_is_taken() {
    let obstacles = walls(&[(1, 0)]);
    let agent = entity_at(0, 1, None);

    assert_eq!(resolve_heading(&agent, Some(Direction::Right), &obstacles), Some(Direction::Right));
    assert_eq!(resolve_heading(&agent, Some(Direction::Down), &obstacles), Some(Direction::Down));
}

#[test]
fn test_no_signal_stops() {
    let agent = entity_at(1, 1, Some(Direction::Left));
    assert_that(&resolve_heading(&agent, None, &Vec::new())).is_none();
}

#[test]
fn test_blocked_turn_keeps_current_heading() {
    // Corridor along row 1 with a wall directly above.
    let obstacles = walls(&[(1, 0)]);
    let agent = entity_at(1, 1, Some(Direction::Right));

    assert_eq!(resolve_heading(&agent, Some(Direction::Up), &obstacles), Some(Direction::Right));
}

#[test]
fn test_blocked_turn_with_blocked_heading_stops() {
    let obstacles = walls(&[(1, 0), (2, 1)]);
    let agent = entity_at(1, 1, Some(Direction::Right));

    assert_that(&resolve_heading(&agent, Some(Direction::Up), &obstacles)).is_none();
}

#[test]
fn test_blocked_reversal_stops() {
    let obstacles = walls(&[(0, 1)]);
    let agent = entity_at(1, 1, Some(Direction::Right));

    assert_that(&resolve_heading(&agent, Some(Direction::Left), &obstacles)).is_none();
}

#[test]
fn test_blocked_start_from_rest_stops() {
    let obstacles = walls(&[(1, 0)]);
    let agent = entity_at(1, 1, None);

    assert_that(&resolve_heading(&agent, Some(Direction::Up), &obstacles)).is_none();
}

#[test]
fn test_integrate_applies_speed() {
    let mut entity = MovingEntity::new(Vec2::new(30.0, 30.0), 2.5);
    entity.integrate();
    assert_eq!(entity.position(), Vec2::new(30.0, 30.0));

    entity.heading = Some(Direction::Up);
    entity.integrate();
    entity.integrate();
    assert_eq!(entity.position(), Vec2::new(30.0, 25.0));
}

#[test]
fn test_frame_changes_every_five_ticks() {
    let mut entity = MovingEntity::new(Vec2::ZERO, 1.0);
    let mut frames = Vec::new();
    for _ in 0..25 {
        frames.push(entity.frame(4));
        entity.advance_frame();
    }

    let expected: Vec<usize> = (0..25).map(|tick| (tick / 5) % 4).collect();
    assert_eq!(frames, expected);
    assert_eq!(entity.frame(0), 0);
}

#[test]
fn test_reverse_and_snap() {
    let mut entity = MovingEntity::new(Vec2::new(47.5, 61.0), 1.0);
    entity.heading = Some(Direction::Left);
    entity.reverse();
    entity.snap_to_grid();

    assert_eq!(entity.heading, Some(Direction::Right));
    assert_eq!(entity.position(), Vec2::new(30.0, 60.0));
}
