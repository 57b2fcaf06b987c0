use glam::{IVec2, Vec2};

use crate::constants::{FRAME_HOLD_TICKS, TILE_SIZE};
use crate::entity::collision::Rect;
use crate::entity::direction::{velocity_vector, Direction};

/// A one-tile rectangle that travels along a cardinal heading.
///
/// The heading is the unit velocity; `speed` scales it when the entity is integrated.
/// A `None` heading is the zero velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct MovingEntity {
    pub rect: Rect,
    pub heading: Option<Direction>,
    pub speed: f32,
    frame_counter: u32,
}

impl MovingEntity {
    pub fn new(position: Vec2, speed: f32) -> Self {
        Self {
            rect: Rect::new(position, Vec2::splat(TILE_SIZE)),
            heading: None,
            speed,
            frame_counter: 0,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.rect.position
    }

    /// The unit velocity vector of the current heading.
    pub fn velocity(&self) -> IVec2 {
        velocity_vector(self.heading)
    }

    /// Advances the position by one tick of travel. Bounds are not checked here.
    pub fn integrate(&mut self) {
        if let Some(heading) = self.heading {
            self.rect.position += heading.as_vec2() * self.speed;
        }
    }

    pub fn advance_frame(&mut self) {
        self.frame_counter = self.frame_counter.wrapping_add(1);
    }

    /// The frame to display out of an animation set of `len` frames.
    pub fn frame(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.frame_counter / FRAME_HOLD_TICKS) as usize % len
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.rect.overlaps(other)
    }

    pub fn would_collide<'a>(&self, obstacles: impl IntoIterator<Item = &'a Rect>, direction: Direction) -> bool {
        self.rect.would_collide_any(obstacles, direction)
    }

    pub fn reverse(&mut self) {
        self.heading = self.heading.map(Direction::opposite);
    }

    pub fn stop(&mut self) {
        self.heading = None;
    }

    pub fn snap_to_grid(&mut self) {
        self.rect.snap_to_grid();
    }

    /// Places the entity at `position` with no velocity.
    pub fn teleport(&mut self, position: Vec2) {
        self.rect.position = position;
        self.heading = None;
    }
}
