//! Axis-aligned rectangles: the spatial basis of every entity.

use glam::{IVec2, Vec2};

use crate::constants::TILE_SIZE;
use crate::entity::direction::Direction;

/// An axis-aligned rectangle in world units, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub position: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        debug_assert!(size.x >= 0.0 && size.y >= 0.0, "negative rectangle size {size}");
        Self { position, size }
    }

    /// A zero-sized rectangle, used as a pure steering target.
    pub fn point(position: Vec2) -> Self {
        Self::new(position, Vec2::ZERO)
    }

    /// The rectangle covering a single grid tile.
    pub fn tile(cell: IVec2) -> Self {
        Self::new(cell.as_vec2() * TILE_SIZE, Vec2::splat(TILE_SIZE))
    }

    pub fn left(&self) -> f32 {
        self.position.x
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.position.y
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }

    fn overlaps_vertically(&self, other: &Rect) -> bool {
        self.top() < other.bottom() && self.bottom() > other.top()
    }

    /// Strict AABB intersection: rectangles that merely touch do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.overlaps_horizontally(other) && self.overlaps_vertically(other)
    }

    /// Predicts whether stepping one unit in `direction` would overlap `other`.
    ///
    /// Only the leading edge is advanced; the cross axis must already overlap.
    pub fn would_collide(&self, other: &Rect, direction: Direction) -> bool {
        match direction {
            Direction::Right => {
                self.right() + 1.0 > other.left() && self.left() < other.right() && self.overlaps_vertically(other)
            }
            Direction::Left => {
                self.left() - 1.0 < other.right() && self.right() > other.left() && self.overlaps_vertically(other)
            }
            Direction::Down => {
                self.bottom() + 1.0 > other.top() && self.top() < other.bottom() && self.overlaps_horizontally(other)
            }
            Direction::Up => {
                self.top() - 1.0 < other.bottom() && self.bottom() > other.top() && self.overlaps_horizontally(other)
            }
        }
    }

    /// Returns true if stepping in `direction` would hit any of `obstacles`.
    pub fn would_collide_any<'a>(&self, obstacles: impl IntoIterator<Item = &'a Rect>, direction: Direction) -> bool {
        obstacles.into_iter().any(|obstacle| self.would_collide(obstacle, direction))
    }

    /// Floors the position onto the tile grid.
    pub fn snap_to_grid(&mut self) {
        self.position = snap_to_tile(self.position);
    }
}

/// Floors a world position onto the tile grid.
pub fn snap_to_tile(position: Vec2) -> Vec2 {
    (position / TILE_SIZE).floor() * TILE_SIZE
}
