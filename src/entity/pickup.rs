use glam::Vec2;

use crate::constants::{score, TILE_SIZE};
use crate::entity::collision::Rect;

/// A collectible resting on a tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pickup {
    pub rect: Rect,
    pub is_major: bool,
}

impl Pickup {
    pub fn minor(position: Vec2) -> Self {
        Self::new(position, false)
    }

    pub fn major(position: Vec2) -> Self {
        Self::new(position, true)
    }

    fn new(position: Vec2, is_major: bool) -> Self {
        Self {
            rect: Rect::new(position, Vec2::splat(TILE_SIZE)),
            is_major,
        }
    }

    /// Points awarded for consuming this pickup.
    pub fn score_value(&self) -> u32 {
        if self.is_major {
            score::MAJOR_PICKUP
        } else {
            score::MINOR_PICKUP
        }
    }
}
