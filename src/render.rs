//! The rendering sink.
//!
//! The simulation never touches pixels. Each rendering tick it describes every live
//! entity as a [`Sprite`] and hands it to a [`Surface`] owned by the host.

use glam::Vec2;

use crate::entity::chase::Strategy;
use crate::entity::pursuer::PursuerLook;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpriteKind {
    Wall,
    Enclosure,
    Pickup { major: bool },
    Agent,
    Pursuer { strategy: Strategy, look: PursuerLook },
}

/// One entity to draw: where, how big, which animation frame, and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub position: Vec2,
    pub size: Vec2,
    pub frame: usize,
    /// Rotation in radians; only the agent turns.
    pub angle: f32,
}

pub trait Surface {
    fn draw(&mut self, sprite: &Sprite);
}

/// A surface that keeps every sprite it is given.
impl Surface for Vec<Sprite> {
    fn draw(&mut self, sprite: &Sprite) {
        self.push(*sprite);
    }
}
