use glam::Vec2;
use tracing::trace;

use crate::constants::{animation::AGENT_FRAMES, speed};
use crate::entity::moving::MovingEntity;

/// The single player-controlled entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub body: MovingEntity,
    start: Vec2,
    angle: f32,
}

impl Agent {
    pub fn new(start: Vec2) -> Self {
        Self {
            body: MovingEntity::new(start, speed::AGENT),
            start,
            angle: 0.0,
        }
    }

    /// Facing angle in radians, measured from +X towards +Y (screen down).
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// Re-derives the facing angle. A stopped agent keeps its previous angle.
    pub fn update_angle(&mut self) {
        if self.body.heading.is_some() {
            let v = self.body.velocity().as_vec2();
            self.angle = v.y.atan2(v.x);
        }
    }

    pub fn frame(&self) -> usize {
        self.body.frame(AGENT_FRAMES)
    }

    /// Returns the agent to its start tile with no velocity.
    pub fn reset(&mut self) {
        trace!(start = ?self.start, "Agent reset to start");
        self.body.teleport(self.start);
        self.body.snap_to_grid();
    }
}
