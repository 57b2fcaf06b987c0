//! Direction-selection heuristics shared by every pursuer.
//!
//! Each heuristic scores the four cardinal directions by the straight-line distance
//! that would remain to a target after one tile-sized step, then picks the extreme.

use glam::Vec2;
use rand::seq::IndexedRandom;
use rand::Rng;
use smallvec::SmallVec;
use strum_macros::{AsRefStr, EnumIter};
use tracing::trace;

use crate::constants::{chase, speed};
use crate::entity::agent::Agent;
use crate::entity::collision::Rect;
use crate::entity::direction::Direction;
use crate::entity::moving::MovingEntity;

/// Per-direction scores, indexed by [`Direction::as_usize`].
pub type Scores = [f32; 4];

/// Whether a heuristic approaches or flees its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Minimize the remaining distance (pursuit, retreat, returning home).
    Nearest,
    /// Maximize the remaining distance (frightened).
    Farthest,
}

impl Policy {
    /// The score given to directions that must never win.
    pub const fn excluded(self) -> f32 {
        match self {
            Policy::Nearest => f32::INFINITY,
            Policy::Farthest => f32::NEG_INFINITY,
        }
    }

    fn extreme(self, scores: &Scores) -> f32 {
        match self {
            Policy::Nearest => scores.iter().copied().fold(f32::INFINITY, f32::min),
            Policy::Farthest => scores.iter().copied().fold(f32::NEG_INFINITY, f32::max),
        }
    }
}

/// The four pursuer variants. They share one state machine and differ only in the
/// point they steer towards while pursuing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Strategy {
    /// Steers straight at the agent.
    Direct,
    /// Steers at the agent, but picks erratically once close.
    Ambush,
    /// Steers at the midpoint between itself and the agent.
    Flank,
    /// Steers at where the agent will be if it keeps its heading.
    Predictive,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [Strategy::Direct, Strategy::Ambush, Strategy::Flank, Strategy::Predictive];

    pub const fn base_speed(self) -> f32 {
        match self {
            Strategy::Direct => speed::DIRECT,
            Strategy::Ambush => speed::AMBUSH,
            Strategy::Flank => speed::FLANK,
            Strategy::Predictive => speed::PREDICTIVE,
        }
    }

    /// The board character marking this variant's spawn tile.
    pub const fn marker(self) -> char {
        match self {
            Strategy::Direct => '1',
            Strategy::Ambush => '2',
            Strategy::Flank => '3',
            Strategy::Predictive => '4',
        }
    }

    pub const fn as_usize(self) -> usize {
        match self {
            Strategy::Direct => 0,
            Strategy::Ambush => 1,
            Strategy::Flank => 2,
            Strategy::Predictive => 3,
        }
    }

    /// The board corner this variant retreats to, given the board's size in world units.
    pub fn retreat_corner(self, board: Vec2) -> Rect {
        let corner = match self {
            Strategy::Ambush => Vec2::ZERO,
            Strategy::Direct => board,
            Strategy::Flank => Vec2::new(board.x, 0.0),
            Strategy::Predictive => Vec2::new(0.0, board.y),
        };
        Rect::point(corner)
    }

    /// The point this variant steers towards while pursuing `agent`.
    pub fn pursuit_target(self, position: Vec2, agent: &Agent) -> Vec2 {
        let agent_position = agent.body.position();
        match self {
            Strategy::Direct | Strategy::Ambush => agent_position,
            Strategy::Flank => (position + agent_position) / 2.0,
            Strategy::Predictive => {
                agent_position + agent.body.velocity().as_vec2() * chase::PREDICTIVE_LOOKAHEAD_TICKS
            }
        }
    }
}

/// Scores every direction for `body` heading towards (or away from) `target`.
///
/// Directions blocked by any of `obstacles`, and the reverse of the current heading,
/// receive the policy's exclusion sentinel.
pub fn score_directions<'a, I>(body: &MovingEntity, target: Vec2, obstacles: I, policy: Policy) -> Scores
where
    I: IntoIterator<Item = &'a Rect> + Clone,
{
    let size = body.rect.size;
    let offset = target - body.position() - body.velocity().as_vec2();

    let mut scores: Scores = [0.0; 4];
    for direction in Direction::DIRECTIONS {
        let step = match direction {
            Direction::Up => Vec2::new(0.0, size.y),
            Direction::Down => Vec2::new(0.0, -size.y),
            Direction::Left => Vec2::new(size.x, 0.0),
            Direction::Right => Vec2::new(-size.x, 0.0),
        };
        scores[direction.as_usize()] = if body.would_collide(obstacles.clone(), direction) {
            policy.excluded()
        } else {
            (offset + step).length()
        };
    }

    if let Some(heading) = body.heading {
        scores[heading.opposite().as_usize()] = policy.excluded();
    }

    scores
}

/// The first direction, in source order, whose score equals `value` and which does not
/// reverse `heading`.
pub fn first_matching(scores: &Scores, value: f32, heading: Option<Direction>) -> Option<Direction> {
    Direction::DIRECTIONS
        .into_iter()
        .filter(|direction| heading != Some(direction.opposite()))
        .find(|direction| scores[direction.as_usize()] == value)
}

/// Picks the direction with the extreme score for `policy`.
///
/// When every direction is excluded they all tie at the sentinel, so the first
/// non-reversing direction wins.
pub fn pick(scores: &Scores, policy: Policy, heading: Option<Direction>) -> Direction {
    let extreme = policy.extreme(scores);
    first_matching(scores, extreme, heading).unwrap_or(Direction::Up)
}

/// The erratic close-range pick: once the best score drops under the proximity
/// threshold, any direction with a finite score may be chosen, uniformly.
pub fn pick_erratic<R: Rng + ?Sized>(scores: &Scores, heading: Option<Direction>, rng: &mut R) -> Direction {
    let best = Policy::Nearest.extreme(scores);
    if best < chase::AMBUSH_PROXIMITY {
        let finite: SmallVec<[f32; 4]> = scores.iter().copied().filter(|score| score.is_finite()).collect();
        if let Some(&rolled) = finite.choose(rng) {
            if let Some(direction) = first_matching(scores, rolled, heading) {
                trace!(best, rolled, direction = direction.as_ref(), "Erratic re-roll");
                return direction;
            }
        }
    }
    pick(scores, Policy::Nearest, heading)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_prefers_source_order_on_ties() {
        let scores = [5.0, 5.0, 5.0, 5.0];
        assert_eq!(pick(&scores, Policy::Nearest, None), Direction::Up);
        assert_eq!(pick(&scores, Policy::Farthest, None), Direction::Up);
    }

    #[test]
    fn test_pick_all_excluded_never_reverses() {
        let scores = [f32::INFINITY; 4];
        assert_eq!(pick(&scores, Policy::Nearest, Some(Direction::Down)), Direction::Down);
        assert_eq!(pick(&scores, Policy::Nearest, Some(Direction::Up)), Direction::Up);
    }

    #[test]
    fn test_retreat_corners() {
        let board = Vec2::new(840.0, 930.0);
        assert_eq!(Strategy::Ambush.retreat_corner(board).position, Vec2::ZERO);
        assert_eq!(Strategy::Direct.retreat_corner(board).position, board);
        assert_eq!(Strategy::Flank.retreat_corner(board).position, Vec2::new(840.0, 0.0));
        assert_eq!(Strategy::Predictive.retreat_corner(board).position, Vec2::new(0.0, 930.0));
    }
}
