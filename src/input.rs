//! Direction sources for the host loop.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use tracing::trace;

use crate::entity::direction::Direction;

/// Produces direction presses. Polled once per motion tick.
pub trait InputSource {
    /// A newly pressed direction, or `None` if nothing was pressed since the last poll.
    fn poll(&mut self) -> Option<Direction>;
}

/// Presses a random direction every `interval` polls. Drives the headless binary.
#[derive(Debug)]
pub struct Autopilot {
    rng: SmallRng,
    interval: u32,
    polls: u32,
}

impl Autopilot {
    pub fn new(rng: SmallRng, interval: u32) -> Self {
        Self {
            rng,
            interval: interval.max(1),
            polls: 0,
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self) -> Option<Direction> {
        let due = self.polls % self.interval == 0;
        self.polls = self.polls.wrapping_add(1);
        if !due {
            return None;
        }
        let direction = Direction::DIRECTIONS.choose(&mut self.rng).copied();
        trace!(direction = ?direction, "Autopilot pressed");
        direction
    }
}

/// Replays a fixed sequence of polls, then reports nothing.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    presses: VecDeque<Option<Direction>>,
}

impl ScriptedInput {
    pub fn new(presses: impl IntoIterator<Item = Option<Direction>>) -> Self {
        Self {
            presses: presses.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Option<Direction> {
        self.presses.pop_front().flatten()
    }
}
