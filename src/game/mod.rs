//! This module contains the owned session state and its public tick interface.

use rand::rngs::SmallRng;
use strum_macros::AsRefStr;
use tracing::info;

use crate::clock::Clock;
use crate::constants::STARTING_LIVES;
use crate::entity::agent::Agent;
use crate::entity::chase::Strategy;
use crate::entity::direction::Direction;
use crate::entity::pickup::Pickup;
use crate::entity::pursuer::Pursuer;
use crate::error::GameResult;
use crate::events::GameEvent;
use crate::map::Layout;
use crate::record::ScoreRecord;
use crate::render::{Sprite, SpriteKind, Surface};
use crate::systems;

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Outcome {
    /// Every pickup was consumed.
    Won,
    /// The agent ran out of lives with pickups remaining.
    Lost,
}

/// One play session: the board, every entity, and the score.
///
/// Two independent ticks drive it: [`Session::step_motion_and_ai`] at the rendering rate
/// and [`Session::step_collisions_and_score`] at a fixed high rate. Both borrow the
/// session mutably, so they can never overlap.
pub struct Session<C: Clock> {
    pub(crate) layout: Layout,
    pub(crate) agent: Agent,
    /// Indexed by [`Strategy::as_usize`].
    pub(crate) pursuers: [Pursuer; 4],
    pub(crate) pickups: Vec<Pickup>,
    pub(crate) score: u32,
    pub(crate) lives: u32,
    pub(crate) direction: Option<Direction>,
    pub(crate) events: Vec<GameEvent>,
    pub(crate) clock: C,
    pub(crate) rng: SmallRng,
    finished: bool,
}

impl<C: Clock> Session<C> {
    /// Parses `raw_board` and starts a session on it.
    ///
    /// # Errors
    ///
    /// Fails if the board is malformed; no session is created in that case.
    pub fn new<S: AsRef<str>>(raw_board: &[S], clock: C, rng: SmallRng) -> GameResult<Self> {
        let layout = Layout::parse(raw_board)?;
        Ok(Self::from_layout(layout, clock, rng))
    }

    pub fn from_layout(layout: Layout, clock: C, rng: SmallRng) -> Self {
        let agent = Agent::new(layout.agent_start());
        let pursuers = Strategy::ALL.map(|strategy| Pursuer::new(strategy, layout.spawn(strategy)));
        let pickups = layout.pickups().to_vec();

        info!(pickups = pickups.len(), lives = STARTING_LIVES, "Session started");
        Self {
            layout,
            agent,
            pursuers,
            pickups,
            score: 0,
            lives: STARTING_LIVES,
            direction: None,
            events: Vec::new(),
            clock,
            rng,
            finished: false,
        }
    }

    /// Stores the latest direction signal. `None` means no direction is held.
    pub fn set_direction(&mut self, direction: Option<Direction>) {
        self.direction = direction;
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Advances every entity by one rendering tick and runs pursuer AI.
    pub fn step_motion_and_ai(&mut self) {
        systems::motion::step_motion_and_ai(self);
    }

    /// Resolves pickups and agent/pursuer contacts, updating score and lives.
    pub fn step_collisions_and_score(&mut self) {
        systems::collision::step_collisions_and_score(self);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn is_over(&self) -> bool {
        self.lives == 0
    }

    /// The result of the session, once it is over.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_over() {
            return None;
        }
        Some(if self.pickups.is_empty() {
            Outcome::Won
        } else {
            Outcome::Lost
        })
    }

    /// The record to hand to the leaderboard, once the session is over.
    pub fn record(&self) -> Option<ScoreRecord> {
        self.outcome().map(|outcome| ScoreRecord {
            score: self.score,
            outcome,
        })
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn agent_mut(&mut self) -> &mut Agent {
        &mut self.agent
    }

    pub fn pursuers(&self) -> &[Pursuer; 4] {
        &self.pursuers
    }

    pub fn pursuer(&self, strategy: Strategy) -> &Pursuer {
        &self.pursuers[strategy.as_usize()]
    }

    pub fn pursuer_mut(&mut self, strategy: Strategy) -> &mut Pursuer {
        &mut self.pursuers[strategy.as_usize()]
    }

    /// Pickups not yet consumed.
    pub fn pickups(&self) -> &[Pickup] {
        &self.pickups
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Takes every event recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Emits one sprite per live entity, back to front.
    pub fn draw(&self, surface: &mut impl Surface) {
        let now = self.clock.now();

        let statics = self
            .layout
            .walls()
            .iter()
            .map(|rect| (SpriteKind::Wall, rect))
            .chain(self.layout.enclosure().iter().map(|rect| (SpriteKind::Enclosure, rect)))
            .chain(
                self.pickups
                    .iter()
                    .map(|pickup| (SpriteKind::Pickup { major: pickup.is_major }, &pickup.rect)),
            );
        for (kind, rect) in statics {
            surface.draw(&Sprite {
                kind,
                position: rect.position,
                size: rect.size,
                frame: 0,
                angle: 0.0,
            });
        }

        surface.draw(&Sprite {
            kind: SpriteKind::Agent,
            position: self.agent.body.position(),
            size: self.agent.body.rect.size,
            frame: self.agent.frame(),
            angle: self.agent.angle(),
        });

        for pursuer in &self.pursuers {
            surface.draw(&Sprite {
                kind: SpriteKind::Pursuer {
                    strategy: pursuer.strategy(),
                    look: pursuer.look(now),
                },
                position: pursuer.body.position(),
                size: pursuer.body.rect.size,
                frame: pursuer.frame(),
                angle: 0.0,
            });
        }
    }

    /// Records the end of the session the first time lives reach zero.
    pub(crate) fn finish_if_over(&mut self) {
        if self.finished {
            return;
        }
        if let Some(outcome) = self.outcome() {
            self.finished = true;
            info!(score = self.score, outcome = outcome.as_ref(), "Session over");
            self.events.push(GameEvent::SessionOver {
                outcome,
                score: self.score,
            });
        }
    }
}
