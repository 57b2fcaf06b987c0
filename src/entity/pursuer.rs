//! The pursuer state machine.
//!
//! Every pursuer cycles between [`Mode::Pursue`] and [`Mode::Retreat`] on timers,
//! is knocked into [`Mode::Frightened`] when the agent eats a major pickup, and
//! becomes [`Mode::Captured`] when the agent catches it while frightened. All mode
//! changes go through [`Pursuer::enter_mode`], which leaves the pursuer tile-aligned.

use std::time::Duration;

use glam::Vec2;
use rand::Rng;
use strum_macros::{AsRefStr, EnumIter};
use tracing::{debug, trace};

use crate::clock::elapsed_since;
use crate::constants::{animation, speed, timing};
use crate::entity::agent::Agent;
use crate::entity::chase::{pick, pick_erratic, score_directions, Policy, Strategy};
use crate::entity::collision::Rect;
use crate::entity::direction::Direction;
use crate::entity::moving::MovingEntity;
use crate::map::{Blockers, Layout};

/// The behavioral state of a pursuer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    /// Chasing the agent with the variant's own heuristic.
    Pursue,
    /// Heading for the variant's board corner.
    Retreat,
    /// Fleeing the agent; can be captured.
    Frightened,
    /// Returning to the home point after being caught.
    Captured,
}

/// How a pursuer should currently be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum PursuerLook {
    Normal,
    Frightened,
    /// Frightened, but showing the normal body for half of each blink cycle.
    Blinking,
    Captured,
}

/// A completed mode transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeChange {
    pub from: Mode,
    pub to: Mode,
}

#[derive(Debug, Clone)]
pub struct Pursuer {
    pub body: MovingEntity,
    strategy: Strategy,
    mode: Mode,
    spawn: Vec2,
    /// Entry time of the current pursue or retreat period, stamped on its first AI step.
    mode_since: Option<Duration>,
    frightened_since: Option<Duration>,
    /// Set once a pursue period has run to completion; cleared when the agent is caught.
    completed_pursuit: bool,
}

impl Pursuer {
    pub fn new(strategy: Strategy, spawn: Vec2) -> Self {
        Self {
            body: MovingEntity::new(spawn, strategy.base_speed()),
            strategy,
            mode: Mode::Retreat,
            spawn,
            mode_since: None,
            frightened_since: None,
            completed_pursuit: false,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn spawn(&self) -> Vec2 {
        self.spawn
    }

    pub fn base_speed(&self) -> f32 {
        self.strategy.base_speed()
    }

    pub fn completed_pursuit(&self) -> bool {
        self.completed_pursuit
    }

    /// Whether touching the agent costs the agent a life.
    pub fn is_dangerous(&self) -> bool {
        matches!(self.mode, Mode::Pursue | Mode::Retreat)
    }

    /// The obstacle sets this pursuer steers around in its current mode.
    pub fn blockers(&self) -> Blockers {
        match self.mode {
            Mode::Captured => Blockers::WALLS,
            _ => Blockers::all(),
        }
    }

    /// Switches to `mode`, snapping to the tile grid and applying the mode's speed.
    ///
    /// The pursue and retreat timers restart from zero on every transition.
    pub fn enter_mode(&mut self, mode: Mode) -> ModeChange {
        let change = ModeChange { from: self.mode, to: mode };
        self.mode = mode;
        self.mode_since = None;
        if mode != Mode::Frightened {
            self.frightened_since = None;
        }
        self.body.speed = match mode {
            Mode::Pursue | Mode::Retreat => self.base_speed(),
            Mode::Frightened => speed::FRIGHTENED,
            Mode::Captured => speed::CAPTURED,
        };
        self.body.snap_to_grid();

        debug!(
            strategy = self.strategy.as_ref(),
            from = change.from.as_ref(),
            to = change.to.as_ref(),
            position = ?self.body.position(),
            "Pursuer mode changed"
        );
        change
    }

    /// Forces the pursuer into the frightened mode, reversing its heading.
    ///
    /// Only pursuing or retreating pursuers are affected. A pursuer that is already
    /// frightened keeps its heading and its original timer. Returns the transition, if any.
    pub fn frighten(&mut self, now: Duration) -> Option<ModeChange> {
        match self.mode {
            Mode::Captured | Mode::Frightened => None,
            Mode::Pursue | Mode::Retreat => {
                self.body.reverse();
                let change = self.enter_mode(Mode::Frightened);
                self.frightened_since = Some(now);
                Some(change)
            }
        }
    }

    /// Marks the pursuer as caught by the agent.
    pub fn capture(&mut self) -> ModeChange {
        self.body.stop();
        self.enter_mode(Mode::Captured)
    }

    /// Ends the frightened mode once it has lasted long enough, reversing the heading.
    pub fn check_frightened_expiry(&mut self, now: Duration) -> Option<ModeChange> {
        if self.mode != Mode::Frightened {
            return None;
        }
        let elapsed = self.frightened_since.and_then(|since| elapsed_since(now, since))?;
        if elapsed < timing::FRIGHTENED {
            return None;
        }
        self.body.reverse();
        Some(self.enter_mode(Mode::Pursue))
    }

    /// Returns the pursuer to its spawn point, stopped and pursuing.
    pub fn reset_to_spawn(&mut self) {
        self.body.teleport(self.spawn);
        self.completed_pursuit = false;
        self.enter_mode(Mode::Pursue);
    }

    /// Chooses a new heading for this tick and applies any timer-driven transition.
    pub fn step_ai<R: Rng + ?Sized>(
        &mut self,
        now: Duration,
        agent: &Agent,
        layout: &Layout,
        rng: &mut R,
    ) -> Option<ModeChange> {
        let obstacles = layout.obstacles(self.blockers());
        match self.mode {
            Mode::Frightened => {
                let scores = score_directions(
                    &self.body,
                    agent.body.position(),
                    obstacles.clone(),
                    Policy::Farthest,
                );
                let direction = pick(&scores, Policy::Farthest, self.body.heading);
                self.steer(direction, obstacles);
                None
            }
            Mode::Captured => {
                let home = layout.home();
                self.follow(home, obstacles);
                if !self.body.overlaps(home) {
                    return None;
                }
                let next = if self.completed_pursuit {
                    Mode::Retreat
                } else {
                    Mode::Pursue
                };
                self.body.stop();
                Some(self.enter_mode(next))
            }
            Mode::Pursue => {
                let target = self.strategy.pursuit_target(self.body.position(), agent);
                let scores = score_directions(&self.body, target, obstacles.clone(), Policy::Nearest);
                let direction = match self.strategy {
                    Strategy::Ambush => pick_erratic(&scores, self.body.heading, rng),
                    _ => pick(&scores, Policy::Nearest, self.body.heading),
                };
                self.steer(direction, obstacles);

                if self.timer_elapsed(now) < Some(timing::PURSUE) {
                    return None;
                }
                self.completed_pursuit = true;
                Some(self.enter_mode(Mode::Retreat))
            }
            Mode::Retreat => {
                let corner = layout.retreat_corner(self.strategy);
                self.follow(&corner, obstacles);

                if self.timer_elapsed(now) < Some(timing::RETREAT) {
                    return None;
                }
                Some(self.enter_mode(Mode::Pursue))
            }
        }
    }

    fn follow<'a, I>(&mut self, target: &Rect, obstacles: I)
    where
        I: IntoIterator<Item = &'a Rect> + Clone,
    {
        let scores = score_directions(&self.body, target.position, obstacles.clone(), Policy::Nearest);
        let direction = pick(&scores, Policy::Nearest, self.body.heading);
        self.steer(direction, obstacles);
    }

    /// Takes `direction` as the new heading, unless the pursuer is moving through open
    /// maze and every direction but the reverse is blocked. At such a dead end it stops
    /// instead, and turns back out from rest on its next step.
    ///
    /// A pursuer that overlaps an obstacle (leaving the enclosure) or starts from rest
    /// always takes the pick.
    fn steer<'a, I>(&mut self, direction: Direction, obstacles: I)
    where
        I: IntoIterator<Item = &'a Rect> + Clone,
    {
        let dead_end = self.body.heading.is_some()
            && self.body.would_collide(obstacles.clone(), direction)
            && !obstacles.into_iter().any(|obstacle| self.body.overlaps(obstacle));
        if dead_end {
            trace!(strategy = self.strategy.as_ref(), position = ?self.body.position(), "Dead end");
            self.body.stop();
        } else {
            self.body.heading = Some(direction);
        }
    }

    /// Stamps the pursue/retreat timer on first use and returns its elapsed time.
    /// `None` means the clock reads earlier than the stamp.
    fn timer_elapsed(&mut self, now: Duration) -> Option<Duration> {
        let since = *self.mode_since.get_or_insert(now);
        elapsed_since(now, since)
    }

    pub fn look(&self, now: Duration) -> PursuerLook {
        match self.mode {
            Mode::Pursue | Mode::Retreat => PursuerLook::Normal,
            Mode::Captured => PursuerLook::Captured,
            Mode::Frightened => {
                let blinking = self
                    .frightened_since
                    .and_then(|since| elapsed_since(now, since))
                    .is_some_and(|elapsed| elapsed >= timing::BLINK_START);
                if blinking && now.as_millis() % timing::BLINK_PERIOD_MS < timing::BLINK_PERIOD_MS / 2 {
                    PursuerLook::Blinking
                } else {
                    PursuerLook::Frightened
                }
            }
        }
    }

    /// The current frame of whichever animation set the mode displays.
    pub fn frame(&self) -> usize {
        let len = match self.mode {
            Mode::Pursue | Mode::Retreat => animation::PURSUER_FRAMES,
            Mode::Frightened => animation::FRIGHTENED_FRAMES,
            Mode::Captured => animation::CAPTURED_FRAMES,
        };
        self.body.frame(len)
    }
}
