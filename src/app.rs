use std::time::{Duration, Instant};

use tracing::{debug, info, trace, warn};

use crate::clock::Clock;
use crate::config::Config;
use crate::constants::COLLISION_INTERVAL;
use crate::events::GameEvent;
use crate::formatter;
use crate::game::Session;
use crate::input::InputSource;
use crate::record::{ScoreRecord, ScoreSink};

/// The host loop: runs both session ticks on one thread at their own rates.
pub struct App<C: Clock, I: InputSource, S: ScoreSink> {
    pub session: Session<C>,
    config: Config,
    input: I,
    sink: S,
    time_limit: Option<Duration>,
    recorded: bool,
}

impl<C: Clock, I: InputSource, S: ScoreSink> App<C, I, S> {
    pub fn new(session: Session<C>, config: Config, input: I, sink: S) -> Self {
        Self {
            session,
            config,
            input,
            sink,
            time_limit: None,
            recorded: false,
        }
    }

    /// Stops the loop after `limit` even if the session is not over.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Runs until the session ends or the time limit expires.
    ///
    /// Returns the final record if the session ended; it has already been handed to the sink.
    pub fn run(&mut self) -> Option<ScoreRecord> {
        let frame = self.config.frame_interval();
        info!(
            difficulty = self.config.difficulty,
            "Starting game loop ({:.3}ms)",
            frame.as_secs_f32() * 1000.0
        );

        let started = Instant::now();
        let mut next_motion = started;
        let mut next_collision = started;

        loop {
            if self.session.is_over() {
                break;
            }
            if self.time_limit.is_some_and(|limit| started.elapsed() >= limit) {
                info!(score = self.session.score(), "Time limit reached");
                break;
            }

            let now = Instant::now();
            while next_collision <= now && !self.session.is_over() {
                self.session.step_collisions_and_score();
                next_collision += COLLISION_INTERVAL;
            }
            if next_motion <= now && !self.session.is_over() {
                self.motion_tick();
                next_motion += frame;
            }
            self.log_events();

            let wake = next_motion.min(next_collision);
            let now = Instant::now();
            if wake > now {
                spin_sleep::sleep(wake - now);
            } else if now - wake > frame {
                warn!("Game loop behind schedule by: {:?}", now - wake);
                next_motion = now;
                next_collision = now;
            }
        }

        self.finish()
    }

    /// Polls input and runs one motion tick.
    pub fn motion_tick(&mut self) {
        if let Some(direction) = self.input.poll() {
            self.session.set_direction(Some(direction));
        }
        self.session.step_motion_and_ai();
        formatter::increment_tick();
    }

    fn log_events(&mut self) {
        for event in self.session.drain_events() {
            match event {
                GameEvent::AgentCaught { lives_left } => debug!(lives_left, "Event: agent caught"),
                GameEvent::SessionOver { outcome, score } => {
                    debug!(outcome = outcome.as_ref(), score, "Event: session over")
                }
                other => trace!(event = ?other, "Event"),
            }
        }
    }

    /// Hands the final record to the sink, at most once per session.
    pub fn finish(&mut self) -> Option<ScoreRecord> {
        let record = self.session.record()?;
        if !self.recorded {
            self.recorded = true;
            self.sink.persist(record);
        }
        Some(record)
    }
}
