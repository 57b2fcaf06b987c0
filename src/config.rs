use std::time::Duration;

/// Difficulty used when none is configured.
pub const DEFAULT_DIFFICULTY: u32 = 5;

/// The only tunable the simulation reads: a difficulty that sets the frame-rate ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub difficulty: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: DEFAULT_DIFFICULTY,
        }
    }
}

impl Config {
    pub fn new(difficulty: u32) -> Self {
        Self { difficulty }
    }

    /// Motion ticks per second: `log2((difficulty + 1) * 2.5) * 30`.
    pub fn fps_limit(&self) -> f64 {
        ((self.difficulty as f64 + 1.0) * 2.5).log2() * 30.0
    }

    /// Time between two motion ticks.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps_limit())
    }
}
