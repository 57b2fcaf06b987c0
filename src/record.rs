//! The persistence sink for finished sessions.

use tracing::info;

use crate::game::Outcome;

/// The result of a finished session, as handed to the leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRecord {
    pub score: u32,
    pub outcome: Outcome,
}

pub trait ScoreSink {
    fn persist(&mut self, record: ScoreRecord);
}

/// Writes records to the log. Used by the headless binary.
#[derive(Debug, Default)]
pub struct TracingScoreSink;

impl ScoreSink for TracingScoreSink {
    fn persist(&mut self, record: ScoreRecord) {
        info!(score = record.score, outcome = record.outcome.as_ref(), "Score recorded");
    }
}

/// Keeps records in memory.
#[derive(Debug, Default)]
pub struct MemoryScoreSink {
    pub records: Vec<ScoreRecord>,
}

impl ScoreSink for MemoryScoreSink {
    fn persist(&mut self, record: ScoreRecord) {
        self.records.push(record);
    }
}
