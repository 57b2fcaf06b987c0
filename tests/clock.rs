use std::time::Duration;

use maze_chase::clock::{elapsed_since, Clock, ManualClock, SystemClock};
use maze_chase::config::Config;
use maze_chase::formatter::{increment_tick, tick_count};
use maze_chase::game::Outcome;
use maze_chase::record::{MemoryScoreSink, ScoreRecord, ScoreSink};
use speculoos::prelude::*;

#[test]
fn test_manual_clock_clones_share_time() {
    let clock = ManualClock::new();
    let handle = clock.clone();

    handle.advance(Duration::from_millis(250));
    assert_eq!(clock.now(), Duration::from_millis(250));

    clock.set(Duration::from_secs(2));
    assert_eq!(handle.now(), Duration::from_secs(2));
    assert_eq!(ManualClock::starting_at(Duration::from_secs(9)).now(), Duration::from_secs(9));
}

#[test]
fn test_system_clock_is_monotonic() {
    let clock = SystemClock::new();
    let first = clock.now();
    let second = clock.now();
    assert_that(&(second >= first)).is_true();
}

#[test]
fn test_elapsed_since_rejects_skew() {
    assert_eq!(
        elapsed_since(Duration::from_secs(5), Duration::from_secs(2)),
        Some(Duration::from_secs(3))
    );
    assert_that(&elapsed_since(Duration::from_secs(1), Duration::from_secs(2))).is_none();
}

#[test]
fn test_config_frame_interval_shrinks_with_difficulty() {
    assert_that(&(Config::new(9).frame_interval() < Config::new(1).frame_interval())).is_true();
}

#[test]
fn test_tick_counter_advances() {
    let before = tick_count();
    increment_tick();
    assert_that(&(tick_count() > before)).is_true();
}

#[test]
fn test_memory_sink_collects() {
    let mut sink = MemoryScoreSink::default();
    let record = ScoreRecord {
        score: 420,
        outcome: Outcome::Lost,
    };
    sink.persist(record);
    assert_eq!(sink.records, vec![record]);
}
