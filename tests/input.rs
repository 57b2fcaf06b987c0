use maze_chase::entity::direction::Direction;
use maze_chase::input::{Autopilot, InputSource, ScriptedInput};
use pretty_assertions::assert_eq;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use speculoos::prelude::*;

#[test]
fn test_autopilot_presses_on_interval() {
    let mut autopilot = Autopilot::new(SmallRng::seed_from_u64(3), 4);

    let presses: Vec<bool> = (0..12).map(|_| autopilot.poll().is_some()).collect();

    let expected: Vec<bool> = (0..12).map(|poll| poll % 4 == 0).collect();
    assert_eq!(presses, expected);
}

#[test]
fn test_autopilot_zero_interval_presses_every_poll() {
    let mut autopilot = Autopilot::new(SmallRng::seed_from_u64(3), 0);
    for _ in 0..5 {
        assert_that(&autopilot.poll()).is_some();
    }
}

#[test]
fn test_scripted_input_replays_then_goes_quiet() {
    let mut input = ScriptedInput::new([Some(Direction::Left), None, Some(Direction::Up)]);

    assert_eq!(input.poll(), Some(Direction::Left));
    assert_eq!(input.poll(), None);
    assert_eq!(input.poll(), Some(Direction::Up));
    assert_eq!(input.poll(), None);
    assert_eq!(input.poll(), None);
}
