use crate::entity::chase::Strategy;
use crate::entity::pursuer::{Mode, ModeChange};
use crate::game::Outcome;

/// Something that happened during a tick, for audio and UI collaborators to react to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameEvent {
    PickupConsumed { major: bool, points: u32 },
    /// A major pickup sent `count` pursuers into the frightened mode.
    PursuerFrightened { count: usize },
    PursuerCaptured { strategy: Strategy, points: u32 },
    /// A captured pursuer reached home and resumed in `mode`.
    PursuerReturned { strategy: Strategy, mode: Mode },
    AgentCaught { lives_left: u32 },
    ModeChanged { strategy: Strategy, from: Mode, to: Mode },
    SessionOver { outcome: Outcome, score: u32 },
}

impl GameEvent {
    pub fn mode_changed(strategy: Strategy, change: ModeChange) -> Self {
        GameEvent::ModeChanged {
            strategy,
            from: change.from,
            to: change.to,
        }
    }
}
