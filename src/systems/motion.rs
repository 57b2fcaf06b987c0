use tracing::trace;

use crate::clock::Clock;
use crate::entity::chase::Strategy;
use crate::entity::pursuer::{Mode, ModeChange};
use crate::events::GameEvent;
use crate::game::Session;
use crate::map::Blockers;
use crate::systems::movement::resolve_heading;

/// The event reported for a pursuer's mode transition.
pub(crate) fn mode_event(strategy: Strategy, change: ModeChange) -> GameEvent {
    if change.from == Mode::Captured {
        GameEvent::PursuerReturned {
            strategy,
            mode: change.to,
        }
    } else {
        GameEvent::mode_changed(strategy, change)
    }
}

/// One rendering tick: integrate the agent, steer and integrate the pursuers, then
/// resolve the agent's heading for the next tick.
///
/// Pursuer AI, including the pursue/retreat timers, only runs while a direction is held.
pub fn step_motion_and_ai<C: Clock>(session: &mut Session<C>) {
    if session.is_over() {
        return;
    }
    let now = session.clock.now();

    let agent = &mut session.agent;
    agent.body.integrate();
    agent.update_angle();
    agent.body.advance_frame();

    if session.direction.is_some() {
        for pursuer in session.pursuers.iter_mut() {
            if let Some(change) = pursuer.step_ai(now, &session.agent, &session.layout, &mut session.rng) {
                session.events.push(mode_event(pursuer.strategy(), change));
            }
        }
    }

    for pursuer in session.pursuers.iter_mut() {
        pursuer.body.integrate();
        pursuer.body.advance_frame();
        if let Some(change) = pursuer.check_frightened_expiry(now) {
            session.events.push(mode_event(pursuer.strategy(), change));
        }
    }

    let heading = resolve_heading(
        &session.agent.body,
        session.direction,
        session.layout.obstacles(Blockers::all()),
    );
    if heading != session.agent.body.heading {
        trace!(from = ?session.agent.body.heading, to = ?heading, "Agent heading changed");
    }
    session.agent.body.heading = heading;
}
