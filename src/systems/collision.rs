use std::time::Duration;

use smallvec::SmallVec;
use tracing::{debug, info, trace};

use crate::clock::Clock;
use crate::constants::score;
use crate::entity::pickup::Pickup;
use crate::entity::pursuer::Mode;
use crate::events::GameEvent;
use crate::game::Session;
use crate::systems::motion::mode_event;

/// One collision pass: pickups first, then agent/pursuer contacts.
///
/// Does nothing once the session is over, so lives can never drop below zero.
pub fn step_collisions_and_score<C: Clock>(session: &mut Session<C>) {
    if session.is_over() {
        return;
    }
    let now = session.clock.now();

    consume_pickups(session, now);
    if !session.is_over() {
        resolve_pursuer_contacts(session);
    }
    session.finish_if_over();
}

fn consume_pickups<C: Clock>(session: &mut Session<C>, now: Duration) {
    let agent = session.agent.body.rect;
    let mut eaten: SmallVec<[Pickup; 4]> = SmallVec::new();
    session.pickups.retain(|pickup| {
        if agent.overlaps(&pickup.rect) {
            eaten.push(*pickup);
            false
        } else {
            true
        }
    });

    for pickup in &eaten {
        let points = pickup.score_value();
        session.score += points;
        trace!(major = pickup.is_major, points, score = session.score, "Pickup consumed");
        session.events.push(GameEvent::PickupConsumed {
            major: pickup.is_major,
            points,
        });

        if pickup.is_major {
            let mut count = 0;
            for pursuer in session.pursuers.iter_mut() {
                if let Some(change) = pursuer.frighten(now) {
                    count += 1;
                    session.events.push(mode_event(pursuer.strategy(), change));
                }
            }
            debug!(count, "Major pickup frightened pursuers");
            session.events.push(GameEvent::PursuerFrightened { count });
        }
    }

    if !eaten.is_empty() && session.pickups.is_empty() {
        info!(score = session.score, "All pickups consumed");
        session.lives = 0;
    }
}

fn resolve_pursuer_contacts<C: Clock>(session: &mut Session<C>) {
    let agent = session.agent.body.rect;
    for index in 0..session.pursuers.len() {
        let pursuer = &mut session.pursuers[index];
        if !pursuer.body.overlaps(&agent) {
            continue;
        }

        match pursuer.mode() {
            Mode::Pursue | Mode::Retreat => {
                catch_agent(session);
                // Every entity was just reset.
                break;
            }
            Mode::Frightened => {
                let strategy = pursuer.strategy();
                pursuer.capture();
                session.score += score::CAPTURED_PURSUER;
                debug!(
                    strategy = strategy.as_ref(),
                    score = session.score,
                    "Pursuer captured"
                );
                session.events.push(GameEvent::PursuerCaptured {
                    strategy,
                    points: score::CAPTURED_PURSUER,
                });
            }
            Mode::Captured => {}
        }
    }
}

fn catch_agent<C: Clock>(session: &mut Session<C>) {
    session.lives = session.lives.saturating_sub(1);
    session.direction = None;
    session.agent.reset();
    for pursuer in session.pursuers.iter_mut() {
        pursuer.reset_to_spawn();
    }

    info!(lives_left = session.lives, "Agent caught");
    session.events.push(GameEvent::AgentCaught {
        lives_left: session.lives,
    });
}
