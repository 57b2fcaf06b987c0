use tracing::trace;

use crate::entity::collision::Rect;
use crate::entity::direction::Direction;
use crate::entity::moving::MovingEntity;

/// Resolves the agent's next heading from the latest direction signal.
///
/// A signal that is clear of every obstacle is taken as-is. A blocked turn onto the
/// other axis keeps the current heading while that is still clear, so a turn pressed
/// early is held until the opening arrives. Anything else that is blocked stops the agent.
pub fn resolve_heading<'a, I>(body: &MovingEntity, signal: Option<Direction>, obstacles: I) -> Option<Direction>
where
    I: IntoIterator<Item = &'a Rect> + Clone,
{
    let candidate = signal?;
    if !body.would_collide(obstacles.clone(), candidate) {
        return Some(candidate);
    }

    let previous = body.heading;
    let turning = previous.is_some_and(|previous| previous.is_horizontal() != candidate.is_horizontal());
    if turning {
        let resolved = previous.filter(|&previous| !body.would_collide(obstacles, previous));
        trace!(wanted = candidate.as_ref(), kept = ?resolved, "Blocked turn");
        resolved
    } else {
        None
    }
}
