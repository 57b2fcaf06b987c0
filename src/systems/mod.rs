//! Per-tick systems operating on a [`Session`](crate::game::Session).

pub mod collision;
pub mod motion;
pub mod movement;
