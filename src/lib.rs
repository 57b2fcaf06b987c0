//! Maze-chase simulation library crate.

pub mod app;
pub mod clock;
pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod events;
pub mod formatter;
pub mod game;
pub mod input;
pub mod map;
pub mod record;
pub mod render;
pub mod systems;
