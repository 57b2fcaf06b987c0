#![allow(dead_code)]

use glam::Vec2;
use maze_chase::clock::ManualClock;
use maze_chase::constants::TILE_SIZE;
use maze_chase::game::Session;
use maze_chase::map::Layout;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// A small board with every marker, two corridors and a sealed enclosure.
pub const SMALL_BOARD: [&str; 7] = [
    "#########",
    "#P.o 1 2#",
    "#.#####.#",
    "#.#=H=#.#",
    "#.#####.#",
    "#   3 4 #",
    "#########",
];

/// A single corridor holding exactly one pickup, right next to the agent.
pub const SINGLE_PICKUP_BOARD: [&str; 4] = ["#########", "#P. 1234#", "####H####", "#########"];

pub fn tile(x: i32, y: i32) -> Vec2 {
    Vec2::new(x as f32, y as f32) * TILE_SIZE
}

pub fn rng() -> SmallRng {
    SmallRng::seed_from_u64(0x5EED)
}

pub fn layout(board: &[&str]) -> Layout {
    Layout::parse(board).expect("test board should parse")
}

/// A session on `board` driven by a manual clock; the returned clock shares its time.
pub fn session(board: &[&str]) -> (Session<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let session = Session::new(board, clock.clone(), rng()).expect("test board should parse");
    (session, clock)
}
