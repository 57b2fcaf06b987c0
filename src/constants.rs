//! This module contains all the constants used in the simulation.

use std::time::Duration;

use glam::{UVec2, Vec2};

/// The size of each tile, in world units.
pub const TILE_SIZE: f32 = 30.0;
/// The size of the default board, in tiles.
pub const BOARD_CELL_SIZE: UVec2 = UVec2::new(28, 31);
/// The size of the default board, in world units.
pub const BOARD_PIXEL_SIZE: Vec2 = Vec2::new(
    BOARD_CELL_SIZE.x as f32 * TILE_SIZE,
    BOARD_CELL_SIZE.y as f32 * TILE_SIZE,
);

/// Interval between two collision-and-scoring passes.
pub const COLLISION_INTERVAL: Duration = Duration::from_millis(10);

/// Lives the agent starts a session with.
pub const STARTING_LIVES: u32 = 3;

/// The visible animation frame changes once every this many ticks.
pub const FRAME_HOLD_TICKS: u32 = 5;

/// Movement speeds, in world units per tick.
pub mod speed {
    pub const AGENT: f32 = 3.0;
    pub const DIRECT: f32 = 2.5;
    pub const AMBUSH: f32 = 2.5;
    pub const FLANK: f32 = 1.5;
    pub const PREDICTIVE: f32 = 1.5;
    /// Forced speed while frightened.
    pub const FRIGHTENED: f32 = 1.0;
    /// Forced speed while returning home after being captured.
    pub const CAPTURED: f32 = 3.0;
}

/// Mode durations of the pursuer state machine.
pub mod timing {
    use std::time::Duration;

    pub const PURSUE: Duration = Duration::from_millis(20_000);
    pub const RETREAT: Duration = Duration::from_millis(7_000);
    pub const FRIGHTENED: Duration = Duration::from_millis(7_000);
    /// Frightened pursuers start blinking after this long.
    pub const BLINK_START: Duration = Duration::from_millis(5_000);
    /// Length of one full blink cycle; the first half shows the normal body.
    pub const BLINK_PERIOD_MS: u128 = 500;
}

/// Points awarded by the collision pass.
pub mod score {
    pub const MINOR_PICKUP: u32 = 10;
    pub const MAJOR_PICKUP: u32 = 50;
    pub const CAPTURED_PURSUER: u32 = 200;
}

/// Tuning of the individual chase heuristics.
pub mod chase {
    /// Below this best score the erratic chaser re-rolls among open directions.
    pub const AMBUSH_PROXIMITY: f32 = 150.0;
    /// How many ticks ahead the predictive chaser extrapolates the agent.
    pub const PREDICTIVE_LOOKAHEAD_TICKS: f32 = 60.0;
}

/// Number of frames in each animation set.
pub mod animation {
    pub const AGENT_FRAMES: usize = 4;
    pub const PURSUER_FRAMES: usize = 3;
    pub const FRIGHTENED_FRAMES: usize = 3;
    pub const CAPTURED_FRAMES: usize = 3;
}

/// The raw layout of the default board, as a 2D array of characters.
///
/// `#` wall, `=` pursuer enclosure, `.` pickup, `o` major pickup, ` ` empty,
/// `P` agent start, `H` home point (inside the enclosure), `1`-`4` pursuer spawns
/// (direct, ambush, flank, predictive).
pub const RAW_BOARD: [&str; BOARD_CELL_SIZE.y as usize] = [
    "############################",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#o####.#####.##.#####.####o#",
    "#.####.#####.##.#####.####.#",
    "#..........................#",
    "#.####.##.########.##.####.#",
    "#.####.##.########.##.####.#",
    "#......##....##....##......#",
    "######.##### ## #####.######",
    "     #.##### ## #####.#     ",
    "     #.##   4213   ##.#     ",
    "     #.## ###==### ##.#     ",
    "######.## #======# ##.######",
    "#     .   #==H===#   .     #",
    "######.## #======# ##.######",
    "     #.## ######## ##.#     ",
    "     #.##          ##.#     ",
    "     #.## ######## ##.#     ",
    "######.## ######## ##.######",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#.####.#####.##.#####.####.#",
    "#o..##.......P .......##..o#",
    "###.##.##.########.##.##.###",
    "###.##.##.########.##.##.###",
    "#......##....##....##......#",
    "#.##########.##.##########.#",
    "#.##########.##.##########.#",
    "#..........................#",
    "############################",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_pixel_size() {
        assert_eq!(BOARD_PIXEL_SIZE, Vec2::new(840.0, 930.0));
    }

    #[test]
    fn test_raw_board_dimensions() {
        assert_eq!(RAW_BOARD.len(), BOARD_CELL_SIZE.y as usize);
        for row in RAW_BOARD.iter() {
            assert_eq!(row.chars().count(), BOARD_CELL_SIZE.x as usize);
        }
    }

    #[test]
    fn test_raw_board_boundaries() {
        assert!(RAW_BOARD[0].chars().all(|c| c == '#'));
        assert!(RAW_BOARD[RAW_BOARD.len() - 1].chars().all(|c| c == '#'));
    }

    #[test]
    fn test_raw_board_markers() {
        let joined: String = RAW_BOARD.concat();
        for marker in ['P', 'H', '1', '2', '3', '4'] {
            assert_eq!(joined.chars().filter(|&c| c == marker).count(), 1, "marker {marker}");
        }
        assert_eq!(joined.chars().filter(|&c| c == 'o').count(), 4);
    }

    #[test]
    fn test_speeds_are_positive() {
        for s in [
            speed::AGENT,
            speed::DIRECT,
            speed::AMBUSH,
            speed::FLANK,
            speed::PREDICTIVE,
            speed::FRIGHTENED,
            speed::CAPTURED,
        ] {
            assert!(s > 0.0);
        }
    }
}
