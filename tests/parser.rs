use glam::{IVec2, UVec2, Vec2};
use maze_chase::constants::{BOARD_PIXEL_SIZE, RAW_BOARD};
use maze_chase::entity::chase::Strategy;
use maze_chase::error::ParseError;
use maze_chase::map::parser::{MapTile, MapTileParser};
use maze_chase::map::{Blockers, Layout};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

use common::{tile, SMALL_BOARD};

fn parse_error(board: &[&str]) -> ParseError {
    match MapTileParser::parse_board(board) {
        Ok(_) => panic!("board should be rejected: {board:?}"),
        Err(error) => error,
    }
}

#[test]
fn test_parse_default_board() {
    let layout = Layout::parse(&RAW_BOARD).unwrap();

    assert_eq!(layout.cell_size(), UVec2::new(28, 31));
    assert_eq!(layout.pixel_size(), BOARD_PIXEL_SIZE);
    assert_that(&layout.pickups().iter().filter(|p| p.is_major).count()).is_equal_to(4);
    assert_that(&layout.walls().is_empty()).is_false();
    assert_that(&layout.enclosure().is_empty()).is_false();
}

#[test]
fn test_parse_small_board_markers() {
    let parsed = MapTileParser::parse_board(&SMALL_BOARD).unwrap();

    assert_eq!(parsed.agent_start, IVec2::new(1, 1));
    assert_eq!(parsed.home, IVec2::new(4, 3));
    assert_eq!(parsed.spawns[Strategy::Direct.as_usize()], IVec2::new(5, 1));
    assert_eq!(parsed.spawns[Strategy::Ambush.as_usize()], IVec2::new(7, 1));
    assert_eq!(parsed.spawns[Strategy::Flank.as_usize()], IVec2::new(4, 5));
    assert_eq!(parsed.spawns[Strategy::Predictive.as_usize()], IVec2::new(6, 5));

    // Markers sit on passable tiles, except home which is part of the enclosure.
    assert_eq!(parsed.tiles[1][1], MapTile::Empty);
    assert_eq!(parsed.tiles[3][4], MapTile::Enclosure);
}

#[test]
fn test_layout_world_positions() {
    let layout = common::layout(&SMALL_BOARD);

    assert_eq!(layout.agent_start(), tile(1, 1));
    assert_eq!(layout.home().position, tile(4, 3));
    assert_eq!(layout.home().size, Vec2::splat(30.0));
    assert_eq!(layout.spawn(Strategy::Flank), tile(4, 5));
    assert_eq!(layout.retreat_corner(Strategy::Direct).position, Vec2::new(270.0, 210.0));
    assert_eq!(layout.retreat_corner(Strategy::Direct).size, Vec2::ZERO);
}

#[test]
fn test_obstacle_masks() {
    let layout = common::layout(&SMALL_BOARD);
    let walls = layout.walls().len();
    let enclosure = layout.enclosure().len();

    assert_that(&enclosure).is_equal_to(3);
    assert_that(&layout.obstacles(Blockers::WALLS).count()).is_equal_to(walls);
    assert_that(&layout.obstacles(Blockers::ENCLOSURE).count()).is_equal_to(enclosure);
    assert_that(&layout.obstacles(Blockers::all()).count()).is_equal_to(walls + enclosure);
    assert_that(&layout.obstacles(Blockers::empty()).count()).is_equal_to(0);
}

#[test]
fn test_rejects_unknown_character() {
    let mut board = SMALL_BOARD;
    board[5] = "#   3 4X#";
    assert_eq!(parse_error(&board), ParseError::UnknownCharacter('X'));
}

#[test]
fn test_rejects_ragged_rows() {
    let mut board = SMALL_BOARD;
    board[2] = "#.#####.";
    assert_eq!(
        parse_error(&board),
        ParseError::RaggedRow {
            row: 2,
            expected: 9,
            found: 8
        }
    );
}

#[test]
fn test_rejects_empty_board() {
    let empty: [&str; 0] = [];
    assert_eq!(parse_error(&empty), ParseError::Empty);
    assert_eq!(parse_error(&[""]), ParseError::Empty);
}

#[test]
fn test_rejects_missing_and_duplicate_markers() {
    let mut board = SMALL_BOARD;
    board[1] = "# .o 1 2#";
    assert_eq!(parse_error(&board), ParseError::MissingMarker('P'));

    let mut board = SMALL_BOARD;
    board[5] = "#   3 1 #";
    assert_eq!(parse_error(&board), ParseError::DuplicateMarker('1'));

    let mut board = SMALL_BOARD;
    board[3] = "#.#===#.#";
    assert_eq!(parse_error(&board), ParseError::MissingMarker('H'));
}

#[test]
fn test_rejects_board_without_pickups() {
    let board = ["#######", "#P1234#", "###H###"];
    assert_eq!(parse_error(&board), ParseError::NoPickups);
}
