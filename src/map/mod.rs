//! This module defines the board layout and the static obstacle sets built from it.

pub mod parser;

use bitflags::bitflags;
use glam::{IVec2, UVec2, Vec2};
use tracing::debug;

use crate::constants::TILE_SIZE;
use crate::entity::chase::Strategy;
use crate::entity::collision::Rect;
use crate::entity::pickup::Pickup;
use crate::error::ParseError;
use crate::map::parser::{MapTile, MapTileParser};

bitflags! {
    /// Which static obstacle sets an entity is blocked by.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Blockers: u8 {
        const WALLS = 1 << 0;
        const ENCLOSURE = 1 << 1;
    }
}

/// The immutable geometry of a session, built once from a raw board.
#[derive(Debug, Clone)]
pub struct Layout {
    cell_size: UVec2,
    walls: Vec<Rect>,
    enclosure: Vec<Rect>,
    pickups: Vec<Pickup>,
    agent_start: Vec2,
    home: Rect,
    spawns: [Vec2; 4],
}

fn cell_to_world(cell: IVec2) -> Vec2 {
    cell.as_vec2() * TILE_SIZE
}

impl Layout {
    /// Builds a layout from raw board rows.
    pub fn parse<S: AsRef<str>>(raw_board: &[S]) -> Result<Layout, ParseError> {
        let parsed = MapTileParser::parse_board(raw_board)?;

        let mut walls = Vec::new();
        let mut enclosure = Vec::new();
        let mut pickups = Vec::new();
        for (cell, tile) in parsed.cells() {
            match tile {
                MapTile::Wall => walls.push(Rect::tile(cell)),
                MapTile::Enclosure => enclosure.push(Rect::tile(cell)),
                MapTile::Pickup => pickups.push(Pickup::minor(cell_to_world(cell))),
                MapTile::MajorPickup => pickups.push(Pickup::major(cell_to_world(cell))),
                MapTile::Empty => {}
            }
        }

        let layout = Layout {
            cell_size: UVec2::new(parsed.width() as u32, parsed.height() as u32),
            walls,
            enclosure,
            pickups,
            agent_start: cell_to_world(parsed.agent_start),
            home: Rect::tile(parsed.home),
            spawns: parsed.spawns.map(cell_to_world),
        };

        debug!(
            walls = layout.walls.len(),
            enclosure = layout.enclosure.len(),
            pickups = layout.pickups.len(),
            "Layout built"
        );
        Ok(layout)
    }

    /// The board size in tiles.
    pub fn cell_size(&self) -> UVec2 {
        self.cell_size
    }

    /// The board size in world units.
    pub fn pixel_size(&self) -> Vec2 {
        self.cell_size.as_vec2() * TILE_SIZE
    }

    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    pub fn enclosure(&self) -> &[Rect] {
        &self.enclosure
    }

    /// Every obstacle belonging to one of the sets in `mask`.
    pub fn obstacles(&self, mask: Blockers) -> impl Iterator<Item = &Rect> + Clone + '_ {
        let walls: &[Rect] = if mask.contains(Blockers::WALLS) { &self.walls } else { &[] };
        let enclosure: &[Rect] = if mask.contains(Blockers::ENCLOSURE) {
            &self.enclosure
        } else {
            &[]
        };
        walls.iter().chain(enclosure.iter())
    }

    /// The pickups present at the start of a session.
    pub fn pickups(&self) -> &[Pickup] {
        &self.pickups
    }

    pub fn agent_start(&self) -> Vec2 {
        self.agent_start
    }

    /// The tile a captured pursuer returns to.
    pub fn home(&self) -> &Rect {
        &self.home
    }

    pub fn spawn(&self, strategy: Strategy) -> Vec2 {
        self.spawns[strategy.as_usize()]
    }

    pub fn retreat_corner(&self, strategy: Strategy) -> Rect {
        strategy.retreat_corner(self.pixel_size())
    }
}
