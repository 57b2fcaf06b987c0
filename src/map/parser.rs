//! Map parsing functionality for converting raw board layouts into structured data.

use glam::IVec2;

use crate::entity::chase::Strategy;
use crate::error::ParseError;

/// The static content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapTile {
    Empty,
    Wall,
    /// Part of the pursuer enclosure: blocks the agent, not a returning pursuer.
    Enclosure,
    Pickup,
    MajorPickup,
}

/// A one-of-a-kind position marked on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    AgentStart,
    Home,
    Spawn(Strategy),
}

impl Marker {
    pub const fn character(self) -> char {
        match self {
            Marker::AgentStart => 'P',
            Marker::Home => 'H',
            Marker::Spawn(strategy) => strategy.marker(),
        }
    }
}

/// Represents the parsed data from a raw board layout.
#[derive(Debug)]
pub struct ParsedMap {
    /// Tiles in row-major order: `tiles[y][x]`.
    pub tiles: Vec<Vec<MapTile>>,
    pub agent_start: IVec2,
    pub home: IVec2,
    /// Spawn cells indexed by [`Strategy::as_usize`].
    pub spawns: [IVec2; 4],
}

impl ParsedMap {
    pub fn width(&self) -> usize {
        self.tiles.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.tiles.len()
    }

    /// Iterates every cell with its grid coordinate.
    pub fn cells(&self) -> impl Iterator<Item = (IVec2, MapTile)> + '_ {
        self.tiles.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, tile)| (IVec2::new(x as i32, y as i32), *tile))
        })
    }
}

/// Parser for converting raw board layouts into structured map data.
pub struct MapTileParser;

impl MapTileParser {
    /// Parses a single character into a map tile and the marker it carries, if any.
    pub fn parse_character(c: char) -> Result<(MapTile, Option<Marker>), ParseError> {
        let parsed = match c {
            '#' => (MapTile::Wall, None),
            '=' => (MapTile::Enclosure, None),
            '.' => (MapTile::Pickup, None),
            'o' => (MapTile::MajorPickup, None),
            ' ' => (MapTile::Empty, None),
            'P' => (MapTile::Empty, Some(Marker::AgentStart)),
            'H' => (MapTile::Enclosure, Some(Marker::Home)),
            '1' => (MapTile::Empty, Some(Marker::Spawn(Strategy::Direct))),
            '2' => (MapTile::Empty, Some(Marker::Spawn(Strategy::Ambush))),
            '3' => (MapTile::Empty, Some(Marker::Spawn(Strategy::Flank))),
            '4' => (MapTile::Empty, Some(Marker::Spawn(Strategy::Predictive))),
            _ => return Err(ParseError::UnknownCharacter(c)),
        };
        Ok(parsed)
    }

    /// Parses a raw board layout into structured map data.
    ///
    /// # Errors
    ///
    /// Returns an error if the board is empty or ragged, contains unknown characters,
    /// has no pickups, or does not mark each of the agent start, the home point and the
    /// four pursuer spawns exactly once.
    pub fn parse_board<S: AsRef<str>>(raw_board: &[S]) -> Result<ParsedMap, ParseError> {
        let expected = raw_board.first().ok_or(ParseError::Empty)?.as_ref().chars().count();
        if expected == 0 {
            return Err(ParseError::Empty);
        }

        let mut tiles = Vec::with_capacity(raw_board.len());
        let mut agent_start = None;
        let mut home = None;
        let mut spawns: [Option<IVec2>; 4] = [None; 4];
        let mut pickups = 0usize;

        for (y, line) in raw_board.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != expected {
                return Err(ParseError::RaggedRow { row: y, expected, found });
            }

            let mut row = Vec::with_capacity(expected);
            for (x, character) in line.chars().enumerate() {
                let (tile, marker) = Self::parse_character(character)?;
                if matches!(tile, MapTile::Pickup | MapTile::MajorPickup) {
                    pickups += 1;
                }

                if let Some(marker) = marker {
                    let slot = match marker {
                        Marker::AgentStart => &mut agent_start,
                        Marker::Home => &mut home,
                        Marker::Spawn(strategy) => &mut spawns[strategy.as_usize()],
                    };
                    if slot.replace(IVec2::new(x as i32, y as i32)).is_some() {
                        return Err(ParseError::DuplicateMarker(character));
                    }
                }

                row.push(tile);
            }
            tiles.push(row);
        }

        if pickups == 0 {
            return Err(ParseError::NoPickups);
        }

        let agent_start = agent_start.ok_or(ParseError::MissingMarker(Marker::AgentStart.character()))?;
        let home = home.ok_or(ParseError::MissingMarker(Marker::Home.character()))?;
        let mut resolved = [IVec2::ZERO; 4];
        for strategy in Strategy::ALL {
            resolved[strategy.as_usize()] =
                spawns[strategy.as_usize()].ok_or(ParseError::MissingMarker(strategy.marker()))?;
        }

        Ok(ParsedMap {
            tiles,
            agent_start,
            home,
            spawns: resolved,
        })
    }
}
