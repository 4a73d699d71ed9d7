// src/map/tile.rs
use serde::Serialize;

/// The fixed tile-code vocabulary written by the layout generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Empty = 0,
    Floor = 1,
    Wall = 2,
    Corridor = 3,
    Door = 4,
    Treasure = 5,
    Entrance = 6,
    Boss = 7,
}

impl TileKind {
    pub fn from_code(code: u8) -> Option<TileKind> {
        match code {
            0 => Some(Self::Empty),
            1 => Some(Self::Floor),
            2 => Some(Self::Wall),
            3 => Some(Self::Corridor),
            4 => Some(Self::Door),
            5 => Some(Self::Treasure),
            6 => Some(Self::Entrance),
            7 => Some(Self::Boss),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Only floor tiles are walkable for region extraction.
    pub fn is_walkable(self) -> bool {
        self == Self::Floor
    }

    pub fn info(self) -> &'static TileInfo {
        &TILE_LEGEND[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn description(self) -> &'static str {
        self.info().description
    }

    pub fn color(self) -> &'static str {
        self.info().color
    }

    pub fn all() -> &'static [TileKind] {
        &[
            Self::Empty,
            Self::Floor,
            Self::Wall,
            Self::Corridor,
            Self::Door,
            Self::Treasure,
            Self::Entrance,
            Self::Boss,
        ]
    }
}

/// One row of the grid key legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

/// Display legend indexed by tile code.
pub const TILE_LEGEND: [TileInfo; 8] = [
    TileInfo { name: "Empty", description: "Void/unused space", color: "#1a1a1a" },
    TileInfo { name: "Floor", description: "Room floor tiles", color: "#8B4513" },
    TileInfo { name: "Wall", description: "Wall structures", color: "#404040" },
    TileInfo { name: "Corridor", description: "Connecting passages", color: "#D2B48C" },
    TileInfo { name: "Door", description: "Room entrances/exits", color: "#FF6B35" },
    TileInfo { name: "Treasure", description: "Special treasure locations", color: "#FFD700" },
    TileInfo { name: "Entrance", description: "Dungeon entrance point", color: "#32CD32" },
    TileInfo { name: "Boss", description: "Boss room marker", color: "#DC143C" },
];
