use bitflags::bitflags;

use crate::state::{Direction, Position};

bitflags! {
    /// Per-tile collision and line-of-sight flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TileFlags: u8 {
        const BLOCKS_MOVEMENT = 1 << 0;
        const BLOCKS_SIGHT    = 1 << 1;
    }
}

/// Tile type discriminator supplied by the dungeon generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    Floor,
    Corridor,
    Door,
    Wall,
    /// Solid rock outside any carved area.
    Void,
}

impl TileKind {
    pub const fn default_flags(self) -> TileFlags {
        match self {
            TileKind::Floor | TileKind::Corridor | TileKind::Door => TileFlags::empty(),
            TileKind::Wall | TileKind::Void => {
                TileFlags::BLOCKS_MOVEMENT.union(TileFlags::BLOCKS_SIGHT)
            }
        }
    }

    fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(TileKind::Floor),
            ',' => Some(TileKind::Corridor),
            '+' => Some(TileKind::Door),
            '#' => Some(TileKind::Wall),
            ' ' => Some(TileKind::Void),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    kind: TileKind,
    flags: TileFlags,
}

impl Tile {
    pub const fn new(kind: TileKind) -> Self {
        Self {
            kind,
            flags: kind.default_flags(),
        }
    }

    pub const fn with_flags(kind: TileKind, flags: TileFlags) -> Self {
        Self { kind, flags }
    }

    pub const fn floor() -> Self {
        Self::new(TileKind::Floor)
    }

    pub const fn wall() -> Self {
        Self::new(TileKind::Wall)
    }

    pub fn kind(self) -> TileKind {
        self.kind
    }

    pub fn flags(self) -> TileFlags {
        self.flags
    }

    pub fn blocks_movement(self) -> bool {
        self.flags.contains(TileFlags::BLOCKS_MOVEMENT)
    }

    pub fn blocks_sight(self) -> bool {
        self.flags.contains(TileFlags::BLOCKS_SIGHT)
    }

    pub fn is_wall(self) -> bool {
        matches!(self.kind, TileKind::Wall | TileKind::Void)
    }
}

/// Axis-aligned rectangle in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= self.x
            && position.y >= self.y
            && position.x < self.x + self.width as i32
            && position.y < self.y + self.height as i32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomId(pub u16);

/// Room produced by the generator; only used for the "same room" test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub id: RoomId,
    pub bounds: Rect,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid has no tiles")]
    Empty,

    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile glyph {glyph:?} at ({x}, {y})")]
    UnknownGlyph { glyph: char, x: usize, y: usize },
}

/// Read-only tile grid handed over by the dungeon generator.
///
/// Every lookup is bounds-checked; positions off the grid behave like solid
/// wall so neighbour scans at the perimeter never index out of range.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
    rooms: Vec<Room>,
}

impl Grid {
    pub fn filled(width: u32, height: u32, tile: Tile) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            width,
            height,
            tiles: vec![tile; width as usize * height as usize],
            rooms: Vec::new(),
        })
    }

    /// Parses an ASCII layout: `.` floor, `,` corridor, `+` door, `#` wall,
    /// space for void. Row 0 is the top of the map.
    pub fn from_rows(rows: &[&str]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |row| row.chars().count());
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let kind = TileKind::from_glyph(glyph)
                    .ok_or(GridError::UnknownGlyph { glyph, x, y })?;
                tiles.push(Tile::new(kind));
            }
        }

        Ok(Self {
            width: width as u32,
            height: rows.len() as u32,
            tiles,
            rooms: Vec::new(),
        })
    }

    pub fn with_room(mut self, bounds: Rect) -> Self {
        self.add_room(bounds);
        self
    }

    pub fn add_room(&mut self, bounds: Rect) -> RoomId {
        let id = RoomId(self.rooms.len() as u16);
        self.rooms.push(Room { id, bounds });
        id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }

    pub fn tile(&self, position: Position) -> Option<Tile> {
        self.index(position).map(|index| self.tiles[index])
    }

    /// Replaces a tile; returns `false` if `position` is off the grid.
    pub fn set_tile(&mut self, position: Position, tile: Tile) -> bool {
        match self.index(position) {
            Some(index) => {
                self.tiles[index] = tile;
                true
            }
            None => false,
        }
    }

    pub fn blocks_movement(&self, position: Position) -> bool {
        self.tile(position).is_none_or(Tile::blocks_movement)
    }

    pub fn blocks_sight(&self, position: Position) -> bool {
        self.tile(position).is_none_or(Tile::blocks_sight)
    }

    pub fn is_wall(&self, position: Position) -> bool {
        self.tile(position).is_none_or(Tile::is_wall)
    }

    /// A diagonal step from `from` squeezes past a wall corner: either
    /// orthogonal neighbour on the way is a wall. Always false for cardinals.
    pub fn cuts_corner(&self, from: Position, direction: Direction) -> bool {
        if !direction.is_diagonal() {
            return false;
        }
        let (dx, dy) = direction.delta();
        self.is_wall(from.offset(dx, 0)) || self.is_wall(from.offset(0, dy))
    }

    pub fn room_at(&self, position: Position) -> Option<RoomId> {
        self.rooms
            .iter()
            .find(|room| room.bounds.contains(position))
            .map(|room| room.id)
    }

    /// Both positions lie inside the same room.
    pub fn same_room(&self, a: Position, b: Position) -> bool {
        match (self.room_at(a), self.room_at(b)) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        }
    }
}
