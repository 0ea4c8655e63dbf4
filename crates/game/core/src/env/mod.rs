//! Inputs owned by collaborators outside the simulation: the generated tile
//! grid and the process-wide random source.

mod map;
mod rng;

pub use map::{Grid, GridError, Rect, Room, RoomId, Tile, TileFlags, TileKind};
pub use rng::{PcgRng, RandomSource, ScriptedRng};
