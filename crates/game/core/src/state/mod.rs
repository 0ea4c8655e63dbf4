//! Mutable game state: combatants, items, narration history.
//!
//! Everything here is plain data plus the bookkeeping that keeps its
//! invariants (clamped health, stable ids, bounded pack). Rules that decide
//! *when* state changes live in [`crate::combat`], [`crate::ai`] and
//! [`crate::engine`].

mod bestiary;
mod combatant;
mod common;
mod items;
mod log;
mod world;

pub use bestiary::{EnemyKind, EnemyTemplate, SpecialAttack, SpecialEffect};
pub use combatant::{AnimationSignal, Combatant, Enemy, Equipped, Player, PlayerStats};
pub use common::{Direction, EntityId, Health, ItemId, Position};
pub use items::{GroundItem, Inventory, Item, ItemKind, UseEffect};
pub use log::MessageLog;
pub use world::{GameStatus, World};
