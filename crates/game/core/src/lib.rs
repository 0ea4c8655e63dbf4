//! Turn-paced action scheduling, combat and enemy AI for a grid dungeon crawler.
//!
//! `crawl-core` turns discrete player and enemy intentions into a strictly
//! ordered, time-sliced sequence of [`Action`]s so a frame-driven host can show
//! a turn-based game with visible pacing. The host calls [`GameEngine::tick`]
//! at a fixed rate and only submits new intents while
//! [`GameEngine::can_accept_input`] is true.
//!
//! Map generation, rendering and input polling live outside this crate; they
//! hand in a [`Grid`] and read back positions, health, narration and timers.
pub mod action;
pub mod ai;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{Action, ActionQueue, Effect};
pub use ai::{Decision, EnemyController};
pub use combat::{Impact, Projectile, StrikeOutcome, Trajectory};
pub use config::{ActionDurations, GameConfig};
pub use engine::{GameEngine, IntentOutcome, PlayerIntent, SchedulerStep, TickReport, TurnScheduler};
pub use env::{
    Grid, GridError, PcgRng, RandomSource, Rect, Room, RoomId, ScriptedRng, Tile, TileFlags,
    TileKind,
};
pub use error::{ErrorSeverity, IntentError};
pub use state::{
    AnimationSignal, Combatant, Direction, Enemy, EnemyKind, EntityId, GameStatus, GroundItem,
    Health, Inventory, Item, ItemId, ItemKind, MessageLog, Player, PlayerStats, Position,
    SpecialAttack, SpecialEffect, UseEffect, World,
};
