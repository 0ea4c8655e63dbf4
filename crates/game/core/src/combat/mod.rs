//! Combat resolution.
//!
//! Player blows are paced: the hit is computed when the intent resolves, but
//! the damage itself rides on an [`Effect::Damage`](crate::Effect) so it lands
//! when the scheduler reaches it. Enemy retaliation is synchronous and never
//! touches the queue unless it kills the player.
//!
//! # Core Functions
//!
//! - [`player_strike`]: melee swing in a direction, hit or miss
//! - [`enemy_strike`]: adjacent enemy hits the player directly
//! - [`resolve_trajectory`]: ray-march for thrown items
//! - [`throw_item`]: pulls an item from the pack and queues its flight
//! - [`award_experience`]: experience plus a single level-up check

pub mod damage;
pub mod leveling;
pub mod melee;
pub mod ranged;

pub use damage::{melee_damage, net_damage, ranged_damage};
pub use leveling::{award_experience, check_level_up};
pub use melee::{StrikeOutcome, enemy_strike, player_strike};
pub use ranged::{Impact, Projectile, Trajectory, resolve_trajectory, throw_item};
