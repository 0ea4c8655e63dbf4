//! Damage formulas.
//!
//! ```text
//! player → enemy:  attack_power + power + level - defense + jitter
//! enemy  → player: attack_power - defense + jitter
//! net = max(net, 0)
//! ```
//!
//! `jitter` is a uniform draw from `{-1, 0, 1}`.

use crate::env::RandomSource;
use crate::state::{Combatant, Enemy, Player};

/// Clamps the raw difference at zero.
pub fn net_damage(offense: i32, defense: i32, jitter: i32) -> u32 {
    offense
        .saturating_sub(defense)
        .saturating_add(jitter)
        .max(0) as u32
}

/// Everything the player brings to a blow before the defender's armor.
pub fn player_offense(player: &Player) -> i32 {
    player.attack_power() + player.power + player.level as i32
}

pub fn melee_damage(
    attacker: &Player,
    defender: &Enemy,
    rng: &mut (impl RandomSource + ?Sized),
) -> u32 {
    net_damage(player_offense(attacker), defender.defense_power(), rng.jitter())
}

/// Thrown-item hit: the melee formula plus the item's own bonus.
pub fn ranged_damage(
    attacker: &Player,
    defender: &Enemy,
    bonus: i32,
    rng: &mut (impl RandomSource + ?Sized),
) -> u32 {
    net_damage(
        player_offense(attacker) + bonus,
        defender.defense_power(),
        rng.jitter(),
    )
}
