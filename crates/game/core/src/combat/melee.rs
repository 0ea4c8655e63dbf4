//! Melee blows in both directions and the defeat life cycle.

use tracing::{debug, info};

use super::{damage, leveling};
use crate::action::{Action, Effect};
use crate::config::GameConfig;
use crate::engine::TurnScheduler;
use crate::env::RandomSource;
use crate::state::{Combatant, Direction, EntityId, GameStatus, SpecialEffect, World};

/// Result of a player swing, known as soon as the intent resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrikeOutcome {
    /// Damage is queued; it lands when the action reaches the head.
    Hit { target: EntityId, amount: u32 },
    /// Nothing there. An idle action keeps the pacing identical.
    Miss,
}

/// Swings at the tile one step away in `direction`.
///
/// Turns the player to face the swing and starts the swing animation either
/// way. A hit enqueues the narrated damage; a miss enqueues a silent action of
/// the default duration.
pub fn player_strike(
    world: &mut World,
    scheduler: &mut TurnScheduler,
    rng: &mut (impl RandomSource + ?Sized),
    config: &GameConfig,
    direction: Direction,
) -> StrikeOutcome {
    world.player.facing = direction;
    world.player.swing.start(direction, config.durations.animation);

    let target = world.player.position.step(direction);
    let Some(enemy) = world.enemy_at(target) else {
        debug!(%target, "swing at empty tile");
        scheduler.enqueue(Action::idle(config.durations.default));
        return StrikeOutcome::Miss;
    };

    let amount = damage::melee_damage(&world.player, enemy, rng);
    let message = if amount == 0 {
        format!("You hit the {} but do no damage.", enemy.name())
    } else {
        format!("You hit the {} for {amount} damage.", enemy.name())
    };
    let target = enemy.id;

    scheduler.enqueue(Action::new(
        config.durations.strike,
        message,
        Effect::Damage {
            target,
            amount,
            from: direction,
        },
    ));
    StrikeOutcome::Hit { target, amount }
}

/// Applies a queued blow to an enemy, looked up by id.
///
/// On defeat this enqueues the narration, removes the enemy, awards its
/// experience and runs one level-up check. The removal is what guarantees
/// the award happens once: a second blow on the same id finds nothing.
pub(crate) fn land_blow(
    world: &mut World,
    scheduler: &mut TurnScheduler,
    config: &GameConfig,
    target: EntityId,
    amount: u32,
    from: Direction,
) {
    let Some(enemy) = world.enemy_mut(target) else {
        debug!(%target, "blow on an enemy that is already gone");
        return;
    };

    let dealt = enemy.health.damage(amount);
    enemy.struck.start(from, config.durations.animation);
    debug!(%target, dealt, remaining = enemy.health.current(), "blow landed");

    if !enemy.is_defeated() {
        return;
    }

    let name = enemy.name();
    scheduler.enqueue(Action::narrate(
        config.durations.defeat,
        format!("The {name} is defeated!"),
    ));

    let Some(defeated) = world.remove_enemy(target) else {
        return;
    };
    info!(%target, kind = name, experience = defeated.experience, "enemy defeated");

    if let Some(level) = leveling::award_experience(&mut world.player, defeated.experience, config)
    {
        info!(level, "player levelled up");
        scheduler.enqueue(
            Action::narrate(config.durations.level_up, format!("You reached level {level}!"))
                .non_blocking(),
        );
    }
}

/// Adjacent enemy hits the player immediately.
///
/// The special attack roll is drawn before the jitter. Returns the damage
/// actually applied, or `None` if `id` names no live enemy.
pub fn enemy_strike(
    world: &mut World,
    scheduler: &mut TurnScheduler,
    rng: &mut (impl RandomSource + ?Sized),
    config: &GameConfig,
    id: EntityId,
) -> Option<u32> {
    let enemy = world.enemy(id)?;
    let name = enemy.name();
    let attack = enemy.attack_power();
    let facing = Direction::towards(enemy.position, world.player.position);

    let special = enemy
        .special
        .filter(|special| rng.chance(special.percent))
        .map(|special| special.effect);
    let defense = match special {
        Some(SpecialEffect::Pierce) => 0,
        _ => world.player.defense_power(),
    };
    let amount = damage::net_damage(attack, defense, rng.jitter());
    let dealt = world.player.health.damage(amount);

    if let Some(enemy) = world.enemy_mut(id) {
        enemy.facing = facing;
        enemy.strike.start(facing, config.durations.animation);
        if let Some(SpecialEffect::Drain(amount)) = special {
            enemy.health.heal(amount);
        }
    }
    debug!(%id, dealt, ?special, player_health = world.player.health.current(), "enemy strike");

    if world.player.is_defeated() && world.is_playing() {
        world.status = GameStatus::Defeated;
        info!(killer = name, turn = world.turn, "player defeated");
        scheduler.enqueue(Action::narrate(
            config.durations.player_defeat,
            format!("You were slain by the {name}."),
        ));
    }

    Some(dealt)
}
