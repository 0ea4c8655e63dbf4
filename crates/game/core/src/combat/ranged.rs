//! Thrown items: trajectory ray-march and throw bookkeeping.

use std::time::Duration;

use tracing::debug;

use super::damage;
use crate::action::{Action, Effect};
use crate::config::GameConfig;
use crate::engine::TurnScheduler;
use crate::env::RandomSource;
use crate::error::IntentError;
use crate::state::{Direction, EntityId, ItemId, Position, World};

/// In-flight item the renderer draws while the throw action is at the head.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projectile {
    pub origin: Position,
    pub direction: Direction,
    pub duration: Duration,
}

/// What stopped a thrown item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Impact {
    /// Blocked by a wall; the item rests on the last open tile.
    Wall,
    /// Hit an enemy and dropped on its tile.
    Enemy(EntityId),
    /// Ran out of range.
    Landed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trajectory {
    pub origin: Position,
    pub direction: Direction,
    pub rest: Position,
    pub impact: Impact,
}

/// Marches from `origin` one tile at a time for up to `range` tiles.
///
/// A wall at step `i` leaves the item at step `i - 1`; an enemy at step `i`
/// takes the hit and the item rests under it. Off-grid tiles count as walls.
pub fn resolve_trajectory(
    world: &World,
    origin: Position,
    direction: Direction,
    range: u32,
) -> Trajectory {
    let mut rest = origin;
    let mut impact = Impact::Landed;

    for _ in 0..range {
        let next = rest.step(direction);
        if world.grid.is_wall(next) {
            impact = Impact::Wall;
            break;
        }
        rest = next;
        if let Some(enemy) = world.enemy_at(next) {
            impact = Impact::Enemy(enemy.id);
            break;
        }
    }

    let trajectory = Trajectory {
        origin,
        direction,
        rest,
        impact,
    };
    debug!(?trajectory, "resolved throw");
    trajectory
}

/// Throws a pack item in `direction`.
///
/// The item leaves the inventory (and any equipment slot) exactly once,
/// before anything is queued. Two actions follow: the flight, which shows the
/// projectile, then a zero-duration landing that applies any hit and puts the
/// item on the floor.
pub fn throw_item(
    world: &mut World,
    scheduler: &mut TurnScheduler,
    rng: &mut (impl RandomSource + ?Sized),
    config: &GameConfig,
    item: ItemId,
    direction: Direction,
) -> Result<Trajectory, IntentError> {
    if direction.is_none() {
        return Err(IntentError::NoDirection);
    }

    let origin = world.player.position;
    let trajectory = resolve_trajectory(world, origin, direction, config.throw_range);

    let thrown = world
        .player
        .inventory
        .remove(item)
        .ok_or(IntentError::UnknownItem(item))?;
    world.player.unequip(item);
    world.player.facing = direction;

    let struck = match trajectory.impact {
        Impact::Enemy(target) => world.enemy(target).map(|enemy| {
            let amount =
                damage::ranged_damage(&world.player, enemy, thrown.kind.thrown_bonus(), rng);
            (target, enemy.name(), amount)
        }),
        Impact::Wall | Impact::Landed => None,
    };

    let landing = match (trajectory.impact, struck) {
        (_, Some((_, name, amount))) => {
            format!("The {} hits the {name} for {amount} damage.", thrown.name)
        }
        (Impact::Wall, None) => format!("The {} clatters against the wall.", thrown.name),
        _ => format!("The {} lands on the floor.", thrown.name),
    };

    scheduler.enqueue(Action::new(
        config.durations.throw,
        format!("You throw the {}.", thrown.name),
        Effect::Launch(Projectile {
            origin,
            direction,
            duration: config.durations.throw,
        }),
    ));
    scheduler.enqueue(Action::new(
        Duration::ZERO,
        landing,
        Effect::Land {
            item: thrown,
            rest: trajectory.rest,
            struck: struck.map(|(target, _, amount)| (target, amount)),
        },
    ));

    Ok(trajectory)
}
