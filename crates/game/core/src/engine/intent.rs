use std::time::Duration;

use tracing::debug;

use super::TurnScheduler;
use crate::action::{Action, Effect};
use crate::combat::{self, StrikeOutcome, Trajectory};
use crate::config::GameConfig;
use crate::env::RandomSource;
use crate::error::IntentError;
use crate::state::{Direction, Item, ItemId, ItemKind, Position, World};

/// Something the player wants to do this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerIntent {
    /// Step one tile; bumping into an enemy attacks it instead.
    Move(Direction),
    /// Swing in the current facing direction.
    Attack,
    /// Stand still for a turn.
    Wait,
    /// Pick up the first item underfoot.
    PickUp,
    Drop(ItemId),
    Equip(ItemId),
    Use(ItemId),
    Throw { item: ItemId, direction: Direction },
}

/// How an accepted intent resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntentOutcome {
    Moved { to: Position },
    Struck(StrikeOutcome),
    Waited,
    Thrown(Trajectory),
    /// Inventory bookkeeping queued; does not spend a turn.
    Handled,
}

impl IntentOutcome {
    /// Whether enemies get to act once the queue lets input through again.
    pub fn consumes_turn(&self) -> bool {
        !matches!(self, IntentOutcome::Handled)
    }
}

pub(super) fn resolve(
    intent: PlayerIntent,
    world: &mut World,
    scheduler: &mut TurnScheduler,
    rng: &mut (impl RandomSource + ?Sized),
    config: &GameConfig,
) -> Result<IntentOutcome, IntentError> {
    match intent {
        PlayerIntent::Move(direction) => step(world, scheduler, rng, config, direction),
        PlayerIntent::Attack => {
            let facing = world.player.facing;
            if facing.is_none() {
                return Err(IntentError::NoDirection);
            }
            Ok(IntentOutcome::Struck(combat::player_strike(
                world, scheduler, rng, config, facing,
            )))
        }
        PlayerIntent::Wait => Ok(IntentOutcome::Waited),
        PlayerIntent::PickUp => pick_up(world, scheduler, config),
        PlayerIntent::Drop(item) => {
            pack_item(world, item)?;
            scheduler.enqueue(bookkeeping(config.durations.drop, Effect::Drop { item }));
            Ok(IntentOutcome::Handled)
        }
        PlayerIntent::Equip(item) => {
            if !pack_item(world, item)?.kind.is_equippable() {
                return Err(IntentError::NotEquippable(item));
            }
            scheduler.enqueue(bookkeeping(config.durations.equip, Effect::Equip { item }));
            Ok(IntentOutcome::Handled)
        }
        PlayerIntent::Use(item) => {
            if !matches!(pack_item(world, item)?.kind, ItemKind::Consumable(_)) {
                return Err(IntentError::NotUsable(item));
            }
            scheduler.enqueue(bookkeeping(config.durations.use_item, Effect::Use { item }));
            Ok(IntentOutcome::Handled)
        }
        PlayerIntent::Throw { item, direction } => {
            combat::throw_item(world, scheduler, rng, config, item, direction)
                .map(IntentOutcome::Thrown)
        }
    }
}

/// Walks one tile, or attacks whatever stands there.
///
/// The player turns to face `direction` even when the step is refused.
/// Diagonal steps past a wall corner are refused like walls.
fn step(
    world: &mut World,
    scheduler: &mut TurnScheduler,
    rng: &mut (impl RandomSource + ?Sized),
    config: &GameConfig,
    direction: Direction,
) -> Result<IntentOutcome, IntentError> {
    if direction.is_none() {
        return Err(IntentError::NoDirection);
    }
    world.player.facing = direction;

    let origin = world.player.position;
    let destination = origin.step(direction);
    if world.enemy_at(destination).is_some() {
        return Ok(IntentOutcome::Struck(combat::player_strike(
            world, scheduler, rng, config, direction,
        )));
    }

    if world.grid.cuts_corner(origin, direction) || !world.can_enter(destination) {
        return Err(IntentError::Blocked { destination });
    }

    world.player.position = destination;
    debug!(from = %origin, to = %destination, "player moved");
    Ok(IntentOutcome::Moved { to: destination })
}

fn pick_up(
    world: &mut World,
    scheduler: &mut TurnScheduler,
    config: &GameConfig,
) -> Result<IntentOutcome, IntentError> {
    let position = world.player.position;
    let Some(ground) = world.items_at(position).next() else {
        return Err(IntentError::NothingToPickUp { position });
    };
    if world.player.inventory.is_full() {
        return Err(IntentError::InventoryFull);
    }

    let item = ground.item.id;
    scheduler.enqueue(bookkeeping(config.durations.pickup, Effect::PickUp { item }));
    Ok(IntentOutcome::Handled)
}

/// Non-blocking inventory action; its effect supplies the narration once it
/// has actually happened.
fn bookkeeping(duration: Duration, effect: Effect) -> Action {
    Action::new(duration, String::new(), effect).non_blocking()
}

fn pack_item(world: &World, id: ItemId) -> Result<&Item, IntentError> {
    world
        .player
        .inventory
        .get(id)
        .ok_or(IntentError::UnknownItem(id))
}
