//! Scripted intent feed standing in for keyboard input.
//!
//! The pilot looks at the world once per accepted turn and picks the first
//! applicable intent in priority order: heal when low, fight what is
//! adjacent, loot, gear up, throw at a lined-up enemy, then walk towards the
//! nearest item or enemy.
use crawl_core::combat::resolve_trajectory;
use crawl_core::{
    Direction, GameConfig, Impact, ItemKind, PlayerIntent, Position, UseEffect, World,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct Autopilot;

impl Autopilot {
    pub fn new() -> Self {
        Self
    }

    pub fn next_intent(&self, world: &World, config: &GameConfig) -> PlayerIntent {
        heal_when_low(world)
            .or_else(|| strike_adjacent(world))
            .or_else(|| pick_up(world))
            .or_else(|| gear_up(world))
            .or_else(|| throw_at_enemy(world, config))
            .or_else(|| walk_to_target(world))
            .unwrap_or(PlayerIntent::Wait)
    }
}

fn heal_when_low(world: &World) -> Option<PlayerIntent> {
    let health = world.player.health;
    if health.current() * 3 > health.maximum() {
        return None;
    }
    world
        .player
        .inventory
        .iter()
        .find(|item| matches!(item.kind, ItemKind::Consumable(UseEffect::Heal(_))))
        .map(|item| PlayerIntent::Use(item.id))
}

fn strike_adjacent(world: &World) -> Option<PlayerIntent> {
    let from = world.player.position;
    world
        .enemies()
        .filter(|enemy| from.is_adjacent(enemy.position))
        .map(|enemy| Direction::towards(from, enemy.position))
        .find(|direction| !world.grid.cuts_corner(from, *direction))
        .map(PlayerIntent::Move)
}

fn pick_up(world: &World) -> Option<PlayerIntent> {
    let underfoot = world.items_at(world.player.position).next().is_some();
    (underfoot && !world.player.inventory.is_full()).then_some(PlayerIntent::PickUp)
}

fn gear_up(world: &World) -> Option<PlayerIntent> {
    let player = &world.player;
    player.inventory.iter().find_map(|item| match item.kind {
        ItemKind::Weapon { attack } if player.weapon.is_none_or(|slot| slot.bonus < attack) => {
            Some(PlayerIntent::Equip(item.id))
        }
        ItemKind::Armor { defense } if player.armor.is_none_or(|slot| slot.bonus < defense) => {
            Some(PlayerIntent::Equip(item.id))
        }
        ItemKind::Consumable(UseEffect::Strengthen(_) | UseEffect::Fortify(_)) => {
            Some(PlayerIntent::Use(item.id))
        }
        _ => None,
    })
}

fn throw_at_enemy(world: &World, config: &GameConfig) -> Option<PlayerIntent> {
    let item = world
        .player
        .inventory
        .iter()
        .find(|item| matches!(item.kind, ItemKind::Throwable { .. }))?;
    let from = world.player.position;

    world.enemies().find_map(|enemy| {
        let direction = aligned_direction(from, enemy.position)?;
        let trajectory = resolve_trajectory(world, from, direction, config.throw_range);
        (trajectory.impact == Impact::Enemy(enemy.id)).then_some(PlayerIntent::Throw {
            item: item.id,
            direction,
        })
    })
}

/// Direction along a row, column or diagonal from `from` to `to`, if any.
fn aligned_direction(from: Position, to: Position) -> Option<Direction> {
    let (dx, dy) = from.delta_to(to);
    let aligned = dx == 0 || dy == 0 || dx.abs() == dy.abs();
    let direction = Direction::from_delta(dx, dy);
    (aligned && !direction.is_none()).then_some(direction)
}

fn walk_to_target(world: &World) -> Option<PlayerIntent> {
    let from = world.player.position;
    let item_targets = world
        .items()
        .filter(|_| !world.player.inventory.is_full())
        .map(|ground| ground.position);
    let target = item_targets
        .chain(world.enemies().map(|enemy| enemy.position))
        .filter(|position| *position != from)
        .min_by_key(|position| from.chebyshev(*position))?;

    let (dx, dy) = from.delta_to(target);
    [
        Direction::from_delta(dx, dy),
        Direction::from_delta(dx, 0),
        Direction::from_delta(0, dy),
    ]
    .into_iter()
    .filter(|direction| !direction.is_none())
    .find(|direction| {
        let next = from.step(*direction);
        !world.grid.cuts_corner(from, *direction)
            && (world.can_enter(next) || world.enemy_at(next).is_some())
    })
    .map(PlayerIntent::Move)
}
