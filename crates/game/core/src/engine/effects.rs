//! Applies a started action's [`Effect`] to the world.
//!
//! Every target is looked up again here by id. Anything that went away
//! between resolution and execution turns the effect into a no-op with a
//! warning, never a panic.
//!
//! Inventory effects narrate themselves: the line is produced only once the
//! bookkeeping succeeded, so a later intent that moved the player or spent
//! the item first leaves the action silent.

use std::time::Duration;

use tracing::{debug, warn};

use super::TurnScheduler;
use crate::action::{Action, Effect};
use crate::combat::melee;
use crate::config::GameConfig;
use crate::state::{Direction, Equipped, ItemId, ItemKind, UseEffect, World};

/// Applies `effect`. Returns the narration for the running action when the
/// effect decides it, `None` to keep the queued message.
pub(crate) fn apply(
    effect: Effect,
    world: &mut World,
    scheduler: &mut TurnScheduler,
    config: &GameConfig,
) -> Option<String> {
    match effect {
        Effect::None => None,
        Effect::Damage {
            target,
            amount,
            from,
        } => {
            melee::land_blow(world, scheduler, config, target, amount, from);
            None
        }
        Effect::Launch(projectile) => {
            world.projectile = Some(projectile);
            None
        }
        Effect::Land { item, rest, struck } => {
            let from = world
                .projectile
                .take()
                .map_or(Direction::None, |projectile| projectile.direction);
            if let Some((target, amount)) = struck {
                melee::land_blow(world, scheduler, config, target, amount, from);
            }
            debug!(item = %item.id, %rest, "thrown item at rest");
            world.place_item(item, rest);
            None
        }
        Effect::PickUp { item } => pick_up(world, item),
        Effect::Drop { item } => drop_item(world, item),
        Effect::Equip { item } => equip(world, item),
        Effect::Use { item } => use_item(world, scheduler, item),
    }
}

fn pick_up(world: &mut World, id: ItemId) -> Option<String> {
    let position = world.player.position;
    if world
        .ground_item(id)
        .is_none_or(|ground| ground.position != position)
    {
        warn!(item = %id, "pick up target is no longer underfoot");
        return None;
    }
    let ground = world.take_item(id)?;
    let line = format!("You pick up the {}.", ground.item.name);
    if let Err(item) = world.player.inventory.insert(ground.item) {
        warn!(item = %id, "pack filled before pick up resolved");
        world.place_item(item, position);
        return None;
    }
    Some(line)
}

fn drop_item(world: &mut World, id: ItemId) -> Option<String> {
    let Some(item) = world.player.inventory.remove(id) else {
        warn!(item = %id, "drop target left the pack");
        return None;
    };
    world.player.unequip(id);
    let line = format!("You drop the {}.", item.name);
    let position = world.player.position;
    world.place_item(item, position);
    Some(line)
}

fn equip(world: &mut World, id: ItemId) -> Option<String> {
    let Some((kind, name)) = world
        .player
        .inventory
        .get(id)
        .map(|item| (item.kind, item.name.clone()))
    else {
        warn!(item = %id, "equip target left the pack");
        return None;
    };
    let player = &mut world.player;
    match kind {
        ItemKind::Weapon { attack } => {
            player.weapon = Some(Equipped {
                item: id,
                bonus: attack,
            });
            Some(format!("You wield the {name}."))
        }
        ItemKind::Armor { defense } => {
            player.armor = Some(Equipped {
                item: id,
                bonus: defense,
            });
            Some(format!("You put on the {name}."))
        }
        ItemKind::Consumable(_) | ItemKind::Throwable { .. } => {
            warn!(item = %id, "item cannot be equipped");
            None
        }
    }
}

/// Consumes the item and applies its use effect.
fn use_item(world: &mut World, scheduler: &mut TurnScheduler, id: ItemId) -> Option<String> {
    let Some(found) = world.player.inventory.get(id) else {
        warn!(item = %id, "use target left the pack");
        return None;
    };
    let ItemKind::Consumable(effect) = found.kind else {
        warn!(item = %id, "item has no use effect");
        return None;
    };
    let line = format!("You use the {}.", found.name);
    world.player.inventory.remove(id);

    let player = &mut world.player;
    let result = match effect {
        UseEffect::Heal(amount) => {
            let healed = player.health.heal(amount);
            format!("You recover {healed} health.")
        }
        UseEffect::Strengthen(amount) => {
            player.power = player.power.saturating_add(amount as i32);
            "You feel stronger.".to_string()
        }
        UseEffect::Fortify(amount) => {
            player.health.raise_maximum(amount);
            player.health.heal(amount);
            "You feel hardier.".to_string()
        }
    };
    debug!(item = %id, ?effect, health = player.health.current(), "item used");
    scheduler.enqueue(Action::narrate(Duration::ZERO, result).non_blocking());
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Grid;
    use crate::state::{Player, PlayerStats, Position};

    fn world() -> World {
        let grid = Grid::from_rows(&["#####", "#...#", "#####"]).unwrap();
        World::new(grid, Player::new(Position::new(1, 1), PlayerStats::default()))
    }

    #[test]
    fn heal_is_clamped_to_maximum() {
        let config = GameConfig::new();
        let mut world = world();
        let mut scheduler = TurnScheduler::new(&config);
        world.player.health.damage(4);
        let potion = world.create_item("potion", ItemKind::Consumable(UseEffect::Heal(50)));
        let id = potion.id;
        world.player.inventory.insert(potion).unwrap();

        let line = apply(Effect::Use { item: id }, &mut world, &mut scheduler, &config);
        assert_eq!(line.as_deref(), Some("You use the potion."));
        assert_eq!(world.player.health.current(), world.player.health.maximum());
        assert!(!world.player.inventory.contains(id));
        assert_eq!(scheduler.head().map(Action::message), Some("You recover 4 health."));
    }

    #[test]
    fn damage_on_missing_enemy_is_a_no_op() {
        let config = GameConfig::new();
        let mut world = world();
        let mut scheduler = TurnScheduler::new(&config);

        let line = apply(
            Effect::Damage {
                target: crate::state::EntityId(42),
                amount: 9,
                from: Direction::Left,
            },
            &mut world,
            &mut scheduler,
            &config,
        );
        assert_eq!(line, None);
        assert!(scheduler.queue().is_empty());
    }

    #[test]
    fn dropped_equipment_is_unequipped() {
        let config = GameConfig::new();
        let mut world = world();
        let mut scheduler = TurnScheduler::new(&config);
        let sword = world.create_item("sword", ItemKind::Weapon { attack: 2 });
        let id = sword.id;
        world.player.inventory.insert(sword).unwrap();

        let line = apply(Effect::Equip { item: id }, &mut world, &mut scheduler, &config);
        assert_eq!(line.as_deref(), Some("You wield the sword."));
        assert!(world.player.weapon.is_some());

        let line = apply(Effect::Drop { item: id }, &mut world, &mut scheduler, &config);
        assert_eq!(line.as_deref(), Some("You drop the sword."));
        assert!(world.player.weapon.is_none());
        assert_eq!(world.items_at(Position::new(1, 1)).count(), 1);
    }

    #[test]
    fn pick_up_away_from_the_item_stays_silent() {
        let config = GameConfig::new();
        let mut world = world();
        let mut scheduler = TurnScheduler::new(&config);
        let rock = world.spawn_item("rock", ItemKind::Throwable { damage: 1 }, Position::new(1, 1));
        world.player.position = Position::new(2, 1);

        let line = apply(Effect::PickUp { item: rock }, &mut world, &mut scheduler, &config);
        assert_eq!(line, None);
        assert!(!world.player.inventory.contains(rock));
        assert_eq!(world.items_at(Position::new(1, 1)).count(), 1);
    }
}
