//! Enemy stepping: greedy chase and random wander.

use crate::config::GameConfig;
use crate::env::RandomSource;
use crate::state::{Direction, EntityId, Position, World};

fn relocate(world: &mut World, id: EntityId, to: Position, facing: Direction) {
    if let Some(enemy) = world.enemy_mut(id) {
        enemy.position = to;
        enemy.facing = facing;
    }
}

/// Greedy step toward the player.
///
/// If a diagonal is wanted but its tile is blocked or a wall corner is in
/// the way, one axis is dropped on a coin flip. Otherwise the diagonal wins
/// when free; failing that the horizontal step, then the vertical one.
/// Returns whether the enemy moved.
pub fn move_towards_player(
    world: &mut World,
    rng: &mut (impl RandomSource + ?Sized),
    id: EntityId,
) -> bool {
    let Some(enemy) = world.enemy(id) else {
        return false;
    };
    let origin = enemy.position;
    let (dx, dy) = origin.delta_to(world.player.position);
    let (mut sx, mut sy) = (dx.signum(), dy.signum());

    if sx != 0 && sy != 0 {
        let diagonal = Direction::from_delta(sx, sy);
        if world.grid.blocks_movement(origin.offset(sx, sy))
            || world.grid.cuts_corner(origin, diagonal)
        {
            if rng.coin_flip() {
                sx = 0;
            } else {
                sy = 0;
            }
        }
    }

    let candidates = [(sx, sy), (sx, 0), (0, sy)];
    for (cx, cy) in candidates {
        if cx == 0 && cy == 0 {
            continue;
        }
        let direction = Direction::from_delta(cx, cy);
        let target = origin.offset(cx, cy);
        if world.grid.cuts_corner(origin, direction) || !world.can_enter(target) {
            continue;
        }
        relocate(world, id, target, direction);
        return true;
    }
    false
}

/// Random cardinal step using the enemy's pending wander heading.
///
/// The first attempt keeps a pending heading, or rolls one if there is none;
/// each later attempt rolls again. A successful step clears the heading. After
/// `wander_attempts` failures the enemy stays put and keeps the last roll.
pub fn move_randomly(
    world: &mut World,
    rng: &mut (impl RandomSource + ?Sized),
    config: &GameConfig,
    id: EntityId,
) -> bool {
    let Some(enemy) = world.enemy(id) else {
        return false;
    };
    let origin = enemy.position;
    let mut heading = enemy.wander;

    for attempt in 0..config.wander_attempts {
        if attempt > 0 || heading.is_none() {
            heading = rng.cardinal();
        }
        let target = origin.step(heading);
        if world.can_enter(target) {
            relocate(world, id, target, heading);
            if let Some(enemy) = world.enemy_mut(id) {
                enemy.wander = Direction::None;
            }
            return true;
        }
    }

    if let Some(enemy) = world.enemy_mut(id) {
        enemy.wander = heading;
    }
    false
}
