//! Fixed demo dungeon: two rooms joined by a corridor.
use anyhow::Result;
use crawl_core::{
    EnemyKind, Grid, ItemKind, Player, PlayerStats, Position, RandomSource, Rect, UseEffect, World,
};
use tracing::debug;

const LAYOUT: [&str; 7] = [
    "########################",
    "#......#########.......#",
    "#......#########.......#",
    "#......................#",
    "#......#########.......#",
    "#......#########.......#",
    "########################",
];

pub const PLAYER_START: Position = Position::new(2, 3);

const ENEMY_SPAWNS: [Position; 3] = [
    Position::new(11, 3),
    Position::new(19, 2),
    Position::new(20, 4),
];

/// Builds the demo world, rolling enemy kinds from `rng`.
pub fn build_world(rng: &mut (impl RandomSource + ?Sized)) -> Result<World> {
    let grid = Grid::from_rows(&LAYOUT)?
        .with_room(Rect::new(1, 1, 6, 5))
        .with_room(Rect::new(16, 1, 7, 5));
    let mut world = World::new(grid, Player::new(PLAYER_START, PlayerStats::default()));

    for position in ENEMY_SPAWNS {
        let kind = EnemyKind::roll(rng);
        let id = world.spawn_enemy(kind, position);
        debug!(%kind, %position, ?id, "spawned enemy");
    }

    world.spawn_item(
        "healing potion",
        ItemKind::Consumable(UseEffect::Heal(15)),
        Position::new(3, 2),
    );
    world.spawn_item("short sword", ItemKind::Weapon { attack: 3 }, Position::new(4, 4));
    world.spawn_item("leather armor", ItemKind::Armor { defense: 2 }, Position::new(5, 3));
    world.spawn_item(
        "tonic of vigor",
        ItemKind::Consumable(UseEffect::Fortify(5)),
        Position::new(17, 3),
    );

    let dagger = world.create_item("throwing dagger", ItemKind::Throwable { damage: 2 });
    if world.player.inventory.insert(dagger).is_err() {
        debug!("starting pack is full");
    }

    Ok(world)
}
