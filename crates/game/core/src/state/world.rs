use std::time::Duration;

use super::{
    Enemy, EnemyKind, EntityId, GroundItem, Item, ItemId, ItemKind, MessageLog, Player, Position,
};
use crate::combat::Projectile;
use crate::env::Grid;

/// Whether the run is still going.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Playing,
    Defeated,
}

/// Everything the simulation mutates: the player, live enemies and floor items.
///
/// Enemies are kept in spawn order and addressed by [`EntityId`]; nothing
/// outside this type holds an index into the collection.
#[derive(Clone, Debug)]
pub struct World {
    pub grid: Grid,
    pub player: Player,
    enemies: Vec<Enemy>,
    items: Vec<GroundItem>,
    /// In-flight thrown item for the renderer, if any.
    pub projectile: Option<Projectile>,
    pub status: GameStatus,
    pub log: MessageLog,
    /// Completed player turns.
    pub turn: u64,
    next_enemy_id: u32,
    next_item_id: u32,
}

impl World {
    pub fn new(grid: Grid, player: Player) -> Self {
        Self {
            grid,
            player,
            enemies: Vec::new(),
            items: Vec::new(),
            projectile: None,
            status: GameStatus::Playing,
            log: MessageLog::default(),
            turn: 0,
            next_enemy_id: 1,
            next_item_id: 1,
        }
    }

    // ===== enemies =====

    /// Spawns an enemy from its template and returns its id.
    pub fn spawn_enemy(&mut self, kind: EnemyKind, position: Position) -> EntityId {
        let id = self.allocate_enemy_id();
        self.enemies.push(Enemy::new(id, kind, position));
        id
    }

    /// Spawns a customised enemy; `build` receives the template-stamped enemy.
    pub fn spawn_enemy_with(
        &mut self,
        kind: EnemyKind,
        position: Position,
        build: impl FnOnce(Enemy) -> Enemy,
    ) -> EntityId {
        let id = self.allocate_enemy_id();
        let mut enemy = build(Enemy::new(id, kind, position));
        enemy.id = id;
        self.enemies.push(enemy);
        id
    }

    fn allocate_enemy_id(&mut self) -> EntityId {
        let id = EntityId(self.next_enemy_id);
        self.next_enemy_id += 1;
        id
    }

    pub fn enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter()
    }

    pub fn enemy_ids(&self) -> Vec<EntityId> {
        self.enemies.iter().map(|enemy| enemy.id).collect()
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }

    pub fn enemy(&self, id: EntityId) -> Option<&Enemy> {
        self.enemies.iter().find(|enemy| enemy.id == id)
    }

    pub fn enemy_mut(&mut self, id: EntityId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|enemy| enemy.id == id)
    }

    pub fn enemy_at(&self, position: Position) -> Option<&Enemy> {
        self.enemies.iter().find(|enemy| enemy.position == position)
    }

    /// Removes an enemy from the live collection. Returns `None` if it was
    /// already gone, so callers can tell a first removal from a repeat.
    pub fn remove_enemy(&mut self, id: EntityId) -> Option<Enemy> {
        let index = self.enemies.iter().position(|enemy| enemy.id == id)?;
        Some(self.enemies.remove(index))
    }

    // ===== occupancy =====

    /// True if the player or any enemy stands on `position`.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.player.position == position || self.enemy_at(position).is_some()
    }

    /// Walkable and unoccupied.
    pub fn can_enter(&self, position: Position) -> bool {
        !self.grid.blocks_movement(position) && !self.is_occupied(position)
    }

    // ===== floor items =====

    /// Mints a fresh item id without placing anything.
    pub fn create_item(&mut self, name: impl Into<String>, kind: ItemKind) -> Item {
        let id = ItemId(self.next_item_id);
        self.next_item_id += 1;
        Item {
            id,
            name: name.into(),
            kind,
        }
    }

    /// Creates an item directly on the floor.
    pub fn spawn_item(
        &mut self,
        name: impl Into<String>,
        kind: ItemKind,
        position: Position,
    ) -> ItemId {
        let item = self.create_item(name, kind);
        let id = item.id;
        self.place_item(item, position);
        id
    }

    pub fn place_item(&mut self, item: Item, position: Position) {
        self.items.push(GroundItem { item, position });
    }

    pub fn items(&self) -> impl Iterator<Item = &GroundItem> {
        self.items.iter()
    }

    pub fn items_at(&self, position: Position) -> impl Iterator<Item = &GroundItem> {
        self.items.iter().filter(move |ground| ground.position == position)
    }

    pub fn ground_item(&self, id: ItemId) -> Option<&GroundItem> {
        self.items.iter().find(|ground| ground.item.id == id)
    }

    pub fn take_item(&mut self, id: ItemId) -> Option<GroundItem> {
        let index = self.items.iter().position(|ground| ground.item.id == id)?;
        Some(self.items.remove(index))
    }

    // ===== per-tick upkeep =====

    /// Counts down every animation window.
    pub fn advance_animations(&mut self, elapsed: Duration) {
        self.player.swing.advance(elapsed);
        for enemy in &mut self.enemies {
            enemy.strike.advance(elapsed);
            enemy.struck.advance(elapsed);
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PlayerStats;

    fn world() -> World {
        let grid = Grid::from_rows(&["#####", "#...#", "#...#", "#####"]).unwrap();
        World::new(grid, Player::new(Position::new(1, 1), PlayerStats::default()))
    }

    #[test]
    fn enemy_ids_are_never_reused() {
        let mut world = world();
        let first = world.spawn_enemy(EnemyKind::Slime, Position::new(2, 1));
        assert!(world.remove_enemy(first).is_some());
        assert!(world.remove_enemy(first).is_none());

        let second = world.spawn_enemy(EnemyKind::Bat, Position::new(2, 1));
        assert_ne!(first, second);
        assert!(world.enemy(first).is_none());
    }

    #[test]
    fn occupancy_counts_player_enemies_and_walls() {
        let mut world = world();
        world.spawn_enemy(EnemyKind::Goblin, Position::new(3, 2));

        assert!(world.is_occupied(Position::new(1, 1)));
        assert!(world.is_occupied(Position::new(3, 2)));
        assert!(world.can_enter(Position::new(2, 2)));
        assert!(!world.can_enter(Position::new(0, 0)));
        assert!(!world.can_enter(Position::new(-1, 7)));
    }

    #[test]
    fn floor_items_are_taken_by_id() {
        let mut world = world();
        let id = world.spawn_item("rock", ItemKind::Throwable { damage: 1 }, Position::new(2, 2));
        assert_eq!(world.items_at(Position::new(2, 2)).count(), 1);

        let taken = world.take_item(id).unwrap();
        assert_eq!(taken.item.name, "rock");
        assert!(world.take_item(id).is_none());
    }
}
