//! Enemy AI controller.
//!
//! Runs once per player turn over every live enemy, in spawn order, with no
//! enemy-vs-enemy interaction. Each enemy first updates its `discovered` flag,
//! then a behavior tree picks one of [`Decision::Strike`],
//! [`Decision::Chase`] or [`Decision::Wander`].

mod context;
pub mod movement;
pub mod perception;
mod tree;

pub use context::{Blackboard, Decision};
pub use perception::perceive;
pub use tree::{EnemyTree, enemy_tree};

use behavior_tree::Behavior;
use tracing::debug;

use crate::combat;
use crate::config::GameConfig;
use crate::engine::TurnScheduler;
use crate::env::RandomSource;
use crate::state::{EntityId, World};

pub struct EnemyController {
    tree: EnemyTree,
}

impl Default for EnemyController {
    fn default() -> Self {
        Self::new()
    }
}

impl EnemyController {
    pub fn new() -> Self {
        Self { tree: enemy_tree() }
    }

    /// One enemy phase. Stops early once the player falls.
    pub fn run_turn(
        &self,
        world: &mut World,
        scheduler: &mut TurnScheduler,
        rng: &mut (impl RandomSource + ?Sized),
        config: &GameConfig,
    ) {
        for id in world.enemy_ids() {
            if !world.is_playing() {
                break;
            }
            self.take_turn(world, scheduler, rng, config, id);
        }
    }

    /// Decides and acts for a single enemy. `None` if `id` is not live.
    pub fn take_turn(
        &self,
        world: &mut World,
        scheduler: &mut TurnScheduler,
        rng: &mut (impl RandomSource + ?Sized),
        config: &GameConfig,
        id: EntityId,
    ) -> Option<Decision> {
        let player = world.player.position;
        let enemy = world.enemy(id)?;
        let discovered = perceive(
            &world.grid,
            enemy.position,
            player,
            enemy.discovered,
            config.discovery_radius,
        );
        let mut board = Blackboard::observe(&world.grid, enemy, player, discovered);
        if let Some(enemy) = world.enemy_mut(id) {
            enemy.discovered = discovered;
        }

        self.tree.tick(&mut board);
        let decision = board.decision.unwrap_or(Decision::Wander);
        debug!(%id, %decision, discovered, "enemy decision");

        match decision {
            Decision::Strike => {
                combat::enemy_strike(world, scheduler, rng, config, id);
            }
            Decision::Chase => {
                movement::move_towards_player(world, rng, id);
            }
            Decision::Wander => {
                movement::move_randomly(world, rng, config, id);
            }
        }
        Some(decision)
    }
}
