use crate::env::Grid;
use crate::state::{Direction, Enemy, Position};

/// What an enemy chose to do with its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Decision {
    /// Hit the adjacent player.
    Strike,
    /// Greedy step toward the player.
    Chase,
    /// Random cardinal step.
    Wander,
}

/// Snapshot of the facts one enemy's tree decides on.
///
/// Built fresh each turn from the world, so the tree never holds a
/// reference into the enemy collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Blackboard {
    /// Player is in one of the eight surrounding tiles.
    pub adjacent: bool,
    /// A wall corner sits between the enemy and a diagonal player.
    pub swing_blocked: bool,
    pub discovered: bool,
    pub decision: Option<Decision>,
}

impl Blackboard {
    pub fn observe(grid: &Grid, enemy: &Enemy, player: Position, discovered: bool) -> Self {
        let toward = Direction::towards(enemy.position, player);
        Self {
            adjacent: enemy.position.is_adjacent(player),
            swing_blocked: grid.cuts_corner(enemy.position, toward),
            discovered,
            decision: None,
        }
    }

    pub fn decide(&mut self, decision: Decision) {
        self.decision = Some(decision);
    }
}
