use crate::env::Grid;
use crate::state::Position;

/// Next value of an enemy's `discovered` flag.
///
/// Noticing needs Manhattan distance below `radius` plus either a shared room
/// or 8-adjacency. Forgetting only needs distance `radius` or more. Between
/// the two, a discovered enemy stays discovered even outside the room.
pub fn perceive(
    grid: &Grid,
    enemy: Position,
    player: Position,
    discovered: bool,
    radius: u32,
) -> bool {
    if enemy.manhattan(player) >= radius {
        return false;
    }
    discovered || grid.same_room(enemy, player) || enemy.chebyshev(player) <= 1
}
