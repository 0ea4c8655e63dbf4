//! Experience and level-ups.

use crate::config::GameConfig;
use crate::state::Player;

/// Adds experience and runs one level-up check.
///
/// Returns the new level if the player advanced. A single award advances at
/// most one level even if it crosses several thresholds; the next award
/// picks up the remainder.
pub fn award_experience(player: &mut Player, amount: u32, config: &GameConfig) -> Option<u32> {
    player.experience = player.experience.saturating_add(amount);
    check_level_up(player, config)
}

pub fn check_level_up(player: &mut Player, config: &GameConfig) -> Option<u32> {
    let threshold = config.next_level_threshold(player.level)?;
    if player.experience < threshold {
        return None;
    }

    player.level += 1;
    player.health.raise_maximum(config.level_up_health_bonus);
    Some(player.level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PlayerStats, Position};

    fn player() -> Player {
        Player::new(Position::ORIGIN, PlayerStats::default())
    }

    #[test]
    fn crossing_threshold_levels_once_and_raises_max_health() {
        let config = GameConfig::new();
        let mut player = player();
        player.health.damage(5);

        assert_eq!(award_experience(&mut player, 9, &config), None);
        assert_eq!(award_experience(&mut player, 1, &config), Some(2));
        assert_eq!(player.health.maximum(), 40);
        assert_eq!(player.health.current(), 25);
    }

    #[test]
    fn big_award_advances_a_single_level() {
        let config = GameConfig::new();
        let mut player = player();

        assert_eq!(award_experience(&mut player, 500, &config), Some(2));
        assert_eq!(player.level, 2);
        assert_eq!(award_experience(&mut player, 0, &config), Some(3));
    }

    #[test]
    fn no_level_ups_past_the_cap() {
        let config = GameConfig::new();
        let mut player = player();
        player.level = GameConfig::LEVEL_CAP;
        let max = player.health.maximum();

        assert_eq!(award_experience(&mut player, 10_000, &config), None);
        assert_eq!(player.level, GameConfig::LEVEL_CAP);
        assert_eq!(player.health.maximum(), max);
    }
}
