use std::time::Duration;

/// Display time for each kind of paced [`Action`](crate::Action).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionDurations {
    /// Null actions such as a swing at an empty tile.
    pub default: Duration,
    /// Player melee hit on an enemy.
    pub strike: Duration,
    /// "X is defeated" narration.
    pub defeat: Duration,
    /// Projectile flight time for thrown items.
    pub throw: Duration,
    pub pickup: Duration,
    pub drop: Duration,
    pub equip: Duration,
    pub use_item: Duration,
    pub level_up: Duration,
    /// Final narration once the player falls.
    pub player_defeat: Duration,
    /// Length of the enemy strike and struck animation windows.
    pub animation: Duration,
}

impl Default for ActionDurations {
    fn default() -> Self {
        Self {
            default: Duration::from_millis(250),
            strike: Duration::from_millis(400),
            defeat: Duration::from_millis(600),
            throw: Duration::from_millis(300),
            pickup: Duration::from_millis(500),
            drop: Duration::from_millis(300),
            equip: Duration::from_millis(500),
            use_item: Duration::from_millis(500),
            level_up: Duration::from_millis(800),
            player_defeat: Duration::from_secs(2),
            animation: Duration::from_millis(200),
        }
    }
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Fixed simulation rate in ticks per second.
    pub tick_rate: u32,
    /// Manhattan distance below which an enemy may notice the player, and at
    /// or beyond which it forgets them.
    pub discovery_radius: u32,
    /// Maximum tiles a thrown item travels.
    pub throw_range: u32,
    /// Direction rolls an idle enemy gets per turn before giving up.
    pub wander_attempts: u32,
    /// Maximum health gained per level-up.
    pub level_up_health_bonus: u32,
    /// Experience needed to reach level `i + 1`, indexed by `i`.
    pub experience_thresholds: [u32; Self::LEVEL_CAP as usize],
    pub durations: ActionDurations,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    pub const LEVEL_CAP: u32 = 10;
    pub const INVENTORY_CAPACITY: usize = 8;
    pub const MESSAGE_LOG_CAPACITY: usize = 32;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TICK_RATE: u32 = 60;
    pub const DEFAULT_DISCOVERY_RADIUS: u32 = 7;
    pub const DEFAULT_THROW_RANGE: u32 = 10;
    pub const DEFAULT_WANDER_ATTEMPTS: u32 = 10;
    pub const DEFAULT_LEVEL_UP_HEALTH_BONUS: u32 = 10;
    pub const DEFAULT_EXPERIENCE_THRESHOLDS: [u32; Self::LEVEL_CAP as usize] =
        [0, 10, 25, 45, 70, 100, 140, 190, 250, 320];

    pub fn new() -> Self {
        Self {
            tick_rate: Self::DEFAULT_TICK_RATE,
            discovery_radius: Self::DEFAULT_DISCOVERY_RADIUS,
            throw_range: Self::DEFAULT_THROW_RANGE,
            wander_attempts: Self::DEFAULT_WANDER_ATTEMPTS,
            level_up_health_bonus: Self::DEFAULT_LEVEL_UP_HEALTH_BONUS,
            experience_thresholds: Self::DEFAULT_EXPERIENCE_THRESHOLDS,
            durations: ActionDurations::default(),
        }
    }

    pub fn with_tick_rate(mut self, tick_rate: u32) -> Self {
        self.tick_rate = tick_rate.max(1);
        self
    }

    pub fn with_durations(mut self, durations: ActionDurations) -> Self {
        self.durations = durations;
        self
    }

    pub fn with_experience_thresholds(
        mut self,
        thresholds: [u32; Self::LEVEL_CAP as usize],
    ) -> Self {
        self.experience_thresholds = thresholds;
        self
    }

    /// Length of one simulation tick.
    ///
    /// Rounded up to the next nanosecond so that `tick_rate` ticks always
    /// cover a full second.
    pub fn tick_length(&self) -> Duration {
        Duration::from_nanos(1_000_000_000u64.div_ceil(u64::from(self.tick_rate.max(1))))
    }

    /// Experience required to advance from `level` to `level + 1`, or `None`
    /// at the cap.
    pub fn next_level_threshold(&self, level: u32) -> Option<u32> {
        if level >= Self::LEVEL_CAP {
            return None;
        }
        self.experience_thresholds.get(level as usize).copied()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_ticks_cover_one_second() {
        let config = GameConfig::new();
        let tick = config.tick_length();
        assert!(tick * 60 >= Duration::from_secs(1));
        assert!(tick * 59 < Duration::from_secs(1));
    }

    #[test]
    fn thresholds_stop_at_cap() {
        let config = GameConfig::new();
        assert_eq!(config.next_level_threshold(1), Some(10));
        assert_eq!(config.next_level_threshold(9), Some(320));
        assert_eq!(config.next_level_threshold(10), None);
    }
}
