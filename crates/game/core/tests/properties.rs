use std::time::Duration;

use crawl_core::combat::{award_experience, melee_damage, net_damage};
use crawl_core::{
    Action, Enemy, EnemyKind, EntityId, GameConfig, Grid, Health, Player, PlayerStats, Position,
    ScriptedRng, Tile, TurnScheduler, World,
};
use proptest::prelude::*;

fn ticks_to_drain(duration: Duration, non_blocking: bool) -> (u32, bool) {
    let config = GameConfig::new();
    let grid = Grid::filled(1, 1, Tile::floor()).unwrap();
    let mut world = World::new(grid, Player::new(Position::ORIGIN, PlayerStats::default()));
    let mut scheduler = TurnScheduler::new(&config);

    let mut action = Action::idle(duration);
    if non_blocking {
        action = action.non_blocking();
    }
    scheduler.enqueue(action);

    let mut ticks = 0;
    let mut gated_throughout = true;
    while !scheduler.queue().is_empty() {
        scheduler.tick(&mut world, &config);
        ticks += 1;
        if !scheduler.queue().is_empty() && scheduler.can_accept_input() {
            gated_throughout = false;
        }
    }
    assert!(!scheduler.combat_active());
    (ticks, gated_throughout)
}

proptest! {
    #[test]
    fn damage_is_never_negative(
        offense in -1_000i32..1_000,
        defense in -1_000i32..1_000,
        jitter in -1i32..=1,
    ) {
        let amount = net_damage(offense, defense, jitter);
        let raw = i64::from(offense) - i64::from(defense) + i64::from(jitter);
        prop_assert_eq!(i64::from(amount), raw.max(0));
    }

    #[test]
    fn player_blows_follow_the_formula(
        attack in 0i32..20,
        power in 0i32..20,
        level in 1u32..=10,
        defense in 0i32..40,
        draw in any::<u32>(),
    ) {
        let stats = PlayerStats { attack, power, ..PlayerStats::default() };
        let mut player = Player::new(Position::ORIGIN, stats);
        player.level = level;
        let enemy = Enemy::new(EntityId(1), EnemyKind::Orc, Position::new(1, 0))
            .with_stats(10, 0, defense);
        let mut rng = ScriptedRng::new([draw]);

        let jitter = (draw % 3) as i32 - 1;
        let expected = (attack + power + level as i32 - defense + jitter).max(0) as u32;
        prop_assert_eq!(melee_damage(&player, &enemy, &mut rng), expected);
    }

    #[test]
    fn health_stays_within_bounds(
        maximum in 1u32..500,
        ops in prop::collection::vec((any::<bool>(), 0u32..1_000), 0..64),
    ) {
        let mut health = Health::new(maximum);
        for (heal, amount) in ops {
            if heal {
                health.heal(amount);
            } else {
                health.damage(amount);
            }
            prop_assert!(health.current() <= health.maximum());
        }
        prop_assert_eq!(health.maximum(), maximum);
    }

    #[test]
    fn blocking_action_holds_for_its_duration_in_ticks(
        millis in 0u64..3_000,
        non_blocking in any::<bool>(),
    ) {
        let duration = Duration::from_millis(millis);
        let tick = GameConfig::new().tick_length();
        let (ticks, gated) = ticks_to_drain(duration, non_blocking);

        let expected = duration.as_nanos().div_ceil(tick.as_nanos()).max(1) as u32;
        prop_assert_eq!(ticks, expected);
        // within one tick of d * 60
        let nominal = (millis * 60).div_ceil(1_000).max(1) as u32;
        prop_assert!(ticks.abs_diff(nominal) <= 1);
        if expected > 1 {
            prop_assert_eq!(gated, !non_blocking);
        }
    }

    #[test]
    fn awards_advance_at_most_one_level(
        start in 1u32..=10,
        amounts in prop::collection::vec(0u32..400, 1..20),
    ) {
        let config = GameConfig::new();
        let mut player = Player::new(Position::ORIGIN, PlayerStats::default());
        player.level = start;

        for amount in amounts {
            let before = player.level;
            let total = player.experience + amount;
            let levelled = award_experience(&mut player, amount, &config);
            prop_assert_eq!(player.experience, total);
            prop_assert!(player.level - before <= 1);
            prop_assert_eq!(levelled.is_some(), player.level == before + 1);
            prop_assert!(player.level <= GameConfig::LEVEL_CAP);
        }
    }
}
