use std::time::Duration;

use crawl_core::{
    Action, Direction, Effect, EnemyKind, ErrorSeverity, GameConfig, GameEngine, GameStatus, Grid,
    IntentError, IntentOutcome, Player, PlayerIntent, PlayerStats, Position, ScriptedRng,
    StrikeOutcome, TurnScheduler, World,
};

const PLAYER_AT: Position = Position::new(2, 2);

fn arena() -> World {
    let grid = Grid::from_rows(&[
        "#######",
        "#.....#",
        "#.....#",
        "#.....#",
        "#######",
    ])
    .unwrap();
    World::new(grid, Player::new(PLAYER_AT, PlayerStats::default()))
}

fn engine(world: World, script: impl IntoIterator<Item = u32>) -> GameEngine<ScriptedRng> {
    GameEngine::new(world, GameConfig::new(), ScriptedRng::new(script))
}

/// Ticks until every queued action has retired, non-blocking ones included.
fn drain(engine: &mut GameEngine<ScriptedRng>) {
    for _ in 0..10_000 {
        if engine.scheduler().queue().is_empty() && !engine.is_enemy_turn_pending() {
            return;
        }
        engine.tick();
    }
    panic!("queue never drained");
}

#[test]
fn minimum_roll_still_fells_a_five_health_defender() {
    // jitter draws -1, 0, +1
    for draw in [0, 1, 2] {
        let mut world = arena();
        let target = world.spawn_enemy_with(EnemyKind::Slime, Position::new(3, 2), |enemy| {
            enemy.with_stats(5, 1, 2)
        });
        let mut engine = engine(world, [draw]);

        let outcome = engine.submit(PlayerIntent::Move(Direction::Right)).unwrap();
        let IntentOutcome::Struck(StrikeOutcome::Hit { amount, .. }) = outcome else {
            panic!("expected a hit, got {outcome:?}");
        };
        assert!(amount >= 9);
        assert_eq!(engine.world().enemy_count(), 1, "damage waits for the scheduler");

        engine.tick();
        assert!(engine.world().enemy(target).is_none());
        assert_eq!(engine.world().player.experience, 2);
    }
}

#[test]
fn defeat_narration_follows_the_hit() {
    let mut world = arena();
    world.spawn_enemy(EnemyKind::Slime, Position::new(3, 2));
    let mut engine = engine(world, [1]);

    engine.submit(PlayerIntent::Move(Direction::Right)).unwrap();
    engine.settle(1_000);

    let log: Vec<_> = engine.world().log.iter().collect();
    assert_eq!(
        log,
        ["You hit the slime for 12 damage.", "The slime is defeated!"]
    );
    assert!(engine.can_accept_input());
}

#[test]
fn kill_crossing_a_threshold_levels_up_once() {
    let mut world = arena();
    world.player.experience = 9;
    world.spawn_enemy(EnemyKind::Slime, Position::new(3, 2));
    let mut engine = engine(world, [1]);

    engine.submit(PlayerIntent::Move(Direction::Right)).unwrap();
    drain(&mut engine);

    let player = &engine.world().player;
    assert_eq!(player.level, 2);
    assert_eq!(player.experience, 11);
    assert_eq!(player.health.maximum(), 40);
    assert_eq!(engine.world().log.latest(), Some("You reached level 2!"));
}

#[test]
fn second_blow_on_a_dead_enemy_awards_nothing() {
    let config = GameConfig::new();
    let mut world = arena();
    let target = world.spawn_enemy_with(EnemyKind::Goblin, Position::new(3, 2), |enemy| {
        enemy.with_stats(3, 0, 0)
    });
    let mut scheduler = TurnScheduler::new(&config);
    for _ in 0..2 {
        scheduler.enqueue(Action::new(
            Duration::ZERO,
            "hit",
            Effect::Damage {
                target,
                amount: 5,
                from: Direction::Right,
            },
        ));
    }

    while !scheduler.queue().is_empty() {
        scheduler.tick(&mut world, &config);
    }

    assert!(world.enemy(target).is_none());
    assert_eq!(world.player.experience, 5);
    assert_eq!(
        world.log.iter().collect::<Vec<_>>(),
        ["hit", "hit", "The goblin is defeated!"]
    );
}

#[test]
fn swinging_where_an_enemy_died_is_a_miss() {
    let mut world = arena();
    world.spawn_enemy(EnemyKind::Slime, Position::new(3, 2));
    let mut engine = engine(world, [1]);

    engine.submit(PlayerIntent::Move(Direction::Right)).unwrap();
    engine.settle(1_000);
    assert_eq!(engine.world().enemy_count(), 0);

    let outcome = engine.submit(PlayerIntent::Attack).unwrap();
    assert_eq!(outcome, IntentOutcome::Struck(StrikeOutcome::Miss));
    engine.settle(1_000);
    assert_eq!(engine.world().player.experience, 2);
}

#[test]
fn a_miss_still_paces_the_turn() {
    let mut engine = engine(arena(), []);

    let outcome = engine.submit(PlayerIntent::Attack).unwrap();
    assert_eq!(outcome, IntentOutcome::Struck(StrikeOutcome::Miss));

    let head = engine.scheduler().head().unwrap();
    assert!(head.message().is_empty());
    assert_eq!(head.duration(), engine.config().durations.default);
    assert!(!engine.can_accept_input());
    assert!(engine.world().player.swing.is_active());
}

#[test]
fn input_is_gated_while_an_action_plays() {
    let mut world = arena();
    world.spawn_enemy(EnemyKind::Orc, Position::new(3, 2));
    let mut engine = engine(world, [1]);

    engine.submit(PlayerIntent::Move(Direction::Right)).unwrap();
    let err = engine.submit(PlayerIntent::Wait).unwrap_err();
    assert_eq!(err, IntentError::InputBlocked);
    assert_eq!(err.severity(), ErrorSeverity::Recoverable);
    assert_eq!(engine.scheduler().queue().len(), 1);
}

#[test]
fn adjacent_enemy_retaliates_after_the_turn() {
    let mut world = arena();
    let goblin = world.spawn_enemy(EnemyKind::Goblin, Position::new(3, 3));
    let mut engine = engine(world, [1]);

    engine.submit(PlayerIntent::Wait).unwrap();
    assert!(engine.is_enemy_turn_pending());

    let report = engine.tick();
    assert!(report.enemy_turn);
    // 4 attack - 1 defense + 0 jitter
    assert_eq!(engine.world().player.health.current(), 27);
    assert_eq!(engine.world().turn, 1);

    let goblin = engine.world().enemy(goblin).unwrap();
    assert!(goblin.strike.is_active());
    assert_eq!(goblin.strike.facing(), Direction::UpLeft);
    assert!(engine.scheduler().queue().is_empty(), "retaliation is not queued");
}

#[test]
fn pierce_ignores_armor() {
    let mut world = arena();
    world.spawn_enemy(EnemyKind::Skeleton, Position::new(2, 1));
    // special roll 0 < 20 triggers, then jitter 0
    let mut engine = engine(world, [0, 1]);

    engine.submit(PlayerIntent::Wait).unwrap();
    engine.tick();
    assert_eq!(engine.world().player.health.current(), 25);
}

#[test]
fn drain_heals_the_attacker() {
    let mut world = arena();
    let bat = world.spawn_enemy_with(EnemyKind::Bat, Position::new(1, 2), |mut enemy| {
        enemy.health = enemy.health.with_current(2);
        enemy
    });
    let mut engine = engine(world, [0, 1]);

    engine.submit(PlayerIntent::Wait).unwrap();
    engine.tick();
    assert_eq!(engine.world().player.health.current(), 28);
    assert_eq!(engine.world().enemy(bat).unwrap().health.current(), 3);
}

#[test]
fn player_defeat_ends_the_run() {
    let mut world = arena();
    world.player.health = world.player.health.with_current(1);
    world.spawn_enemy(EnemyKind::Orc, Position::new(3, 2));
    world.spawn_enemy(EnemyKind::Orc, Position::new(1, 2));
    let mut engine = engine(world, [1]);

    engine.submit(PlayerIntent::Wait).unwrap();
    engine.tick();

    assert_eq!(engine.world().status, GameStatus::Defeated);
    assert_eq!(engine.world().player.health.current(), 0);
    assert!(!engine.can_accept_input());
    assert_eq!(
        engine.submit(PlayerIntent::Wait),
        Err(IntentError::PlayerDefeated)
    );

    // the second orc never swung
    let idle = engine.world().enemies().filter(|orc| !orc.strike.is_active()).count();
    assert_eq!(idle, 1);

    engine.settle(1_000);
    assert_eq!(engine.world().log.latest(), Some("You were slain by the orc."));
}
