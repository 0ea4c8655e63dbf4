//! Fixed-rate host loop.
use std::thread;

use anyhow::Result;
use crawl_core::{GameEngine, GameStatus, PcgRng, PlayerIntent, RandomSource};
use serde::Serialize;
use tracing::{debug, info};

use crate::autopilot::Autopilot;
use crate::config::ClientConfig;
use crate::demo;

/// End-of-run report printed by the binary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub ticks: u64,
    pub turns: u64,
    pub status: GameStatus,
    pub level: u32,
    pub experience: u32,
    pub health: u32,
    pub max_health: u32,
    pub enemies_left: usize,
    /// Retired narration, oldest first.
    pub messages: Vec<String>,
}

/// Builds the demo dungeon and plays it to completion or `max_ticks`.
pub fn run(config: &ClientConfig) -> Result<RunSummary> {
    let mut rng = config.seed.map_or_else(PcgRng::from_time, PcgRng::new);
    let seed = rng.seed();
    let world = demo::build_world(&mut rng)?;
    info!(seed, enemies = world.enemy_count(), "dungeon ready");

    let mut engine = GameEngine::new(world, config.game_config(), rng);
    let ticks = drive(&mut engine, &Autopilot::new(), config);
    Ok(summarize(&engine, seed, ticks))
}

/// Ticks the engine, feeding one pilot intent whenever input is accepted.
/// Returns the number of ticks taken.
pub fn drive<R: RandomSource>(
    engine: &mut GameEngine<R>,
    pilot: &Autopilot,
    config: &ClientConfig,
) -> u64 {
    let tick_length = engine.config().tick_length();
    let mut ticks = 0;

    while ticks < config.max_ticks && !is_finished(engine) {
        if engine.can_accept_input() {
            let intent = pilot.next_intent(engine.world(), engine.config());
            submit_or_wait(engine, intent);
        }

        let mark = engine.world().log.recorded();
        let report = engine.tick();
        ticks += 1;

        for line in engine.world().log.since(mark) {
            info!(turn = engine.world().turn, "{line}");
        }
        if report.enemy_turn {
            debug!(
                turn = engine.world().turn,
                health = engine.world().player.health.current(),
                "enemy turn"
            );
        }

        if config.realtime {
            thread::sleep(tick_length);
        }
    }

    ticks
}

/// Submits `intent`, spending the turn on a wait if it is rejected.
/// Returns the intent that was accepted, if any.
fn submit_or_wait<R: RandomSource>(
    engine: &mut GameEngine<R>,
    intent: PlayerIntent,
) -> Option<PlayerIntent> {
    // rejections are already logged by the engine
    if engine.submit(intent).is_ok() {
        return Some(intent);
    }
    if intent == PlayerIntent::Wait {
        return None;
    }
    match engine.submit(PlayerIntent::Wait) {
        Ok(_) => Some(PlayerIntent::Wait),
        Err(err) => {
            debug!(code = err.error_code(), %err, "fallback wait rejected");
            None
        }
    }
}

fn is_finished<R: RandomSource>(engine: &GameEngine<R>) -> bool {
    let idle = engine.scheduler().queue().is_empty() && !engine.is_enemy_turn_pending();
    idle && (!engine.world().is_playing() || engine.world().enemy_count() == 0)
}

fn summarize<R: RandomSource>(engine: &GameEngine<R>, seed: u64, ticks: u64) -> RunSummary {
    let world = engine.world();
    RunSummary {
        seed,
        ticks,
        turns: world.turn,
        status: world.status,
        level: world.player.level,
        experience: world.player.experience,
        health: world.player.health.current(),
        max_health: world.player.health.maximum(),
        enemies_left: world.enemy_count(),
        messages: world.log.iter().map(str::to_owned).collect(),
    }
}

#[cfg(test)]
mod tests {
    use crawl_core::{Direction, Grid, Player, PlayerStats, Position, World};

    use super::*;

    fn headless(seed: u64, max_ticks: u64) -> ClientConfig {
        ClientConfig {
            seed: Some(seed),
            max_ticks,
            ..ClientConfig::default()
        }
    }

    fn corridor() -> GameEngine<PcgRng> {
        let grid = Grid::from_rows(&["#####", "#...#", "#####"]).unwrap();
        let world = World::new(grid, Player::new(Position::new(1, 1), PlayerStats::default()));
        GameEngine::seeded(world, ClientConfig::default().game_config(), 1)
    }

    #[test]
    fn rejected_intent_falls_back_to_waiting() {
        let mut engine = corridor();
        let accepted = submit_or_wait(&mut engine, PlayerIntent::Move(Direction::Left));
        assert_eq!(accepted, Some(PlayerIntent::Wait));
        assert!(engine.is_enemy_turn_pending());
    }

    #[test]
    fn rejected_fallback_is_reported_not_swallowed() {
        let mut engine = corridor();
        engine.world_mut().status = GameStatus::Defeated;

        let accepted = submit_or_wait(&mut engine, PlayerIntent::Move(Direction::Right));
        assert_eq!(accepted, None);
        assert!(engine.scheduler().queue().is_empty());
    }

    #[test]
    fn seeded_runs_replay_identically() {
        let first = run(&headless(11, 5_000)).unwrap();
        let second = run(&headless(11, 5_000)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.seed, 11);
    }

    #[test]
    fn run_stops_at_the_tick_limit_or_a_conclusion() {
        let summary = run(&headless(3, 20_000)).unwrap();
        assert!(summary.ticks <= 20_000);

        let concluded = summary.status == GameStatus::Defeated || summary.enemies_left == 0;
        assert!(concluded || summary.ticks == 20_000);
        assert!(summary.health <= summary.max_health);
        assert!(summary.turns > 0);
    }

    #[test]
    fn summary_serializes_to_json() {
        let summary = run(&headless(5, 200)).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["seed"], 5);
        assert!(json["ticks"].as_u64().is_some_and(|ticks| ticks <= 200));
        assert!(json["messages"].is_array());
    }
}
