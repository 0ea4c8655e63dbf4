//! Turn pacing and the host-facing engine.
//!
//! [`GameEngine`] owns the world, the [`TurnScheduler`], the configuration
//! and the single random source. The host drives it with two calls:
//!
//! - [`GameEngine::submit`] when [`GameEngine::can_accept_input`] is true
//! - [`GameEngine::tick`] once per fixed simulation step, always
//!
//! A player intent that spends a turn leaves an enemy turn pending. The
//! enemies act on the first tick where the scheduler lets input through
//! again, so their moves never interleave with the player's paced actions.

mod effects;
mod intent;
mod scheduler;

pub use intent::{IntentOutcome, PlayerIntent};
pub use scheduler::{SchedulerStep, TurnScheduler};

use tracing::{debug, warn};

use crate::ai::EnemyController;
use crate::config::GameConfig;
use crate::env::{PcgRng, RandomSource};
use crate::error::IntentError;
use crate::state::World;

/// Summary of one [`GameEngine::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    pub step: SchedulerStep,
    /// Enemies took their turn during this tick.
    pub enemy_turn: bool,
    pub combat_active: bool,
    pub accepts_input: bool,
}

pub struct GameEngine<R: RandomSource = PcgRng> {
    world: World,
    scheduler: TurnScheduler,
    config: GameConfig,
    rng: R,
    controller: EnemyController,
    pending_enemy_turn: bool,
}

impl GameEngine<PcgRng> {
    /// Engine with a generator seeded from `seed`, for replays.
    pub fn seeded(world: World, config: GameConfig, seed: u64) -> Self {
        Self::new(world, config, PcgRng::new(seed))
    }
}

impl<R: RandomSource> GameEngine<R> {
    pub fn new(world: World, config: GameConfig, rng: R) -> Self {
        let scheduler = TurnScheduler::new(&config);
        Self {
            world,
            scheduler,
            config,
            rng,
            controller: EnemyController::new(),
            pending_enemy_turn: false,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct access for hosts and tests that stage a scenario.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn scheduler(&self) -> &TurnScheduler {
        &self.scheduler
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn is_enemy_turn_pending(&self) -> bool {
        self.pending_enemy_turn
    }

    /// The sole gate the host uses before calling [`submit`](Self::submit).
    pub fn can_accept_input(&self) -> bool {
        !self.pending_enemy_turn && self.scheduler.can_accept_input() && self.world.is_playing()
    }

    /// Validates and resolves a player intent.
    ///
    /// A rejected intent queues nothing and spends no turn.
    pub fn submit(&mut self, intent: PlayerIntent) -> Result<IntentOutcome, IntentError> {
        if !self.world.is_playing() {
            return Err(IntentError::PlayerDefeated);
        }
        if !self.can_accept_input() {
            return Err(IntentError::InputBlocked);
        }

        let outcome = intent::resolve(
            intent,
            &mut self.world,
            &mut self.scheduler,
            &mut self.rng,
            &self.config,
        )
        .inspect_err(|err| {
            warn!(
                ?intent,
                code = err.error_code(),
                severity = err.severity().as_str(),
                "intent rejected"
            );
        })?;

        if outcome.consumes_turn() {
            self.pending_enemy_turn = true;
        }
        debug!(?intent, ?outcome, "intent accepted");
        Ok(outcome)
    }

    /// Advances the simulation by one fixed tick.
    pub fn tick(&mut self) -> TickReport {
        let step = self.scheduler.tick(&mut self.world, &self.config);
        self.world.advance_animations(self.scheduler.tick_length());

        let mut enemy_turn = false;
        if self.pending_enemy_turn && self.scheduler.can_accept_input() {
            self.pending_enemy_turn = false;
            if self.world.is_playing() {
                self.controller.run_turn(
                    &mut self.world,
                    &mut self.scheduler,
                    &mut self.rng,
                    &self.config,
                );
                self.world.turn += 1;
                enemy_turn = true;
            }
        }

        TickReport {
            step,
            enemy_turn,
            combat_active: self.scheduler.combat_active(),
            accepts_input: self.can_accept_input(),
        }
    }

    /// Ticks until input is accepted again or the run ends, at most
    /// `max_ticks` times. Returns the number of ticks taken.
    pub fn settle(&mut self, max_ticks: u32) -> u32 {
        let mut ticks = 0;
        while ticks < max_ticks && !self.can_accept_input() {
            self.tick();
            ticks += 1;
            if !self.world.is_playing() && self.scheduler.queue().is_empty() {
                break;
            }
        }
        ticks
    }
}
