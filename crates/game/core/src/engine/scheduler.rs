use std::time::Duration;

use tracing::debug;

use super::effects;
use crate::action::{Action, ActionQueue};
use crate::config::GameConfig;
use crate::state::World;

/// What one scheduler tick did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchedulerStep {
    /// The head's effect was applied this tick.
    pub started: bool,
    /// The head was removed this tick.
    pub retired: bool,
}

/// Cooperative scheduler draining one global [`ActionQueue`] per fixed tick.
///
/// Each tick runs four steps in order:
///
/// 1. queue non-empty and counter at zero: apply the head's effect, load its
///    duration into the counter
/// 2. counter positive: subtract one tick length
/// 3. queue non-empty and counter at zero: retire the head
/// 4. queue empty, combat active and counter at zero: clear combat and the
///    message display flag
///
/// A zero-duration action therefore starts and retires in the same tick.
#[derive(Clone, Debug)]
pub struct TurnScheduler {
    queue: ActionQueue,
    duration_counter: Duration,
    combat_active: bool,
    message_visible: bool,
    tick_length: Duration,
}

impl TurnScheduler {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            queue: ActionQueue::new(),
            duration_counter: Duration::ZERO,
            combat_active: false,
            message_visible: false,
            tick_length: config.tick_length(),
        }
    }

    /// Appends to the tail and marks combat active.
    pub fn enqueue(&mut self, action: Action) {
        debug!(
            message = action.message(),
            duration_ms = action.duration().as_millis() as u64,
            queued = self.queue.len() + 1,
            "action enqueued"
        );
        self.queue.push(action);
        self.combat_active = true;
    }

    pub fn tick(&mut self, world: &mut World, config: &GameConfig) -> SchedulerStep {
        let mut step = SchedulerStep::default();

        // 1. start the head
        if self.duration_counter.is_zero() {
            if let Some(head) = self.queue.head_mut() {
                let effect = head.take_effect();
                let duration = head.duration();
                if !head.message().is_empty() {
                    self.message_visible = true;
                }
                debug!(message = head.message(), ?effect, "action started");

                self.duration_counter = duration;
                step.started = true;
                // May enqueue follow-ups behind the current head.
                if let Some(line) = effects::apply(effect, world, self, config) {
                    self.narrate_head(line);
                }
            }
        }

        // 2. count down
        if !self.duration_counter.is_zero() {
            self.duration_counter = self.duration_counter.saturating_sub(self.tick_length);
        }

        // 3. retire the head
        if self.duration_counter.is_zero() {
            if let Some(retired) = self.queue.retire_head() {
                if !retired.message().is_empty() {
                    world.log.push(retired.message());
                }
                step.retired = true;
            }
        }

        // 4. settle
        if self.queue.is_empty() && self.combat_active && self.duration_counter.is_zero() {
            self.combat_active = false;
            self.message_visible = false;
            debug!("queue drained");
        }

        step
    }

    /// Replaces the running head's message with what its effect reported.
    fn narrate_head(&mut self, line: String) {
        if let Some(head) = self.queue.head_mut() {
            self.message_visible = !line.is_empty();
            head.set_message(line);
        }
    }

    /// True iff the queue is empty or its head is non-blocking.
    pub fn can_accept_input(&self) -> bool {
        self.queue.head().is_none_or(Action::is_non_blocking)
    }

    pub fn combat_active(&self) -> bool {
        self.combat_active
    }

    /// Narration the renderer should show right now, if any.
    pub fn current_message(&self) -> Option<&str> {
        if !self.message_visible {
            return None;
        }
        self.queue
            .head()
            .map(Action::message)
            .filter(|message| !message.is_empty())
    }

    pub fn message_visible(&self) -> bool {
        self.message_visible
    }

    pub fn head(&self) -> Option<&Action> {
        self.queue.head()
    }

    pub fn queue(&self) -> &ActionQueue {
        &self.queue
    }

    pub fn duration_counter(&self) -> Duration {
        self.duration_counter
    }

    pub fn tick_length(&self) -> Duration {
        self.tick_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Grid;
    use crate::state::{Player, PlayerStats, Position};

    fn setup() -> (World, TurnScheduler, GameConfig) {
        let config = GameConfig::new();
        let grid = Grid::from_rows(&["###", "#.#", "###"]).unwrap();
        let world = World::new(grid, Player::new(Position::new(1, 1), PlayerStats::default()));
        (world, TurnScheduler::new(&config), config)
    }

    #[test]
    fn enqueue_marks_combat_active() {
        let (_, mut scheduler, _) = setup();
        assert!(!scheduler.combat_active());
        scheduler.enqueue(Action::idle(Duration::ZERO));
        assert!(scheduler.combat_active());
        assert!(!scheduler.can_accept_input());
    }

    #[test]
    fn zero_duration_starts_and_retires_in_one_tick() {
        let (mut world, mut scheduler, config) = setup();
        scheduler.enqueue(Action::narrate(Duration::ZERO, "instant"));

        let step = scheduler.tick(&mut world, &config);
        assert!(step.started && step.retired);
        assert!(scheduler.queue().is_empty());
        assert!(!scheduler.combat_active());
        assert_eq!(world.log.latest(), Some("instant"));
    }

    #[test]
    fn message_stays_visible_while_the_head_counts_down() {
        let (mut world, mut scheduler, config) = setup();
        scheduler.enqueue(Action::narrate(Duration::from_millis(100), "slow"));

        scheduler.tick(&mut world, &config);
        assert_eq!(scheduler.current_message(), Some("slow"));
        assert!(world.log.is_empty());

        while !scheduler.queue().is_empty() {
            scheduler.tick(&mut world, &config);
        }
        assert_eq!(scheduler.current_message(), None);
        assert!(!scheduler.message_visible());
    }

    #[test]
    fn non_blocking_head_lets_input_through() {
        let (mut world, mut scheduler, config) = setup();
        scheduler.enqueue(Action::narrate(Duration::from_secs(1), "level up").non_blocking());
        scheduler.tick(&mut world, &config);

        assert!(scheduler.can_accept_input());
        assert!(scheduler.combat_active());
    }
}
