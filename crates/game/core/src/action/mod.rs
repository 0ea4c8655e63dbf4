//! Paced actions and the FIFO queue that holds them.
//!
//! An [`Action`] pairs a display duration and a narration line with a
//! deferred [`Effect`]. Effects are plain data naming their targets by id,
//! so an action queued before an enemy died cannot reach a stale slot.
//! Anything that should happen instantly, without a message or pause, is
//! applied to the world directly instead of being queued.

mod effect;
mod queue;

pub use effect::Effect;
pub use queue::ActionQueue;

use std::time::Duration;

/// Scheduled, time-paced unit of game-state mutation plus its message.
#[derive(Clone, Debug, PartialEq)]
pub struct Action {
    duration: Duration,
    message: String,
    effect: Effect,
    non_blocking: bool,
}

impl Action {
    pub fn new(duration: Duration, message: impl Into<String>, effect: Effect) -> Self {
        Self {
            duration,
            message: message.into(),
            effect,
            non_blocking: false,
        }
    }

    /// Message only, no state change.
    pub fn narrate(duration: Duration, message: impl Into<String>) -> Self {
        Self::new(duration, message, Effect::None)
    }

    /// Empty message and no effect; keeps pacing uniform for whiffs.
    pub fn idle(duration: Duration) -> Self {
        Self::new(duration, String::new(), Effect::None)
    }

    /// Lets new player input through while this action is at the head.
    pub fn non_blocking(mut self) -> Self {
        self.non_blocking = true;
        self
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    pub fn is_non_blocking(&self) -> bool {
        self.non_blocking
    }

    /// Moves the effect out, leaving [`Effect::None`] behind so a second
    /// call cannot apply it again.
    pub(crate) fn take_effect(&mut self) -> Effect {
        std::mem::take(&mut self.effect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EntityId;

    #[test]
    fn effect_can_only_be_taken_once() {
        let mut action = Action::new(
            Duration::ZERO,
            "hit",
            Effect::Damage {
                target: EntityId(3),
                amount: 4,
                from: crate::state::Direction::Left,
            },
        );

        assert!(matches!(action.take_effect(), Effect::Damage { amount: 4, .. }));
        assert_eq!(action.take_effect(), Effect::None);
        assert_eq!(action.message(), "hit");
    }

    #[test]
    fn idle_action_is_silent_and_blocking() {
        let action = Action::idle(Duration::from_millis(250));
        assert!(action.message().is_empty());
        assert!(!action.is_non_blocking());
        assert!(Action::narrate(Duration::ZERO, "x").non_blocking().is_non_blocking());
    }
}
