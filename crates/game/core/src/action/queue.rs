use std::collections::VecDeque;

use super::Action;

/// Strict FIFO of pending actions: insertion order is execution order.
///
/// There is no cancellation, reordering or removal by index; the scheduler
/// only ever retires the head.
#[derive(Clone, Debug, Default)]
pub struct ActionQueue {
    actions: VecDeque<Action>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, action: Action) {
        self.actions.push_back(action);
    }

    pub fn head(&self) -> Option<&Action> {
        self.actions.front()
    }

    pub(crate) fn head_mut(&mut self) -> Option<&mut Action> {
        self.actions.front_mut()
    }

    pub(crate) fn retire_head(&mut self) -> Option<Action> {
        self.actions.pop_front()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }
}
