//! Closure-backed leaf nodes.
//!
//! Most decision trees only need two kinds of leaves: a yes/no question about
//! the blackboard and a step that records a choice on it. Wrapping closures
//! avoids a unit struct plus trait impl per leaf.

use crate::{Behavior, Status};

/// Read-only predicate over the blackboard.
pub struct Condition<F> {
    predicate: F,
}

impl<F> Condition<F> {
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<C, F> Behavior<C> for Condition<F>
where
    F: Fn(&C) -> bool,
{
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        Status::from_bool((self.predicate)(ctx))
    }
}

/// Step that may write to the blackboard and reports its own status.
pub struct Task<F> {
    step: F,
}

impl<F> Task<F> {
    pub fn new(step: F) -> Self {
        Self { step }
    }
}

impl<C, F> Behavior<C> for Task<F>
where
    F: Fn(&mut C) -> Status,
{
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (self.step)(ctx)
    }
}
