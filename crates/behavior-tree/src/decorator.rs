//! Decorator nodes.

use crate::{Behavior, Node, Status};

/// Negates its child's result.
pub struct Inverter<C> {
    child: Node<C>,
}

impl<C> Inverter<C> {
    pub fn new(child: Node<C>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }
}
