//! The node trait shared by every tree element.

use crate::Status;

/// A tree node evaluated against a blackboard of type `C`.
///
/// Conditions should only read the blackboard. Tasks record their outcome
/// on it; the tree itself never touches game state.
pub trait Behavior<C> {
    fn tick(&self, ctx: &mut C) -> Status;
}

/// Boxed node, the unit composites are built from.
pub type Node<C> = Box<dyn Behavior<C>>;

impl<C> Behavior<C> for Node<C> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
