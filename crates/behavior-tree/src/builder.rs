//! Shorthands that box nodes so a tree can be written as nested calls.
//!
//! Composite builders panic on an empty child list; that is a malformed tree
//! literal, not a runtime condition. Use [`Sequence::new`]/[`Selector::new`]
//! directly to handle it as an error.

use crate::{Condition, Inverter, Node, Selector, Sequence, Status, Task};

pub fn sequence<C: 'static>(children: Vec<Node<C>>) -> Node<C> {
    match Sequence::new(children) {
        Ok(node) => Box::new(node),
        Err(err) => panic!("{err}"),
    }
}

pub fn selector<C: 'static>(children: Vec<Node<C>>) -> Node<C> {
    match Selector::new(children) {
        Ok(node) => Box::new(node),
        Err(err) => panic!("{err}"),
    }
}

pub fn inverter<C: 'static>(child: Node<C>) -> Node<C> {
    Box::new(Inverter::new(child))
}

pub fn condition<C, F>(predicate: F) -> Node<C>
where
    C: 'static,
    F: Fn(&C) -> bool + 'static,
{
    Box::new(Condition::new(predicate))
}

pub fn task<C, F>(step: F) -> Node<C>
where
    C: 'static,
    F: Fn(&mut C) -> Status + 'static,
{
    Box::new(Task::new(step))
}
