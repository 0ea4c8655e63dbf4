//! Composite nodes: [`Sequence`] and [`Selector`].
//!
//! Both evaluate children left to right and short-circuit, so child order
//! is the priority order of the decision.

use crate::{Behavior, Node, Status, TreeError};

/// Succeeds only if every child succeeds; stops at the first failure.
pub struct Sequence<C> {
    children: Vec<Node<C>>,
}

impl<C> Sequence<C> {
    pub fn new(children: Vec<Node<C>>) -> Result<Self, TreeError> {
        if children.is_empty() {
            return Err(TreeError::NoChildren("sequence"));
        }
        Ok(Self { children })
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_failure() {
                return Status::Failure;
            }
        }
        Status::Success
    }
}

/// Succeeds at the first child that succeeds; fails if all of them fail.
pub struct Selector<C> {
    children: Vec<Node<C>>,
}

impl<C> Selector<C> {
    pub fn new(children: Vec<Node<C>>) -> Result<Self, TreeError> {
        if children.is_empty() {
            return Err(TreeError::NoChildren("selector"));
        }
        Ok(Self { children })
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_success() {
                return Status::Success;
            }
        }
        Status::Failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{condition, task};

    #[derive(Default)]
    struct Trail {
        visited: Vec<&'static str>,
    }

    fn mark(label: &'static str, result: Status) -> Node<Trail> {
        task(move |ctx: &mut Trail| {
            ctx.visited.push(label);
            result
        })
    }

    #[test]
    fn sequence_runs_until_first_failure() {
        let seq = Sequence::new(vec![
            mark("a", Status::Success),
            mark("b", Status::Failure),
            mark("c", Status::Success),
        ])
        .unwrap();

        let mut trail = Trail::default();
        assert_eq!(seq.tick(&mut trail), Status::Failure);
        assert_eq!(trail.visited, vec!["a", "b"]);
    }

    #[test]
    fn selector_stops_at_first_success() {
        let sel = Selector::new(vec![
            condition(|_: &Trail| false),
            mark("b", Status::Success),
            mark("c", Status::Success),
        ])
        .unwrap();

        let mut trail = Trail::default();
        assert_eq!(sel.tick(&mut trail), Status::Success);
        assert_eq!(trail.visited, vec!["b"]);
    }

    #[test]
    fn selector_fails_when_every_child_fails() {
        let sel = Selector::new(vec![mark("a", Status::Failure), mark("b", Status::Failure)])
            .unwrap();

        let mut trail = Trail::default();
        assert_eq!(sel.tick(&mut trail), Status::Failure);
        assert_eq!(trail.visited, vec!["a", "b"]);
    }

    #[test]
    fn empty_composites_are_rejected() {
        assert_eq!(
            Sequence::<Trail>::new(Vec::new()).err(),
            Some(TreeError::NoChildren("sequence"))
        );
        assert_eq!(
            Selector::<Trail>::new(Vec::new()).err(),
            Some(TreeError::NoChildren("selector"))
        );
    }
}
