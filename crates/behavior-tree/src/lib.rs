//! Minimal behavior tree for once-per-turn decisions.
//!
//! Every node finishes within the tick that evaluates it: there is no
//! `Running` state and no delta time. A tree is evaluated once per creature
//! per game turn against a caller-defined blackboard `C`.
//!
//! - [`Behavior`]: the node trait
//! - [`Status`]: `Success` or `Failure`
//! - Composites: [`Sequence`] (AND), [`Selector`] (OR)
//! - Decorator: [`Inverter`] (NOT)
//! - Leaves: [`Condition`] (read-only predicate), [`Task`] (blackboard write)
//!
//! The [`builder`] functions produce boxed [`Node`]s so trees read top-down.

pub mod builder;
pub mod composite;
pub mod decorator;
pub mod leaf;
pub mod node;
pub mod status;

pub use composite::{Selector, Sequence};
pub use decorator::Inverter;
pub use leaf::{Condition, Task};
pub use node::{Behavior, Node};
pub use status::Status;

/// Errors raised while assembling a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("{0} node requires at least one child")]
    NoChildren(&'static str),
}
