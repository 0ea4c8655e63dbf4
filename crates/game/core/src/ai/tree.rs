//! The enemy decision tree.
//!
//! ```text
//! Selector
//!  ├─ Sequence: adjacent, NOT swing_blocked → Strike
//!  ├─ Sequence: discovered                  → Chase
//!  └─ Wander
//! ```
//!
//! An adjacent enemy is always discovered, so a blocked swing falls through
//! to a chase step.

use behavior_tree::builder::{condition, inverter, selector, sequence, task};
use behavior_tree::{Node, Status};

use super::{Blackboard, Decision};

pub type EnemyTree = Node<Blackboard>;

fn choose(decision: Decision) -> EnemyTree {
    task(move |board: &mut Blackboard| {
        board.decide(decision);
        Status::Success
    })
}

pub fn enemy_tree() -> EnemyTree {
    selector(vec![
        sequence(vec![
            condition(|board: &Blackboard| board.adjacent),
            inverter(condition(|board: &Blackboard| board.swing_blocked)),
            choose(Decision::Strike),
        ]),
        sequence(vec![
            condition(|board: &Blackboard| board.discovered),
            choose(Decision::Chase),
        ]),
        choose(Decision::Wander),
    ])
}
