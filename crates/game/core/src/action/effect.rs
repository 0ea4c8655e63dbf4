use crate::combat::Projectile;
use crate::state::{Direction, EntityId, Item, ItemId, Position};

/// Deferred state change carried by an [`Action`](super::Action).
///
/// Applied by the scheduler exactly when its action becomes the head of the
/// queue. Every variant re-resolves its targets by id at that moment.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Effect {
    #[default]
    None,

    /// Player blow on an enemy; `from` is the direction the blow travels.
    Damage {
        target: EntityId,
        amount: u32,
        from: Direction,
    },

    /// Shows a thrown item in flight.
    Launch(Projectile),

    /// Thrown item comes to rest, optionally after striking an enemy.
    Land {
        item: Item,
        rest: Position,
        struck: Option<(EntityId, u32)>,
    },

    PickUp { item: ItemId },
    Drop { item: ItemId },
    Equip { item: ItemId },
    Use { item: ItemId },
}
