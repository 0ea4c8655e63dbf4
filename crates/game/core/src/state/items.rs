use arrayvec::ArrayVec;

use super::{ItemId, Position};
use crate::config::GameConfig;

/// What drinking, reading or eating an item does once its use resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UseEffect {
    /// Restores health, clamped to the maximum.
    Heal(u32),
    /// Permanently adds to the player's power stat.
    Strengthen(u32),
    /// Raises maximum health and heals by the same amount.
    Fortify(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Weapon { attack: i32 },
    Armor { defense: i32 },
    Consumable(UseEffect),
    /// Built to be thrown; `damage` is added on a ranged hit.
    Throwable { damage: i32 },
}

impl ItemKind {
    /// Extra damage when the item strikes an enemy in flight.
    pub fn thrown_bonus(&self) -> i32 {
        match self {
            ItemKind::Throwable { damage } => *damage,
            _ => 0,
        }
    }

    pub fn is_equippable(&self) -> bool {
        matches!(self, ItemKind::Weapon { .. } | ItemKind::Armor { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
}

/// Item lying on the floor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroundItem {
    pub item: Item,
    pub position: Position,
}

/// Fixed-capacity pack carried by the player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: ArrayVec<Item, { GameConfig::INVENTORY_CAPACITY }>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item, handing it back if the pack is full.
    pub fn insert(&mut self, item: Item) -> Result<(), Item> {
        self.items.try_push(item).map_err(|err| err.element())
    }

    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dagger(id: u32) -> Item {
        Item {
            id: ItemId(id),
            name: "dagger".into(),
            kind: ItemKind::Throwable { damage: 2 },
        }
    }

    #[test]
    fn full_pack_returns_the_item() {
        let mut pack = Inventory::new();
        for id in 0..GameConfig::INVENTORY_CAPACITY as u32 {
            pack.insert(dagger(id)).unwrap();
        }
        assert!(pack.is_full());

        let rejected = pack.insert(dagger(99)).unwrap_err();
        assert_eq!(rejected.id, ItemId(99));
        assert_eq!(pack.len(), GameConfig::INVENTORY_CAPACITY);
    }

    #[test]
    fn remove_takes_exactly_one() {
        let mut pack = Inventory::new();
        pack.insert(dagger(1)).unwrap();
        pack.insert(dagger(2)).unwrap();

        assert_eq!(pack.remove(ItemId(1)).map(|item| item.id), Some(ItemId(1)));
        assert!(pack.remove(ItemId(1)).is_none());
        assert!(pack.contains(ItemId(2)));
    }
}
