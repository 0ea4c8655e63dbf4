use std::time::Duration;

use super::{Direction, EnemyKind, EntityId, Health, Inventory, ItemId, Position, SpecialAttack};

/// Capability shared by the player and enemies.
pub trait Combatant {
    fn id(&self) -> EntityId;
    fn position(&self) -> Position;
    fn facing(&self) -> Direction;
    fn health(&self) -> &Health;
    fn health_mut(&mut self) -> &mut Health;
    fn attack_power(&self) -> i32;
    fn defense_power(&self) -> i32;

    fn is_defeated(&self) -> bool {
        self.health().is_depleted()
    }
}

/// Countdown the renderer interpolates for a strike or hit animation.
///
/// Its facing is independent of the combatant's movement facing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationSignal {
    facing: Direction,
    remaining: Duration,
    total: Duration,
}

impl AnimationSignal {
    pub fn start(&mut self, facing: Direction, length: Duration) {
        self.facing = facing;
        self.remaining = length;
        self.total = length;
    }

    pub fn advance(&mut self, elapsed: Duration) {
        self.remaining = self.remaining.saturating_sub(elapsed);
    }

    pub fn is_active(&self) -> bool {
        !self.remaining.is_zero()
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Elapsed fraction in `[0, 1]`; `1.0` once finished or never started.
    pub fn progress(&self) -> f32 {
        if self.total.is_zero() {
            return 1.0;
        }
        1.0 - self.remaining.as_secs_f32() / self.total.as_secs_f32()
    }
}

/// Starting numbers for a new player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerStats {
    pub health: u32,
    pub attack: i32,
    pub defense: i32,
    pub power: i32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            health: 30,
            attack: 3,
            defense: 1,
            power: 8,
        }
    }
}

/// Item in the pack currently worn or wielded, with its cached bonus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipped {
    pub item: ItemId,
    pub bonus: i32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub position: Position,
    pub facing: Direction,
    pub health: Health,
    pub base_attack: i32,
    pub base_defense: i32,
    /// Flat strength added to every player attack.
    pub power: i32,
    pub level: u32,
    pub experience: u32,
    pub inventory: Inventory,
    pub weapon: Option<Equipped>,
    pub armor: Option<Equipped>,
    pub swing: AnimationSignal,
}

impl Player {
    pub fn new(position: Position, stats: PlayerStats) -> Self {
        Self {
            position,
            facing: Direction::Down,
            health: Health::new(stats.health),
            base_attack: stats.attack,
            base_defense: stats.defense,
            power: stats.power,
            level: 1,
            experience: 0,
            inventory: Inventory::new(),
            weapon: None,
            armor: None,
            swing: AnimationSignal::default(),
        }
    }

    /// Clears any equipment slot that refers to `item`.
    pub fn unequip(&mut self, item: ItemId) {
        if self.weapon.is_some_and(|slot| slot.item == item) {
            self.weapon = None;
        }
        if self.armor.is_some_and(|slot| slot.item == item) {
            self.armor = None;
        }
    }
}

impl Combatant for Player {
    fn id(&self) -> EntityId {
        EntityId::PLAYER
    }

    fn position(&self) -> Position {
        self.position
    }

    fn facing(&self) -> Direction {
        self.facing
    }

    fn health(&self) -> &Health {
        &self.health
    }

    fn health_mut(&mut self) -> &mut Health {
        &mut self.health
    }

    fn attack_power(&self) -> i32 {
        self.base_attack + self.weapon.map_or(0, |slot| slot.bonus)
    }

    fn defense_power(&self) -> i32 {
        self.base_defense + self.armor.map_or(0, |slot| slot.bonus)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub id: EntityId,
    pub kind: EnemyKind,
    pub position: Position,
    pub facing: Direction,
    pub health: Health,
    pub attack: i32,
    pub defense: i32,
    /// Experience awarded to whoever defeats it.
    pub experience: u32,
    /// Whether it has noticed the player and is pursuing them.
    pub discovered: bool,
    /// Wander heading carried between turns; `None` means roll a fresh one.
    pub wander: Direction,
    pub special: Option<SpecialAttack>,
    /// Strike animation toward the player.
    pub strike: AnimationSignal,
    /// Flinch animation after being hit.
    pub struck: AnimationSignal,
}

impl Enemy {
    pub fn new(id: EntityId, kind: EnemyKind, position: Position) -> Self {
        let template = kind.template();
        Self {
            id,
            kind,
            position,
            facing: Direction::None,
            health: Health::new(template.health),
            attack: template.attack,
            defense: template.defense,
            experience: template.experience,
            discovered: false,
            wander: Direction::None,
            special: template.special,
            strike: AnimationSignal::default(),
            struck: AnimationSignal::default(),
        }
    }

    /// Overrides the template numbers, mostly for scripted scenarios.
    pub fn with_stats(mut self, health: u32, attack: i32, defense: i32) -> Self {
        self.health = Health::new(health);
        self.attack = attack;
        self.defense = defense;
        self
    }

    pub fn with_special(mut self, special: Option<SpecialAttack>) -> Self {
        self.special = special;
        self
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

impl Combatant for Enemy {
    fn id(&self) -> EntityId {
        self.id
    }

    fn position(&self) -> Position {
        self.position
    }

    fn facing(&self) -> Direction {
        self.facing
    }

    fn health(&self) -> &Health {
        &self.health
    }

    fn health_mut(&mut self) -> &mut Health {
        &mut self.health
    }

    fn attack_power(&self) -> i32 {
        self.attack
    }

    fn defense_power(&self) -> i32 {
        self.defense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_progress_runs_from_zero_to_one() {
        let mut signal = AnimationSignal::default();
        assert_eq!(signal.progress(), 1.0);

        signal.start(Direction::Left, Duration::from_millis(200));
        assert!(signal.is_active());
        assert_eq!(signal.progress(), 0.0);

        signal.advance(Duration::from_millis(100));
        assert!((signal.progress() - 0.5).abs() < 1e-6);

        signal.advance(Duration::from_millis(500));
        assert!(!signal.is_active());
        assert_eq!(signal.facing(), Direction::Left);
    }

    #[test]
    fn equipment_feeds_attack_and_defense() {
        let mut player = Player::new(Position::ORIGIN, PlayerStats::default());
        assert_eq!(player.attack_power(), 3);

        player.weapon = Some(Equipped {
            item: ItemId(4),
            bonus: 2,
        });
        player.armor = Some(Equipped {
            item: ItemId(5),
            bonus: 1,
        });
        assert_eq!(player.attack_power(), 5);
        assert_eq!(player.defense_power(), 2);

        player.unequip(ItemId(4));
        assert_eq!(player.attack_power(), 3);
        assert_eq!(player.defense_power(), 2);
    }
}
