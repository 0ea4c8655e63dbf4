//! Enemy templates.

use crate::env::RandomSource;

/// Extra effect an enemy may roll for when it strikes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialEffect {
    /// The blow ignores the player's defense.
    Pierce,
    /// The attacker heals by this much after landing the blow.
    Drain(u32),
}

/// Special attack with its trigger chance in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialAttack {
    pub effect: SpecialEffect,
    pub percent: u32,
}

/// Base numbers stamped onto a freshly spawned enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnemyTemplate {
    pub health: u32,
    pub attack: i32,
    pub defense: i32,
    pub experience: u32,
    pub special: Option<SpecialAttack>,
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EnemyKind {
    Slime,
    Bat,
    Goblin,
    Skeleton,
    Orc,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 5] = [
        EnemyKind::Slime,
        EnemyKind::Bat,
        EnemyKind::Goblin,
        EnemyKind::Skeleton,
        EnemyKind::Orc,
    ];

    pub fn name(self) -> &'static str {
        self.into()
    }

    pub const fn template(self) -> EnemyTemplate {
        match self {
            EnemyKind::Slime => EnemyTemplate {
                health: 5,
                attack: 2,
                defense: 0,
                experience: 2,
                special: None,
            },
            EnemyKind::Bat => EnemyTemplate {
                health: 4,
                attack: 3,
                defense: 0,
                experience: 3,
                special: Some(SpecialAttack {
                    effect: SpecialEffect::Drain(1),
                    percent: 30,
                }),
            },
            EnemyKind::Goblin => EnemyTemplate {
                health: 9,
                attack: 4,
                defense: 1,
                experience: 5,
                special: None,
            },
            EnemyKind::Skeleton => EnemyTemplate {
                health: 14,
                attack: 5,
                defense: 3,
                experience: 9,
                special: Some(SpecialAttack {
                    effect: SpecialEffect::Pierce,
                    percent: 20,
                }),
            },
            EnemyKind::Orc => EnemyTemplate {
                health: 20,
                attack: 7,
                defense: 2,
                experience: 14,
                special: None,
            },
        }
    }

    /// Draws a kind uniformly from the shared generator.
    pub fn roll(rng: &mut (impl RandomSource + ?Sized)) -> Self {
        Self::ALL[rng.pick_index(Self::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;

    #[test]
    fn roll_indexes_the_table() {
        let mut rng = ScriptedRng::new([0, 3, 7]);
        assert_eq!(EnemyKind::roll(&mut rng), EnemyKind::Slime);
        assert_eq!(EnemyKind::roll(&mut rng), EnemyKind::Skeleton);
        assert_eq!(EnemyKind::roll(&mut rng), EnemyKind::Goblin);
    }

    #[test]
    fn names_are_snake_case() {
        assert_eq!(EnemyKind::Goblin.name(), "goblin");
        assert_eq!(EnemyKind::Orc.to_string(), "orc");
        assert_eq!("SKELETON".parse::<EnemyKind>(), Ok(EnemyKind::Skeleton));
    }
}
