//! Errors surfaced to the host when a player intention cannot be resolved.
//!
//! The simulation itself has no recoverable failures: grid lookups are
//! bounds-checked and effects address combatants by stable id. The only
//! fallible boundary is [`GameEngine::submit`](crate::GameEngine::submit),
//! which rejects an intent before anything is queued or a turn is spent.

use crate::state::{ItemId, Position};

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Temporary condition; the same intent may succeed on a later tick or
    /// from a different tile.
    Recoverable,

    /// The intent itself is invalid and should not be retried unchanged.
    Validation,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Reasons a [`PlayerIntent`](crate::PlayerIntent) is rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntentError {
    #[error("input is gated until the current action finishes")]
    InputBlocked,

    #[error("the player has been defeated")]
    PlayerDefeated,

    #[error("intent requires a direction")]
    NoDirection,

    #[error("destination {destination:?} is blocked")]
    Blocked { destination: Position },

    #[error("item {0} is not in the inventory")]
    UnknownItem(ItemId),

    #[error("nothing to pick up at {position:?}")]
    NothingToPickUp { position: Position },

    #[error("inventory is full")]
    InventoryFull,

    #[error("item {0} cannot be equipped")]
    NotEquippable(ItemId),

    #[error("item {0} has no use effect")]
    NotUsable(ItemId),
}

impl IntentError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InputBlocked | Self::Blocked { .. } | Self::InventoryFull => {
                ErrorSeverity::Recoverable
            }
            Self::PlayerDefeated
            | Self::NoDirection
            | Self::UnknownItem(_)
            | Self::NothingToPickUp { .. }
            | Self::NotEquippable(_)
            | Self::NotUsable(_) => ErrorSeverity::Validation,
        }
    }

    /// Stable identifier for logs and tests.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InputBlocked => "INTENT_INPUT_BLOCKED",
            Self::PlayerDefeated => "INTENT_PLAYER_DEFEATED",
            Self::NoDirection => "INTENT_NO_DIRECTION",
            Self::Blocked { .. } => "INTENT_BLOCKED",
            Self::UnknownItem(_) => "INTENT_UNKNOWN_ITEM",
            Self::NothingToPickUp { .. } => "INTENT_NOTHING_TO_PICK_UP",
            Self::InventoryFull => "INTENT_INVENTORY_FULL",
            Self::NotEquippable(_) => "INTENT_NOT_EQUIPPABLE",
            Self::NotUsable(_) => "INTENT_NOT_USABLE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_prefixed_upper_snake() {
        let errors = [
            IntentError::InputBlocked,
            IntentError::PlayerDefeated,
            IntentError::NoDirection,
            IntentError::Blocked {
                destination: Position::ORIGIN,
            },
            IntentError::UnknownItem(ItemId(1)),
            IntentError::NothingToPickUp {
                position: Position::ORIGIN,
            },
            IntentError::InventoryFull,
            IntentError::NotEquippable(ItemId(1)),
            IntentError::NotUsable(ItemId(1)),
        ];

        for err in errors {
            let code = err.error_code();
            assert!(code.starts_with("INTENT_"), "{code}");
            assert!(code.chars().all(|c| c.is_ascii_uppercase() || c == '_'), "{code}");
        }
        assert_eq!(IntentError::InputBlocked.error_code(), "INTENT_INPUT_BLOCKED");
    }
}
