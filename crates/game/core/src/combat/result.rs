//! Combat result types.

use crate::error::{ErrorSeverity, GameError};

/// Result of one attack against a single defender.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    /// Damage rolled (and applied, before clamping at zero HP).
    pub damage: u32,
    pub hp_before: u32,
    pub hp_after: u32,
    /// True only if this strike took the defender from alive to 0 HP.
    pub defeated: bool,
}

/// Result of one heal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealResult {
    /// Raw die roll.
    pub roll: u32,
    /// Amount reported to the player: `ceil((roll + heal_bonus) / 2)`.
    pub amount: u32,
    pub hp_before: u32,
    pub hp_after: u32,
}

impl HealResult {
    /// HP actually gained after capping at the maximum.
    pub fn restored(&self) -> u32 {
        self.hp_after - self.hp_before
    }
}

/// A player attack, including which enemy it hit and any gold earned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerStrike {
    pub target: usize,
    pub attack: AttackResult,
    pub gold_awarded: Option<u32>,
}

/// Errors raised while resolving combat.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    /// Every enemy in the roster is already at 0 HP.
    #[error("no living enemy to target")]
    NoLivingTarget,
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // The scheduler treats this as a no-op followed by an outcome check.
            CombatError::NoLivingTarget => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            CombatError::NoLivingTarget => "COMBAT_NO_LIVING_TARGET",
        }
    }
}
