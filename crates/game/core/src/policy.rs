//! Enemy decision policy.
//!
//! Each enemy turn the scheduler asks an [`EnemyPolicy`] what the acting enemy
//! does. Enemies only ever target the player, so the decision is just
//! attack or heal.

use crate::env::RandomSource;
use crate::state::EnemyInstance;

/// Probability that an enemy attacks instead of healing.
pub const ATTACK_CHANCE: f64 = 0.7;

/// What an enemy does on its turn.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EnemyAction {
    /// Roll the enemy's die against the player.
    Attack,
    /// Roll the enemy's die and restore half of it to itself.
    Heal,
}

/// Chooses an action for the enemy whose turn it is.
pub trait EnemyPolicy: Send + Sync {
    fn decide(&self, rng: &mut dyn RandomSource, enemy: &EnemyInstance) -> EnemyAction;
}

/// The stock policy: one uniform draw, attack below [`ATTACK_CHANCE`],
/// heal otherwise. Identical for every archetype.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedOddsPolicy;

impl EnemyPolicy for FixedOddsPolicy {
    fn decide(&self, rng: &mut dyn RandomSource, _enemy: &EnemyInstance) -> EnemyAction {
        if rng.next_unit() < ATTACK_CHANCE {
            EnemyAction::Attack
        } else {
            EnemyAction::Heal
        }
    }
}
