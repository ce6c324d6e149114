//! Asynchronous abstraction for sourcing player intent.
//!
//! Runtime users plug in [`PlayerProvider`] implementations so a run can be
//! played with human input, scripted fixtures, or a simple policy.
use async_trait::async_trait;
use tower_core::{BattleSession, PlayerActionKind, Player, ShopItem};

use super::errors::Result;

/// What the player does while the shop is open.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShopDecision {
    /// Buy the item with this id.
    Buy(String),
    /// Close the shop and climb to the next floor.
    Leave,
}

/// Trait for providing player decisions based on the current run state.
///
/// Different implementations can handle:
/// - Player input (from a terminal)
/// - Scripted/replayed decisions
/// - Simple autoplay policies
#[async_trait]
pub trait PlayerProvider: Send + Sync {
    /// Choose the action for the player's turn.
    async fn choose_action(&self, session: &BattleSession) -> Result<PlayerActionKind>;

    /// Decide what to do in the shop. Called repeatedly until it returns
    /// [`ShopDecision::Leave`].
    async fn shop(&self, player: &Player, items: &[ShopItem]) -> Result<ShopDecision>;
}
