//! Provider that replays a fixed list of decisions.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tower_core::{BattleSession, Player, PlayerActionKind, ShopItem};

use crate::api::{PlayerProvider, Result, RuntimeError, ShopDecision};

/// Replays queued actions and shop decisions in order.
///
/// Running out of battle actions is an error; running out of shop decisions
/// leaves the shop.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    actions: Mutex<VecDeque<PlayerActionKind>>,
    shop: Mutex<VecDeque<ShopDecision>>,
}

impl ScriptedProvider {
    pub fn new(actions: impl IntoIterator<Item = PlayerActionKind>) -> Self {
        Self {
            actions: Mutex::new(actions.into_iter().collect()),
            shop: Mutex::new(VecDeque::new()),
        }
    }

    pub fn with_shop(mut self, decisions: impl IntoIterator<Item = ShopDecision>) -> Self {
        self.shop = Mutex::new(decisions.into_iter().collect());
        self
    }

    pub async fn remaining_actions(&self) -> usize {
        self.actions.lock().await.len()
    }
}

#[async_trait]
impl PlayerProvider for ScriptedProvider {
    async fn choose_action(&self, _session: &BattleSession) -> Result<PlayerActionKind> {
        self.actions
            .lock()
            .await
            .pop_front()
            .ok_or(RuntimeError::ProviderExhausted)
    }

    async fn shop(&self, _player: &Player, _items: &[ShopItem]) -> Result<ShopDecision> {
        Ok(self
            .shop
            .lock()
            .await
            .pop_front()
            .unwrap_or(ShopDecision::Leave))
    }
}
