//! A simple autoplay policy.
//!
//! Heals when health drops below a threshold, otherwise attacks. In the shop
//! it patches up first and then spends the rest on bigger dice.

use async_trait::async_trait;
use tower_core::{BattleSession, Player, PlayerActionKind, ShopEffect, ShopItem};

use crate::api::{PlayerProvider, Result, ShopDecision};

#[derive(Clone, Copy, Debug)]
pub struct HeuristicProvider {
    /// Heal in battle when HP is below this percentage of max.
    pub heal_below_percent: u32,
    /// Buy healing in the shop when HP is below this percentage of max.
    pub restore_below_percent: u32,
}

impl HeuristicProvider {
    pub const DEFAULT_HEAL_BELOW_PERCENT: u32 = 35;
    pub const DEFAULT_RESTORE_BELOW_PERCENT: u32 = 70;

    pub fn new() -> Self {
        Self {
            heal_below_percent: Self::DEFAULT_HEAL_BELOW_PERCENT,
            restore_below_percent: Self::DEFAULT_RESTORE_BELOW_PERCENT,
        }
    }

    /// Chooses an action for the current battle state.
    pub fn decide(&self, session: &BattleSession) -> PlayerActionKind {
        if session.player().stats.health.percent() < self.heal_below_percent {
            PlayerActionKind::Heal
        } else {
            PlayerActionKind::Attack
        }
    }

    /// Picks the next purchase, if any.
    pub fn pick_item<'i>(&self, player: &Player, items: &'i [ShopItem]) -> Option<&'i ShopItem> {
        let affordable = || items.iter().filter(|item| item.cost <= player.gold());
        let health = player.stats.health;

        if health.percent() < self.restore_below_percent {
            let missing = health.maximum - health.current;
            // Cheapest item that covers the missing HP, else the biggest heal we can afford.
            let restores = |item: &&ShopItem| match item.effect {
                ShopEffect::RestoreHp(amount) => Some(amount.min(missing)),
                ShopEffect::FullRestore => Some(missing),
                _ => None,
            };
            let covering = affordable()
                .filter(|item| restores(item) == Some(missing))
                .min_by_key(|item| item.cost);
            let best = covering.or_else(|| affordable().max_by_key(|item| restores(item)));
            if let Some(item) = best.filter(|item| restores(item).is_some_and(|hp| hp > 0)) {
                return Some(item);
            }
        }

        affordable()
            .filter(|item| matches!(item.effect, ShopEffect::DiceSides(_)))
            .max_by_key(|item| match item.effect {
                ShopEffect::DiceSides(sides) => sides,
                _ => 0,
            })
    }
}

impl Default for HeuristicProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlayerProvider for HeuristicProvider {
    async fn choose_action(&self, session: &BattleSession) -> Result<PlayerActionKind> {
        Ok(self.decide(session))
    }

    async fn shop(&self, player: &Player, items: &[ShopItem]) -> Result<ShopDecision> {
        Ok(match self.pick_item(player, items) {
            Some(item) => ShopDecision::Buy(item.id.clone()),
            None => ShopDecision::Leave,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_content::ContentBundle;
    use tower_core::{CharacterClass, ClassOracle, ShopOracle};

    fn player(gold: u32, hp: u32) -> Player {
        let content = ContentBundle::builtin().unwrap();
        let profile = content.classes.profile(CharacterClass::Swordsman).unwrap();
        let mut player = Player::new(CharacterClass::Swordsman, profile);
        player.earn_gold(gold);
        player.stats = player.stats.with_current_hp(hp);
        player
    }

    #[test]
    fn wounded_player_buys_the_cheapest_sufficient_potion() {
        let content = ContentBundle::builtin().unwrap();
        let provider = HeuristicProvider::new();

        // 30 max, 10 current: a 30 HP potion covers the 20 missing.
        let pick = provider.pick_item(&player(60, 10), content.shop.items());
        assert_eq!(pick.map(|item| item.id.as_str()), Some("health-potion"));
    }

    #[test]
    fn healthy_player_buys_dice() {
        let content = ContentBundle::builtin().unwrap();
        let provider = HeuristicProvider::new();

        let pick = provider.pick_item(&player(60, 30), content.shop.items());
        assert_eq!(pick.map(|item| item.id.as_str()), Some("strength-potion"));
    }

    #[test]
    fn broke_player_leaves() {
        let content = ContentBundle::builtin().unwrap();
        let provider = HeuristicProvider::new();

        assert!(provider.pick_item(&player(10, 5), content.shop.items()).is_none());
    }
}
