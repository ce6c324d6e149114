//! Shop purchase rules.
//!
//! The shop opens between floors. Buying an item checks the player's gold,
//! deducts the cost, and applies the item's effect with the usual HP
//! clamping. Rendering the shop is the host's job.

use crate::env::{ShopEffect, ShopItem};
use crate::error::{ErrorSeverity, GameError};
use crate::state::Player;

/// Errors raised by shop commands.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShopError {
    #[error("not enough gold: item costs {cost}, player has {gold}")]
    InsufficientGold { cost: u32, gold: u32 },

    #[error("unknown shop item '{0}'")]
    UnknownItem(String),

    #[error("the shop is only open between floors (run is in {stage})")]
    NotInShop { stage: String },
}

impl GameError for ShopError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ShopError::InsufficientGold { .. } | ShopError::UnknownItem(_) => {
                ErrorSeverity::Validation
            }
            ShopError::NotInShop { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ShopError::InsufficientGold { .. } => "SHOP_INSUFFICIENT_GOLD",
            ShopError::UnknownItem(_) => "SHOP_UNKNOWN_ITEM",
            ShopError::NotInShop { .. } => "SHOP_NOT_IN_SHOP",
        }
    }
}

/// Buys `item` for `player`. Returns the gold left afterwards.
///
/// # Errors
///
/// [`ShopError::InsufficientGold`] if the player cannot afford it; gold and
/// stats are untouched.
pub fn purchase(player: &mut Player, item: &ShopItem) -> Result<u32, ShopError> {
    if !player.spend_gold(item.cost) {
        return Err(ShopError::InsufficientGold {
            cost: item.cost,
            gold: player.gold(),
        });
    }
    apply_effect(player, item.effect);
    Ok(player.gold())
}

/// Applies an item effect to the player.
pub fn apply_effect(player: &mut Player, effect: ShopEffect) {
    let stats = &mut player.stats;
    match effect {
        ShopEffect::RestoreHp(amount) => {
            stats.health.restore(amount);
        }
        ShopEffect::FullRestore => stats.health.refill(),
        ShopEffect::MaxHp(amount) => {
            stats.health.raise_maximum(amount);
            stats.health.restore(amount);
        }
        ShopEffect::HealBonus(amount) => {
            stats.heal_bonus = stats.heal_bonus.saturating_add(amount);
        }
        ShopEffect::DiceSides(amount) => stats.add_dice_sides(amount),
        ShopEffect::Resilience { max_hp, heal_bonus } => {
            stats.health.raise_maximum(max_hp);
            stats.health.restore(max_hp);
            stats.heal_bonus = stats.heal_bonus.saturating_add(heal_bonus);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CharacterClass, ClassProfile};

    fn mage(gold: u32, hp: u32) -> Player {
        let mut player = Player::new(
            CharacterClass::Mage,
            ClassProfile {
                max_hp: 22,
                heal_bonus: 2,
                dice_sides: 20,
            },
        );
        player.earn_gold(gold);
        player.stats = player.stats.with_current_hp(hp);
        player
    }

    fn item(cost: u32, effect: ShopEffect) -> ShopItem {
        ShopItem {
            id: "test".into(),
            name: "Test".into(),
            description: String::new(),
            cost,
            effect,
        }
    }

    #[test]
    fn potion_restores_up_to_max() {
        let mut player = mage(30, 10);
        let left = purchase(&mut player, &item(25, ShopEffect::RestoreHp(30))).unwrap();
        assert_eq!(left, 5);
        assert_eq!(player.stats.current_hp(), 22);
    }

    #[test]
    fn insufficient_gold_changes_nothing() {
        let mut player = mage(20, 10);
        let before = player.clone();

        let err = purchase(&mut player, &item(25, ShopEffect::FullRestore)).unwrap_err();

        assert_eq!(err, ShopError::InsufficientGold { cost: 25, gold: 20 });
        assert_eq!(player, before);
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn resilience_raises_max_current_and_bonus() {
        let mut player = mage(100, 22);
        purchase(
            &mut player,
            &item(
                75,
                ShopEffect::Resilience {
                    max_hp: 10,
                    heal_bonus: 2,
                },
            ),
        )
        .unwrap();

        assert_eq!(player.stats.max_hp(), 32);
        assert_eq!(player.stats.current_hp(), 32);
        assert_eq!(player.stats.heal_bonus, 4);
    }

    #[test]
    fn armor_heals_by_the_raised_amount() {
        let mut player = mage(40, 10);
        purchase(&mut player, &item(40, ShopEffect::MaxHp(5))).unwrap();
        assert_eq!(player.stats.max_hp(), 27);
        assert_eq!(player.stats.current_hp(), 15);
        assert_eq!(player.gold(), 0);
    }

    #[test]
    fn dice_upgrades_stack() {
        let mut player = mage(200, 22);
        purchase(&mut player, &item(60, ShopEffect::DiceSides(2))).unwrap();
        purchase(&mut player, &item(45, ShopEffect::DiceSides(3))).unwrap();
        assert_eq!(player.stats.dice_sides(), 25);
    }
}
