/// Items on sale during the shop interlude.
pub trait ShopOracle: Send + Sync {
    /// All items, in display order.
    fn items(&self) -> &[ShopItem];

    fn item(&self, id: &str) -> Option<&ShopItem> {
        self.items().iter().find(|item| item.id == id)
    }
}

/// A purchasable upgrade.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShopItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cost: u32,
    pub effect: ShopEffect,
}

/// What an item does to the player when bought.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShopEffect {
    /// Restores HP, capped at the maximum.
    RestoreHp(u32),
    /// Restores HP to the maximum.
    FullRestore,
    /// Raises max HP and heals by the same amount.
    MaxHp(u32),
    HealBonus(u32),
    DiceSides(u32),
    /// Raises max HP (healing by the same amount) and the heal bonus.
    Resilience { max_hp: u32, heal_bonus: u32 },
}
