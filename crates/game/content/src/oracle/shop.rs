//! [`tower_core::ShopOracle`] over a fixed item list.
use tower_core::{ShopItem, ShopOracle};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShopTable {
    items: Vec<ShopItem>,
}

impl ShopTable {
    pub fn new(items: Vec<ShopItem>) -> Self {
        Self { items }
    }
}

impl ShopOracle for ShopTable {
    fn items(&self) -> &[ShopItem] {
        &self.items
    }
}
