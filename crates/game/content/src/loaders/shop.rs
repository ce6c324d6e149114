//! Shop catalog loader.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tower_core::ShopItem;

use crate::loaders::{LoadResult, read_file};
use crate::oracle::ShopTable;

/// Shop catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopCatalog {
    pub items: Vec<ShopItem>,
}

/// Loader for the shop catalog from RON files.
pub struct ShopLoader;

impl ShopLoader {
    /// Load the shop catalog from a RON file.
    ///
    /// Item ids must be unique.
    pub fn load(path: &Path) -> LoadResult<ShopTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ShopTable> {
        let catalog: ShopCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse shop catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for item in &catalog.items {
            if !seen.insert(item.id.as_str()) {
                anyhow::bail!("duplicate shop item id '{}'", item.id);
            }
        }

        Ok(ShopTable::new(catalog.items))
    }
}
