//! Content loaders for reading game data from files.
//!
//! This module provides loaders that convert RON/TOML files into oracle
//! implementations. Each loader can also parse text directly, which is how
//! the built-in content embedded in the binary is read.

pub mod bestiary;
pub mod classes;
pub mod config;
pub mod factory;
pub mod floors;
pub mod shop;

pub use bestiary::{BestiaryCatalog, BestiaryLoader};
pub use classes::{ClassCatalog, ClassEntry, ClassLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use floors::{FloorCatalog, FloorLoader};
pub use shop::{ShopCatalog, ShopLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
