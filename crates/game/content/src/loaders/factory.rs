//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use tower_core::GameConfig;

use crate::ContentBundle;
use crate::loaders::{
    BestiaryLoader, ClassLoader, ConfigLoader, FloorLoader, LoadResult, ShopLoader,
};
use crate::oracle::{BestiaryTable, ClassTable, FloorTable, ShopTable};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── classes.ron
/// ├── bestiary.ron
/// ├── floors.ron
/// └── shop.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load class profiles from `classes.ron`.
    pub fn load_classes(&self) -> LoadResult<ClassTable> {
        ClassLoader::load(&self.data_dir.join("classes.ron"))
    }

    /// Load enemy archetypes from `bestiary.ron`.
    pub fn load_bestiary(&self) -> LoadResult<BestiaryTable> {
        BestiaryLoader::load(&self.data_dir.join("bestiary.ron"))
    }

    /// Load the floor table from `floors.ron`.
    pub fn load_floors(&self) -> LoadResult<FloorTable> {
        FloorLoader::load(&self.data_dir.join("floors.ron"))
    }

    /// Load the shop catalog from `shop.ron`.
    pub fn load_shop(&self) -> LoadResult<ShopTable> {
        ShopLoader::load(&self.data_dir.join("shop.ron"))
    }

    /// Load and cross-check every file.
    pub fn load_bundle(&self) -> LoadResult<ContentBundle> {
        let bundle = ContentBundle {
            config: self.load_config()?,
            classes: self.load_classes()?,
            bestiary: self.load_bestiary()?,
            floors: self.load_floors()?,
            shop: self.load_shop()?,
        };
        bundle.validate()?;
        Ok(bundle)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
