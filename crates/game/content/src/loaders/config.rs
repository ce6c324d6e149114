//! Game configuration loader.

use std::path::Path;

use tower_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig`] defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.starting_floor == 0 {
            anyhow::bail!("starting_floor must be at least 1");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let config = ConfigLoader::parse("floor_dice_bonus = 5").unwrap();
        assert_eq!(config.floor_dice_bonus, 5);
        assert_eq!(config.starting_floor, GameConfig::DEFAULT_STARTING_FLOOR);
    }

    #[test]
    fn floor_zero_is_rejected() {
        assert!(ConfigLoader::parse("starting_floor = 0").is_err());
    }
}
