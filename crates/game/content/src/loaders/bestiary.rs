//! Bestiary loader.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tower_core::{ArchetypeId, EnemyArchetype};

use crate::loaders::{LoadResult, read_file};
use crate::oracle::BestiaryTable;

/// Bestiary structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestiaryCatalog {
    pub archetypes: HashMap<ArchetypeId, EnemyArchetype>,
}

/// Loader for enemy archetypes from RON files.
pub struct BestiaryLoader;

impl BestiaryLoader {
    /// Load the bestiary from a RON file.
    pub fn load(path: &Path) -> LoadResult<BestiaryTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BestiaryTable> {
        let catalog: BestiaryCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse bestiary RON: {}", e))?;

        for (id, archetype) in &catalog.archetypes {
            if archetype.max_hp == 0 {
                anyhow::bail!("archetype '{}' has no health", id);
            }
            if archetype.dice_sides == 0 {
                anyhow::bail!("archetype '{}' has a zero-sided die", id);
            }
        }

        Ok(BestiaryTable::new(catalog.archetypes))
    }
}
