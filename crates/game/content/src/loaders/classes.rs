//! Class profile loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tower_core::{CharacterClass, ClassProfile};

use crate::loaders::{LoadResult, read_file};
use crate::oracle::ClassTable;

/// One class row in `classes.ron`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClassEntry {
    pub class: CharacterClass,
    pub max_hp: u32,
    pub heal_bonus: u32,
    pub dice_sides: u32,
}

impl From<ClassEntry> for ClassProfile {
    fn from(entry: ClassEntry) -> Self {
        ClassProfile {
            max_hp: entry.max_hp,
            heal_bonus: entry.heal_bonus,
            dice_sides: entry.dice_sides,
        }
    }
}

/// Class list structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassCatalog {
    pub classes: Vec<ClassEntry>,
}

/// Loader for class profiles from RON files.
pub struct ClassLoader;

impl ClassLoader {
    /// Load class profiles from a RON file.
    pub fn load(path: &Path) -> LoadResult<ClassTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ClassTable> {
        let catalog: ClassCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse class RON: {}", e))?;

        for entry in &catalog.classes {
            if entry.max_hp == 0 {
                anyhow::bail!("class '{}' has no health", entry.class);
            }
            if entry.dice_sides == 0 {
                anyhow::bail!("class '{}' has a zero-sided die", entry.class);
            }
        }

        Ok(catalog
            .classes
            .into_iter()
            .map(|entry| (entry.class, ClassProfile::from(entry)))
            .collect())
    }
}
