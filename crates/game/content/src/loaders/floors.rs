//! Floor table loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tower_core::FloorDefinition;

use crate::loaders::{LoadResult, read_file};
use crate::oracle::FloorTable;

/// Floor table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorCatalog {
    pub floors: Vec<FloorDefinition>,
}

/// Loader for the floor table from RON files.
pub struct FloorLoader;

impl FloorLoader {
    /// Load the floor table from a RON file.
    pub fn load(path: &Path) -> LoadResult<FloorTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<FloorTable> {
        let catalog: FloorCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse floor table RON: {}", e))?;

        if catalog.floors.is_empty() {
            anyhow::bail!("floor table defines no floors");
        }

        Ok(FloorTable::new(catalog.floors))
    }
}
