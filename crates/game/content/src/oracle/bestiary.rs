//! [`tower_core::BestiaryOracle`] backed by an in-memory map.
use std::collections::HashMap;

use tower_core::{ArchetypeId, BestiaryOracle, EnemyArchetype};

/// BestiaryOracle implementation with static archetype definitions
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BestiaryTable {
    archetypes: HashMap<ArchetypeId, EnemyArchetype>,
}

impl BestiaryTable {
    pub fn new(archetypes: HashMap<ArchetypeId, EnemyArchetype>) -> Self {
        Self { archetypes }
    }

    /// Add or replace an archetype
    pub fn insert(&mut self, id: impl Into<ArchetypeId>, archetype: EnemyArchetype) {
        self.archetypes.insert(id.into(), archetype);
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }
}

impl BestiaryOracle for BestiaryTable {
    fn archetype(&self, id: &ArchetypeId) -> Option<&EnemyArchetype> {
        self.archetypes.get(id)
    }
}
