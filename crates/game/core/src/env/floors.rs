use crate::state::ArchetypeId;

/// Lookup from floor number to its enemy roster.
pub trait FloorOracle: Send + Sync {
    /// Returns the definition for a 1-based floor number.
    fn floor(&self, number: u32) -> Option<&FloorDefinition>;

    /// Number of floors in the table.
    fn floor_count(&self) -> u32;
}

/// Static description of one floor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorDefinition {
    /// Archetypes to instantiate, in roster order.
    pub enemies: Vec<ArchetypeId>,
    /// Presentation-only layout tag.
    pub layout: String,
}

impl FloorDefinition {
    pub fn new(enemies: impl IntoIterator<Item = ArchetypeId>, layout: impl Into<String>) -> Self {
        Self {
            enemies: enemies.into_iter().collect(),
            layout: layout.into(),
        }
    }
}
