use crate::state::{ArchetypeId, EnemyArchetype};

/// Lookup from archetype id to health pool, dice, and gold reward.
pub trait BestiaryOracle: Send + Sync {
    fn archetype(&self, id: &ArchetypeId) -> Option<&EnemyArchetype>;
}
