pub mod combatant;
pub mod common;
pub mod enemy;
pub mod player;

pub use combatant::Combatant;
pub use common::{ArchetypeId, CombatantId, ResourceMeter};
pub use enemy::{EnemyArchetype, EnemyInstance};
pub use player::{CharacterClass, ClassProfile, Player};
