use crate::state::{CharacterClass, ClassProfile};

/// Starting stats for each playable class.
pub trait ClassOracle: Send + Sync {
    fn profile(&self, class: CharacterClass) -> Option<ClassProfile>;
}
