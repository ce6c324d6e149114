//! [`tower_core::ClassOracle`] backed by an in-memory map.
use std::collections::HashMap;

use tower_core::{CharacterClass, ClassOracle, ClassProfile};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassTable {
    profiles: HashMap<CharacterClass, ClassProfile>,
}

impl ClassTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, class: CharacterClass, profile: ClassProfile) {
        self.profiles.insert(class, profile);
    }
}

impl FromIterator<(CharacterClass, ClassProfile)> for ClassTable {
    fn from_iter<I: IntoIterator<Item = (CharacterClass, ClassProfile)>>(iter: I) -> Self {
        Self {
            profiles: iter.into_iter().collect(),
        }
    }
}

impl ClassOracle for ClassTable {
    fn profile(&self, class: CharacterClass) -> Option<ClassProfile> {
        self.profiles.get(&class).copied()
    }
}
