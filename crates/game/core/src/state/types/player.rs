use super::Combatant;

/// Playable classes. Chosen once when a run starts.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CharacterClass {
    /// Fragile, rolls the biggest die.
    Thief,
    /// Small heal bonus on every heal.
    Mage,
    /// Largest health pool.
    Swordsman,
}

/// Starting numbers for a class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassProfile {
    pub max_hp: u32,
    pub heal_bonus: u32,
    pub dice_sides: u32,
}

impl ClassProfile {
    /// A profile a run can start with: some health and at least a d1.
    pub fn is_playable(&self) -> bool {
        self.max_hp > 0 && self.dice_sides > 0
    }
}

/// The player character. The same value travels through every floor of a
/// run; battle sessions take ownership while a floor is being fought and hand
/// it back when the floor resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub stats: Combatant,
    class: CharacterClass,
    gold: u32,
    /// Current depth, starting at 1.
    pub floor: u32,
}

impl Player {
    pub fn new(class: CharacterClass, profile: ClassProfile) -> Self {
        Self {
            stats: Combatant::new(profile.max_hp, profile.dice_sides, profile.heal_bonus),
            class,
            gold: 0,
            floor: 1,
        }
    }

    #[inline]
    pub fn class(&self) -> CharacterClass {
        self.class
    }

    #[inline]
    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn earn_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Deducts `amount` if affordable. Returns false (and leaves gold
    /// untouched) otherwise.
    pub fn spend_gold(&mut self, amount: u32) -> bool {
        match self.gold.checked_sub(amount) {
            Some(remaining) => {
                self.gold = remaining;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }
}
