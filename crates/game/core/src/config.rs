/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Dice sides the player gains every time a non-boss floor is cleared.
    pub floor_dice_bonus: u32,

    /// Floor a new run starts on.
    pub starting_floor: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of enemies in one battle roster.
    pub const MAX_ROSTER: usize = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FLOOR_DICE_BONUS: u32 = 3;
    pub const DEFAULT_STARTING_FLOOR: u32 = 1;

    pub fn new() -> Self {
        Self {
            floor_dice_bonus: Self::DEFAULT_FLOOR_DICE_BONUS,
            starting_floor: Self::DEFAULT_STARTING_FLOOR,
        }
    }

    pub fn with_floor_dice_bonus(floor_dice_bonus: u32) -> Self {
        Self {
            floor_dice_bonus,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
