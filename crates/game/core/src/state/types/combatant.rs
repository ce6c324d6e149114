use super::ResourceMeter;

/// Combat-relevant numbers shared by the player and every enemy.
///
/// # Invariants
///
/// - `health.current` is always within `0..=health.maximum`
/// - `dice_sides` is at least 1
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub health: ResourceMeter,
    dice_sides: u32,
    pub heal_bonus: u32,
}

impl Combatant {
    pub fn new(max_hp: u32, dice_sides: u32, heal_bonus: u32) -> Self {
        Self {
            health: ResourceMeter::full(max_hp),
            dice_sides: dice_sides.max(1),
            heal_bonus,
        }
    }

    /// Overrides the current HP (clamped to the maximum).
    #[must_use]
    pub fn with_current_hp(mut self, current: u32) -> Self {
        self.health = ResourceMeter::new(current, self.health.maximum);
        self
    }

    #[inline]
    pub fn current_hp(&self) -> u32 {
        self.health.current
    }

    #[inline]
    pub fn max_hp(&self) -> u32 {
        self.health.maximum
    }

    #[inline]
    pub fn dice_sides(&self) -> u32 {
        self.dice_sides
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.health.is_depleted()
    }

    pub fn add_dice_sides(&mut self, amount: u32) {
        self.dice_sides = self.dice_sides.saturating_add(amount);
    }
}
