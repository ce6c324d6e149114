//! Heal rolling and application.

use crate::env::RandomSource;
use crate::state::Combatant;

use super::dice::roll_dice;
use super::result::HealResult;

/// Heal amount for a roll: half of `roll + heal_bonus`, rounded up.
#[inline]
pub fn heal_amount(roll: u32, heal_bonus: u32) -> u32 {
    roll.saturating_add(heal_bonus).div_ceil(2)
}

/// Apply an already-rolled heal to the caster.
pub fn apply_heal(caster: &mut Combatant, roll: u32) -> HealResult {
    let amount = heal_amount(roll, caster.heal_bonus);
    let hp_before = caster.current_hp();
    let hp_after = caster.health.restore(amount);

    HealResult {
        roll,
        amount,
        hp_before,
        hp_after,
    }
}

/// Resolve a heal: roll the caster's die, add its heal bonus, and restore
/// half of the total (rounded up), capped at max HP.
pub fn resolve_heal(rng: &mut (impl RandomSource + ?Sized), caster: &mut Combatant) -> HealResult {
    let roll = roll_dice(rng, caster.dice_sides());
    apply_heal(caster, roll)
}
