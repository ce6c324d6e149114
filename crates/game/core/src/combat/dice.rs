//! Dice rolling.

use crate::env::RandomSource;

/// Roll a die with `sides` faces, returning a value in `[1, sides]`.
///
/// A zero-sided die rolls as a one-sided die.
#[inline]
pub fn roll_dice(rng: &mut (impl RandomSource + ?Sized), sides: u32) -> u32 {
    rng.next_int(sides.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, ScriptedRandom};

    #[test]
    fn rolls_stay_on_the_die() {
        let mut rng = PcgRng::new(2024);
        for _ in 0..1_000 {
            let roll = roll_dice(&mut rng, 20);
            assert!((1..=20).contains(&roll));
        }
    }

    #[test]
    fn zero_sided_die_rolls_one() {
        let mut rng = ScriptedRandom::with_rolls([9]);
        assert_eq!(roll_dice(&mut rng, 0), 1);
    }
}
