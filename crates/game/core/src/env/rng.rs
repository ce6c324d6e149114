//! Injectable randomness for dice rolls and enemy decisions.
//!
//! [`RandomSource`] is the only source of randomness in the engine. Hosts pass
//! a seeded [`PcgRng`] for play and a [`ScriptedRandom`] when a test needs to
//! pin exact rolls.
//!
//! # Determinism
//!
//! Given the same seed, [`PcgRng`] produces the same sequence, so a whole run
//! can be replayed from its seed and the player's choices.

use std::collections::VecDeque;

/// Source of random numbers consumed by the combat resolver and enemy policy.
pub trait RandomSource: Send {
    /// Next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform integer in `[1, max_inclusive]`. A maximum of 0 behaves like 1.
    fn next_int(&mut self, max_inclusive: u32) -> u32 {
        if max_inclusive <= 1 {
            return 1;
        }
        (self.next_u32() % max_inclusive) + 1
    }

    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64 {
        self.next_u32() as f64 / 4_294_967_296.0
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_int(&mut self, max_inclusive: u32) -> u32 {
        (**self).next_int(max_inclusive)
    }

    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 64-bit state, 32-bit output.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces same output
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        rng.state = Self::pcg_step(rng.state.wrapping_add(seed));
        rng
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RandomSource for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

/// Replays fixed values, for tests and recorded runs.
///
/// `next_int` pops from the roll queue and clamps into `[1, max_inclusive]`;
/// `next_unit` pops from the draw queue. An exhausted roll queue yields 1 and
/// an exhausted draw queue yields 0.0 (so enemies attack).
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    rolls: VecDeque<u32>,
    draws: VecDeque<f64>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rolls(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            draws: VecDeque::new(),
        }
    }

    #[must_use]
    pub fn and_draws(mut self, draws: impl IntoIterator<Item = f64>) -> Self {
        self.draws.extend(draws);
        self
    }

    pub fn remaining_rolls(&self) -> usize {
        self.rolls.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_u32(&mut self) -> u32 {
        self.rolls.pop_front().unwrap_or(0)
    }

    fn next_int(&mut self, max_inclusive: u32) -> u32 {
        self.rolls
            .pop_front()
            .unwrap_or(1)
            .clamp(1, max_inclusive.max(1))
    }

    fn next_unit(&mut self) -> f64 {
        let draw = self.draws.pop_front().unwrap_or(0.0);
        if draw.is_nan() {
            return 0.0;
        }
        draw.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic_per_seed() {
        let mut a = PcgRng::new(42);
        let mut b = PcgRng::new(42);
        let mut c = PcgRng::new(43);

        let seq_a: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let seq_b: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        let seq_c: Vec<u32> = (0..8).map(|_| c.next_u32()).collect();

        assert_eq!(seq_a, seq_b);
        assert_ne!(seq_a, seq_c);
    }

    #[test]
    fn next_int_stays_in_range() {
        let mut rng = PcgRng::new(7);
        for sides in [1, 2, 6, 10, 25] {
            for _ in 0..500 {
                let roll = rng.next_int(sides);
                assert!((1..=sides).contains(&roll), "roll {roll} for d{sides}");
            }
        }
    }

    #[test]
    fn next_int_covers_every_face() {
        let mut rng = PcgRng::new(99);
        let mut seen = [false; 6];
        for _ in 0..1_000 {
            seen[(rng.next_int(6) - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&hit| hit));
    }

    #[test]
    fn next_unit_is_half_open() {
        let mut rng = PcgRng::new(1);
        for _ in 0..1_000 {
            let draw = rng.next_unit();
            assert!((0.0..1.0).contains(&draw));
        }
    }

    #[test]
    fn scripted_rolls_are_clamped_and_default_to_one() {
        let mut rng = ScriptedRandom::with_rolls([30, 0, 4]);
        assert_eq!(rng.next_int(25), 25);
        assert_eq!(rng.next_int(25), 1);
        assert_eq!(rng.next_int(25), 4);
        assert_eq!(rng.next_int(25), 1);
    }

    #[test]
    fn scripted_draws_default_to_zero() {
        let mut rng = ScriptedRandom::new().and_draws([0.9]);
        assert_eq!(rng.next_unit(), 0.9);
        assert_eq!(rng.next_unit(), 0.0);
    }
}
