//! Combat resolution system.
//!
//! This module provides the functions that resolve one action against a
//! battle's combatants. Every health mutation in the engine goes through here.
//!
//! # Architecture
//!
//! - **Injected randomness**: every roll is drawn from a [`RandomSource`]
//! - **Used by the scheduler**: `TurnScheduler` calls these for player and enemy actions
//! - **Clamped**: HP never leaves `0..=max_hp`
//!
//! # Core Functions
//!
//! - `roll_dice`: uniform roll in `[1, sides]`
//! - `resolve_attack`: roll damage and apply it to a defender
//! - `resolve_player_attack`: target the first living enemy and grant its gold on a kill
//! - `resolve_heal`: roll, add heal bonus, restore half (rounded up)
//!
//! [`RandomSource`]: crate::env::RandomSource

pub mod damage;
pub mod dice;
pub mod heal;
pub mod result;

pub use damage::{apply_attack, resolve_attack, resolve_player_attack};
pub use dice::roll_dice;
pub use heal::{apply_heal, heal_amount, resolve_heal};
pub use result::{AttackResult, CombatError, HealResult, PlayerStrike};
