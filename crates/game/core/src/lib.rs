//! Deterministic battle engine for the dice tower.
//!
//! `tower-core` defines the canonical rules of a floor-climbing dice RPG: the
//! combatants, the turn state machine, dice-based damage and healing, the
//! enemy decision policy, and what happens when a floor is cleared or the
//! player falls. It performs no I/O, no logging, and never waits on a clock.
//! Hosts drive it with commands, pace it themselves, and observe it through a
//! [`PresentationPort`].
//!
//! All battle mutation flows through [`engine::TurnScheduler`]; run-level
//! stages are owned by [`engine::GameRun`].
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod policy;
pub mod port;
pub mod progression;
pub mod shop;
pub mod state;

pub use combat::{
    AttackResult, CombatError, HealResult, PlayerStrike, heal_amount, resolve_attack, resolve_heal,
    resolve_player_attack, roll_dice,
};
pub use config::GameConfig;
pub use engine::{
    BattleError, Command, EngineContext, GameRun, PlayerActionKind, RunError, Step, TurnScheduler,
};
pub use env::{
    BestiaryOracle, ClassOracle, FloorDefinition, FloorOracle, GameEnv, OracleError, PcgRng,
    RandomSource, ScriptedRandom, ShopEffect, ShopItem, ShopOracle,
};
pub use error::{ErrorSeverity, GameError};
pub use policy::{ATTACK_CHANCE, EnemyAction, EnemyPolicy, FixedOddsPolicy};
pub use port::{BattleEvent, EventLog, NullPresentation, PresentationPort, RosterEntry};
pub use progression::{Outcome, ProgressionController, RunStage, build_roster, evaluate_outcome};
pub use shop::ShopError;
pub use state::{
    ArchetypeId, BattleResult, BattleSession, CharacterClass, ClassProfile, Combatant,
    CombatantId, EnemyArchetype, EnemyInstance, Phase, Player, ResourceMeter, Roster,
};
