//! Battle and run command pipeline.
//!
//! [`TurnScheduler`] is the only thing that mutates a [`BattleSession`]. It
//! borrows the session for the duration of one command, validates the phase,
//! resolves the action through the combat functions, and checks the outcome
//! before returning a [`Step`] that tells the host what to schedule next.
//!
//! [`GameRun`] wraps the scheduler with the run-level stages (menu, battle,
//! shop, completed, defeated) and concludes battles as soon as they resolve.
//!
//! [`BattleSession`]: crate::state::BattleSession

mod errors;
mod run;
mod turns;

pub use errors::{BattleError, Command, RunError};
pub use run::GameRun;
pub use turns::{EngineContext, PlayerActionKind, Step, TurnScheduler};
