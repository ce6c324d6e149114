//! Error types for battle and run commands.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::shop::ShopError;
use crate::state::Phase;

/// Commands the turn scheduler accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Command {
    BeginPlayerTurn,
    SubmitPlayerAction,
    AdvanceEnemyTurn,
    CompleteAction,
}

/// A scheduler command was rejected. The session is left untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleError {
    #[error("{command} is not valid during {phase}")]
    InvalidState { phase: Phase, command: Command },

    #[error("{command} rejected: the battle has already resolved")]
    SessionResolved { command: Command },
}

impl BattleError {
    pub fn invalid_state(phase: Phase, command: Command) -> Self {
        Self::InvalidState { phase, command }
    }
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        // Late or duplicate scheduling is expected around animations.
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            BattleError::InvalidState { .. } => "BATTLE_INVALID_STATE",
            BattleError::SessionResolved { .. } => "BATTLE_SESSION_RESOLVED",
        }
    }
}

/// Errors surfaced by [`GameRun`](super::GameRun) commands.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Shop(#[from] ShopError),

    #[error("{command} is not valid while the run is in {stage}")]
    InvalidStage {
        command: &'static str,
        stage: &'static str,
    },
}

impl GameError for RunError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RunError::Battle(err) => err.severity(),
            RunError::Oracle(err) => err.severity(),
            RunError::Shop(err) => err.severity(),
            RunError::InvalidStage { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RunError::Battle(err) => err.error_code(),
            RunError::Oracle(err) => err.error_code(),
            RunError::Shop(err) => err.error_code(),
            RunError::InvalidStage { .. } => "RUN_INVALID_STAGE",
        }
    }
}
