//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the engine, content, and the player provider so
//! clients can bubble them up with consistent context.
use thiserror::Error;
use tower_core::RunError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("player provider not set")]
    ProviderNotSet,

    #[error("runtime requires content to be configured before building")]
    MissingContent,

    #[error(transparent)]
    Run(#[from] RunError),

    #[error("scripted provider ran out of actions")]
    ProviderExhausted,

    #[error("player input closed")]
    InputClosed,

    #[error("player provider failed: {0}")]
    Provider(String),

    #[error("run did not finish within {limit} player turns")]
    TurnLimit { limit: u64 },
}
