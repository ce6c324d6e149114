//! Runtime orchestration for the dice tower.
//!
//! This crate wires together the player provider abstraction, content, the
//! event bus, and pacing into a cohesive runtime API. Consumers embed
//! [`Runtime`] to play whole runs and subscribe to their events.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] fans engine notifications out on a broadcast channel
//! - [`providers`] holds ready-made player providers
pub mod api;
pub mod events;
pub mod providers;
pub mod runtime;

pub use api::{PlayerProvider, Result, RuntimeError, ShopDecision};
pub use events::EventBus;
pub use providers::{HeuristicProvider, ScriptedProvider};
pub use runtime::{Pacing, RunResult, RunSummary, Runtime, RuntimeBuilder, RuntimeConfig};
