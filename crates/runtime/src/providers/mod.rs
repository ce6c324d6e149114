//! Player provider implementations.

pub mod heuristic;
pub mod scripted;

pub use heuristic::HeuristicProvider;
pub use scripted::ScriptedProvider;
