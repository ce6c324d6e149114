//! Turns runtime events into terminal output.
mod event_consumer;

pub use event_consumer::{CliEventConsumer, OutputFormat};
