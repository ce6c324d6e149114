//! Event fan-out for battle notifications.
//!
//! The engine reports through [`tower_core::PresentationPort`]; the runtime's
//! implementation logs each event and republishes it on a broadcast channel
//! so renderers, recorders, and tests can subscribe independently.

mod bus;

pub use bus::EventBus;
