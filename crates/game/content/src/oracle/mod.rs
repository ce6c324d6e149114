//! In-memory implementations of the `tower-core` content oracles.
//!
//! The tables are immutable once built; the run controller borrows them
//! through a [`tower_core::GameEnv`].
mod bestiary;
mod classes;
mod floors;
mod shop;

pub use bestiary::BestiaryTable;
pub use classes::ClassTable;
pub use floors::FloorTable;
pub use shop::ShopTable;
