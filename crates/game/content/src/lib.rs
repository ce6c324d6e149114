//! Data-driven content definitions and loaders.
//!
//! This crate houses the static tower content and provides loaders for
//! RON/TOML data files:
//! - Class profiles (`classes.ron`)
//! - Enemy archetypes (`bestiary.ron`)
//! - The floor table (`floors.ron`)
//! - The shop catalog (`shop.ron`)
//! - Game configuration (`config.toml`)
//!
//! Content is consumed through the `tower-core` oracle traits and never
//! appears in battle state. The shipped tower is embedded in the binary and
//! available as [`ContentBundle::builtin`].

mod bundle;
pub mod oracle;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use bundle::ContentBundle;
pub use oracle::{BestiaryTable, ClassTable, FloorTable, ShopTable};

#[cfg(feature = "loaders")]
pub use loaders::{
    BestiaryLoader, ClassLoader, ConfigLoader, ContentFactory, FloorLoader, LoadResult,
    ShopLoader,
};
