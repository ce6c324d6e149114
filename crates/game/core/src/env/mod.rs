//! Traits describing read-only game content.
//!
//! Oracles expose the floor table, the bestiary, class profiles, and the shop
//! catalog. The [`GameEnv`] aggregate bundles them so the engine can access
//! everything it needs without hard coupling to concrete implementations.
mod bestiary;
mod classes;
mod error;
mod floors;
mod rng;
mod shop;

pub use bestiary::BestiaryOracle;
pub use classes::ClassOracle;
pub use error::OracleError;
pub use floors::{FloorDefinition, FloorOracle};
pub use rng::{PcgRng, RandomSource, ScriptedRandom};
pub use shop::{ShopEffect, ShopItem, ShopOracle};

/// Aggregates read-only oracles required by the run controller.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    floors: Option<&'a dyn FloorOracle>,
    bestiary: Option<&'a dyn BestiaryOracle>,
    classes: Option<&'a dyn ClassOracle>,
    shop: Option<&'a dyn ShopOracle>,
}

impl<'a> GameEnv<'a> {
    pub fn new(
        floors: Option<&'a dyn FloorOracle>,
        bestiary: Option<&'a dyn BestiaryOracle>,
        classes: Option<&'a dyn ClassOracle>,
        shop: Option<&'a dyn ShopOracle>,
    ) -> Self {
        Self {
            floors,
            bestiary,
            classes,
            shop,
        }
    }

    pub fn with_all(
        floors: &'a dyn FloorOracle,
        bestiary: &'a dyn BestiaryOracle,
        classes: &'a dyn ClassOracle,
        shop: &'a dyn ShopOracle,
    ) -> Self {
        Self::new(Some(floors), Some(bestiary), Some(classes), Some(shop))
    }

    pub fn empty() -> Self {
        Self::new(None, None, None, None)
    }

    /// Returns the FloorOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::FloorsNotAvailable` if no floor oracle was provided.
    pub fn floors(&self) -> Result<&'a dyn FloorOracle, OracleError> {
        self.floors.ok_or(OracleError::FloorsNotAvailable)
    }

    /// Returns the BestiaryOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::BestiaryNotAvailable` if no bestiary was provided.
    pub fn bestiary(&self) -> Result<&'a dyn BestiaryOracle, OracleError> {
        self.bestiary.ok_or(OracleError::BestiaryNotAvailable)
    }

    /// Returns the ClassOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ClassesNotAvailable` if no class oracle was provided.
    pub fn classes(&self) -> Result<&'a dyn ClassOracle, OracleError> {
        self.classes.ok_or(OracleError::ClassesNotAvailable)
    }

    /// Returns the ShopOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ShopNotAvailable` if no shop oracle was provided.
    pub fn shop(&self) -> Result<&'a dyn ShopOracle, OracleError> {
        self.shop.ok_or(OracleError::ShopNotAvailable)
    }
}

impl std::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEnv")
            .field("floors", &self.floors.is_some())
            .field("bestiary", &self.bestiary.is_some())
            .field("classes", &self.classes.is_some())
            .field("shop", &self.shop.is_some())
            .finish()
    }
}
