//! All static content of one tower, owned in one place.

use tower_core::{FloorOracle, GameConfig, GameEnv};

use crate::oracle::{BestiaryTable, ClassTable, FloorTable, ShopTable};

/// Owned content tables plus the game configuration they were authored for.
#[derive(Clone, Debug, Default)]
pub struct ContentBundle {
    pub config: GameConfig,
    pub classes: ClassTable,
    pub bestiary: BestiaryTable,
    pub floors: FloorTable,
    pub shop: ShopTable,
}

impl ContentBundle {
    /// Borrows every table as a [`GameEnv`].
    pub fn env(&self) -> GameEnv<'_> {
        GameEnv::with_all(&self.floors, &self.bestiary, &self.classes, &self.shop)
    }

    /// Number of floors in the tower.
    pub fn floor_count(&self) -> u32 {
        self.floors.floor_count()
    }
}

#[cfg(feature = "loaders")]
impl ContentBundle {
    /// The tower shipped with the game, embedded at compile time.
    pub fn builtin() -> crate::loaders::LoadResult<Self> {
        use crate::loaders::{BestiaryLoader, ClassLoader, ConfigLoader, FloorLoader, ShopLoader};

        let bundle = Self {
            config: ConfigLoader::parse(include_str!("../data/config.toml"))?,
            classes: ClassLoader::parse(include_str!("../data/classes.ron"))?,
            bestiary: BestiaryLoader::parse(include_str!("../data/bestiary.ron"))?,
            floors: FloorLoader::parse(include_str!("../data/floors.ron"))?,
            shop: ShopLoader::parse(include_str!("../data/shop.ron"))?,
        };
        bundle.validate()?;
        Ok(bundle)
    }

    /// Checks that every class has a profile and that every floor can be
    /// instantiated against the bestiary.
    pub fn validate(&self) -> crate::loaders::LoadResult<()> {
        use strum::IntoEnumIterator;
        use tower_core::{CharacterClass, ClassOracle, build_roster};

        for class in CharacterClass::iter() {
            if self.classes.profile(class).is_none() {
                anyhow::bail!("missing class profile for '{}'", class);
            }
        }

        for (number, _) in self.floors.iter() {
            build_roster(number, &self.floors, &self.bestiary)
                .map_err(|e| anyhow::anyhow!("floor {} is invalid: {}", number, e))?;
        }

        let starting = self.config.starting_floor;
        if self.floors.floor(starting).is_none() {
            anyhow::bail!(
                "starting floor {} is beyond the floor table ({} floors)",
                starting,
                self.floor_count()
            );
        }

        Ok(())
    }
}
