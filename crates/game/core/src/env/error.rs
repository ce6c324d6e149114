//! Oracle access errors.
//!
//! Errors related to oracle availability and content lookups.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{ArchetypeId, CharacterClass};

/// Errors that occur when accessing Oracle data.
///
/// Oracle errors indicate that required content is unavailable or invalid.
/// They halt the current operation: a floor with missing data is never
/// loaded partially.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// FloorOracle is not available in the environment.
    #[error("FloorOracle not available")]
    FloorsNotAvailable,

    /// BestiaryOracle is not available in the environment.
    #[error("BestiaryOracle not available")]
    BestiaryNotAvailable,

    /// ClassOracle is not available in the environment.
    #[error("ClassOracle not available")]
    ClassesNotAvailable,

    /// ShopOracle is not available in the environment.
    #[error("ShopOracle not available")]
    ShopNotAvailable,

    /// No floor definition exists for the requested number.
    #[error("no floor definition for floor {0}")]
    FloorNotFound(u32),

    /// A floor lists no enemies.
    #[error("floor {0} defines an empty roster")]
    EmptyFloor(u32),

    /// A floor lists more enemies than a roster can hold.
    #[error("floor {floor} defines {requested} enemies (max {max})")]
    RosterTooLarge {
        floor: u32,
        requested: usize,
        max: usize,
    },

    /// Archetype referenced by a floor is missing from the bestiary.
    #[error("enemy archetype '{0}' not found")]
    ArchetypeNotFound(ArchetypeId),

    /// Class profile was not found.
    #[error("class profile '{0}' not found")]
    ClassNotFound(CharacterClass),

    /// Archetype would spawn an enemy that is already dead.
    #[error("enemy archetype '{0}' has no health")]
    ArchetypeWithoutHealth(ArchetypeId),

    /// Class profile has no health or a die without sides.
    #[error("class profile '{0}' needs at least 1 HP and a 1-sided die")]
    InvalidClassProfile(CharacterClass),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        // Nothing here can be retried: the engine cannot proceed without content.
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            FloorsNotAvailable => "ORACLE_FLOORS_NOT_AVAILABLE",
            BestiaryNotAvailable => "ORACLE_BESTIARY_NOT_AVAILABLE",
            ClassesNotAvailable => "ORACLE_CLASSES_NOT_AVAILABLE",
            ShopNotAvailable => "ORACLE_SHOP_NOT_AVAILABLE",
            FloorNotFound(_) => "ORACLE_FLOOR_NOT_FOUND",
            EmptyFloor(_) => "ORACLE_EMPTY_FLOOR",
            RosterTooLarge { .. } => "ORACLE_ROSTER_TOO_LARGE",
            ArchetypeNotFound(_) => "ORACLE_ARCHETYPE_NOT_FOUND",
            ClassNotFound(_) => "ORACLE_CLASS_NOT_FOUND",
            ArchetypeWithoutHealth(_) => "ORACLE_ARCHETYPE_WITHOUT_HEALTH",
            InvalidClassProfile(_) => "ORACLE_INVALID_CLASS_PROFILE",
        }
    }
}
