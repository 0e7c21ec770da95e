//! Oracle access errors.

use crate::error::{BattleError, ErrorSeverity};
use crate::power::PowerId;
use crate::squaddie::SquaddieId;

/// Errors that occur when accessing oracle data.
///
/// Missing oracles and failed id lookups are both fatal to the action being
/// forecast or committed: the engine never retries or silently skips them.
/// Duplicate insertions are validation errors against repository setup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// No squaddie oracle was provided in the environment.
    #[error("squaddie oracle not available")]
    SquaddiesNotAvailable,

    /// No power oracle was provided in the environment.
    #[error("power oracle not available")]
    PowersNotAvailable,

    /// No roll oracle was provided in the environment.
    #[error("roll oracle not available")]
    RollsNotAvailable,

    /// A squaddie id did not resolve.
    #[error("squaddie '{0}' not found")]
    SquaddieNotFound(SquaddieId),

    /// A power id did not resolve.
    #[error("power '{0}' not found")]
    PowerNotFound(PowerId),

    /// A squaddie with this id is already registered.
    #[error("squaddie '{0}' already registered")]
    DuplicateSquaddie(SquaddieId),

    /// A power with this id is already registered.
    #[error("power '{0}' already registered")]
    DuplicatePower(PowerId),
}

impl BattleError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            // The engine cannot proceed without its collaborators or with
            // dangling ids.
            SquaddiesNotAvailable | PowersNotAvailable | RollsNotAvailable
            | SquaddieNotFound(_) | PowerNotFound(_) => ErrorSeverity::Fatal,

            DuplicateSquaddie(_) | DuplicatePower(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            SquaddiesNotAvailable => "ORACLE_SQUADDIES_NOT_AVAILABLE",
            PowersNotAvailable => "ORACLE_POWERS_NOT_AVAILABLE",
            RollsNotAvailable => "ORACLE_ROLLS_NOT_AVAILABLE",
            SquaddieNotFound(_) => "ORACLE_SQUADDIE_NOT_FOUND",
            PowerNotFound(_) => "ORACLE_POWER_NOT_FOUND",
            DuplicateSquaddie(_) => "ORACLE_DUPLICATE_SQUADDIE",
            DuplicatePower(_) => "ORACLE_DUPLICATE_POWER",
        }
    }
}
