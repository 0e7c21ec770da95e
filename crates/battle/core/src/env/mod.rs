//! Traits describing the collaborators the engines consume.
//!
//! Oracles expose read-only squaddie and power lookups plus the randomness
//! capability. The [`BattleEnv`] aggregate bundles them so the forecast and
//! resolution engines can reach everything they need without hard coupling
//! to concrete implementations.

mod error;
mod powers;
mod rng;
mod squaddies;

pub use error::OracleError;
pub use powers::{PowerOracle, PowerRepository};
pub use rng::{FixedRolls, PcgDice, RollOracle, RollSide, compute_seed};
pub use squaddies::{SquaddieOracle, SquaddieRepository};

/// Aggregates the read-only collaborators required by forecasting and
/// resolution.
///
/// Each slot is optional so callers only wire up what a given phase needs
/// (forecasting never rolls dice; committing re-resolves squaddies through
/// the mutable repository rather than this bundle).
#[derive(Clone, Copy)]
pub struct BattleEnv<'a> {
    squaddies: Option<&'a dyn SquaddieOracle>,
    powers: Option<&'a dyn PowerOracle>,
    rolls: Option<&'a dyn RollOracle>,
}

impl<'a> BattleEnv<'a> {
    pub fn new(
        squaddies: Option<&'a dyn SquaddieOracle>,
        powers: Option<&'a dyn PowerOracle>,
        rolls: Option<&'a dyn RollOracle>,
    ) -> Self {
        Self {
            squaddies,
            powers,
            rolls,
        }
    }

    pub fn with_all(
        squaddies: &'a dyn SquaddieOracle,
        powers: &'a dyn PowerOracle,
        rolls: &'a dyn RollOracle,
    ) -> Self {
        Self::new(Some(squaddies), Some(powers), Some(rolls))
    }

    /// Returns the squaddie oracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SquaddiesNotAvailable` if no squaddie oracle
    /// was provided.
    pub fn squaddies(&self) -> Result<&'a dyn SquaddieOracle, OracleError> {
        self.squaddies.ok_or(OracleError::SquaddiesNotAvailable)
    }

    /// Returns the power oracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::PowersNotAvailable` if no power oracle was
    /// provided.
    pub fn powers(&self) -> Result<&'a dyn PowerOracle, OracleError> {
        self.powers.ok_or(OracleError::PowersNotAvailable)
    }

    /// Returns the roll oracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RollsNotAvailable` if no roll oracle was
    /// provided.
    pub fn rolls(&self) -> Result<&'a dyn RollOracle, OracleError> {
        self.rolls.ok_or(OracleError::RollsNotAvailable)
    }
}
