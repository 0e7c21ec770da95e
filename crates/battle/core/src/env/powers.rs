//! Power lookup oracle and the in-memory definition catalog.

use std::collections::HashMap;

use crate::env::OracleError;
use crate::power::{Power, PowerId};

/// Read-only power lookup consumed during forecasting and commitment.
pub trait PowerOracle: Send + Sync {
    /// Returns the power definition with the given id, if registered.
    fn power(&self, id: &PowerId) -> Option<&Power>;
}

/// In-memory catalog of power definitions, keyed by id.
///
/// Powers are immutable once built, so unlike squaddies there is no mutable
/// access path.
#[derive(Clone, Debug, Default)]
pub struct PowerRepository {
    by_id: HashMap<PowerId, Power>,
}

impl PowerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one power definition.
    ///
    /// # Errors
    ///
    /// Rejects a second power with an already-registered id.
    pub fn add_power(&mut self, power: Power) -> Result<(), OracleError> {
        if self.by_id.contains_key(power.id()) {
            return Err(OracleError::DuplicatePower(power.id().clone()));
        }
        self.by_id.insert(power.id().clone(), power);
        Ok(())
    }

    /// Registers a batch of power definitions, stopping at the first
    /// duplicate.
    pub fn add_powers(&mut self, powers: impl IntoIterator<Item = Power>) -> Result<(), OracleError> {
        for power in powers {
            self.add_power(power)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl PowerOracle for PowerRepository {
    fn power(&self, id: &PowerId) -> Option<&Power> {
        self.by_id.get(id)
    }
}
