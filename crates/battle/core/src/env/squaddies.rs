//! Squaddie lookup oracle and the in-memory authoritative store.

use std::collections::HashMap;

use crate::env::OracleError;
use crate::squaddie::{Squaddie, SquaddieId};

/// Read-only squaddie lookup consumed during forecasting.
pub trait SquaddieOracle: Send + Sync {
    /// Returns the squaddie with the given id, if registered.
    fn squaddie(&self, id: &SquaddieId) -> Option<&Squaddie>;
}

/// In-memory store owning every squaddie record by id.
///
/// This is the single authoritative home for squaddie state: forecasts and
/// results hold ids and re-resolve through this store, and the resolution
/// engine takes it mutably to apply damage and healing.
#[derive(Clone, Debug, Default)]
pub struct SquaddieRepository {
    by_id: HashMap<SquaddieId, Squaddie>,
}

impl SquaddieRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one squaddie.
    ///
    /// # Errors
    ///
    /// Rejects a second squaddie with an already-registered id.
    pub fn add_squaddie(&mut self, squaddie: Squaddie) -> Result<(), OracleError> {
        if self.by_id.contains_key(squaddie.id()) {
            return Err(OracleError::DuplicateSquaddie(squaddie.id().clone()));
        }
        self.by_id.insert(squaddie.id().clone(), squaddie);
        Ok(())
    }

    /// Registers a batch of squaddies, stopping at the first duplicate.
    pub fn add_squaddies(
        &mut self,
        squaddies: impl IntoIterator<Item = Squaddie>,
    ) -> Result<(), OracleError> {
        for squaddie in squaddies {
            self.add_squaddie(squaddie)?;
        }
        Ok(())
    }

    /// Mutable access for the resolution engine.
    pub fn squaddie_mut(&mut self, id: &SquaddieId) -> Option<&mut Squaddie> {
        self.by_id.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl SquaddieOracle for SquaddieRepository {
    fn squaddie(&self, id: &SquaddieId) -> Option<&Squaddie> {
        self.by_id.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::squaddie::SquaddieProfile;

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut repo = SquaddieRepository::new();
        let profile = SquaddieProfile {
            name: "Teros".into(),
            ..SquaddieProfile::default()
        };
        repo.add_squaddie(profile.spawn(SquaddieId::new("teros"))).unwrap();
        let err = repo
            .add_squaddie(profile.spawn(SquaddieId::new("teros")))
            .unwrap_err();
        assert_eq!(err, OracleError::DuplicateSquaddie(SquaddieId::new("teros")));
        assert_eq!(repo.len(), 1);
    }
}
