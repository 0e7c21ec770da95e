//! Power-collection management on the squaddie aggregate.
//!
//! A squaddie carries a bounded set of innate power references, unique by
//! power id, plus at most one equipped power drawn from that set. Equipping
//! validates against the live [`Power`] definition, so the caller resolves
//! the power through the repository first.

use crate::error::{BattleError, ErrorSeverity};
use crate::power::{Power, PowerId};
use crate::squaddie::{Squaddie, SquaddieId};

/// Lightweight (id, name) pair referencing a power definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerReference {
    pub id: PowerId,
    pub name: String,
}

impl From<&Power> for PowerReference {
    fn from(power: &Power) -> Self {
        Self {
            id: power.id().clone(),
            name: power.name().to_string(),
        }
    }
}

impl Squaddie {
    /// Adds an innate power reference.
    ///
    /// # Errors
    ///
    /// Rejects duplicates by power id and additions past the innate-power
    /// bound. No partial mutation on error.
    pub fn add_innate_power(&mut self, reference: PowerReference) -> Result<(), SquaddieError> {
        if self.has_power(&reference.id) {
            return Err(SquaddieError::DuplicatePower {
                squaddie: self.id().clone(),
                power: reference.id,
            });
        }
        self.innate_powers
            .try_push(reference)
            .map_err(|overflow| SquaddieError::TooManyPowers {
                squaddie: self.id().clone(),
                power: overflow.element().id,
            })
    }

    /// True when the squaddie innately knows the given power.
    pub fn has_power(&self, power_id: &PowerId) -> bool {
        self.innate_powers
            .iter()
            .any(|reference| reference.id == *power_id)
    }

    /// The innate power references, in insertion order.
    pub fn power_references(&self) -> &[PowerReference] {
        &self.innate_powers
    }

    /// Equips a power the squaddie innately knows.
    ///
    /// # Errors
    ///
    /// The power must be in the innate set and marked equippable.
    pub fn equip_power(&mut self, power: &Power) -> Result<(), SquaddieError> {
        if !self.has_power(power.id()) {
            return Err(SquaddieError::PowerNotInnate {
                squaddie: self.id().clone(),
                power: power.id().clone(),
            });
        }
        if !power.can_be_equipped() {
            return Err(SquaddieError::PowerNotEquippable {
                squaddie: self.id().clone(),
                power: power.id().clone(),
            });
        }
        self.equipped_power = Some(power.id().clone());
        Ok(())
    }

    pub fn has_equipped_power(&self) -> bool {
        self.equipped_power.is_some()
    }

    pub fn equipped_power_id(&self) -> Option<&PowerId> {
        self.equipped_power.as_ref()
    }

    /// Removes one innate power reference; unequips it if it was equipped.
    pub fn remove_power_reference(&mut self, power_id: &PowerId) {
        self.innate_powers
            .retain(|reference| reference.id != *power_id);
        if self.equipped_power.as_ref() == Some(power_id) {
            self.equipped_power = None;
        }
    }

    /// Drops every innate power reference and the equipped power.
    pub fn clear_power_references(&mut self) {
        self.innate_powers.clear();
        self.equipped_power = None;
    }
}

/// Errors raised while managing a squaddie's power collection.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SquaddieError {
    /// The squaddie already knows a power with this id.
    #[error("squaddie '{squaddie}' already has power '{power}'")]
    DuplicatePower { squaddie: SquaddieId, power: PowerId },

    /// The innate-power bound was reached.
    #[error("squaddie '{squaddie}' cannot carry more powers (adding '{power}')")]
    TooManyPowers { squaddie: SquaddieId, power: PowerId },

    /// Tried to equip a power outside the innate set.
    #[error("squaddie '{squaddie}' does not know power '{power}'")]
    PowerNotInnate { squaddie: SquaddieId, power: PowerId },

    /// Tried to equip a power that is not marked equippable.
    #[error("power '{power}' cannot be equipped by squaddie '{squaddie}'")]
    PowerNotEquippable { squaddie: SquaddieId, power: PowerId },
}

impl BattleError for SquaddieError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicatePower { .. } => "SQUADDIE_DUPLICATE_POWER",
            Self::TooManyPowers { .. } => "SQUADDIE_TOO_MANY_POWERS",
            Self::PowerNotInnate { .. } => "SQUADDIE_POWER_NOT_INNATE",
            Self::PowerNotEquippable { .. } => "SQUADDIE_POWER_NOT_EQUIPPABLE",
        }
    }
}
