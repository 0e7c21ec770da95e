//! Power definitions: the attacks and heals squaddies can use.
//!
//! A [`Power`] is immutable once built. It carries at least one of an
//! [`AttackEffect`] or a [`HealingEffect`]; validation happens in
//! [`Power::new`] and an invalid definition never enters a repository.

mod attack;
mod healing;

use core::fmt;

use bitflags::bitflags;

use crate::error::{BattleError, ErrorSeverity};

pub use attack::{AttackEffect, CriticalEffect};
pub use healing::{HealingAdjustment, HealingEffect};

/// Unique identifier for a power definition.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerId(String);

impl PowerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PowerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Source a power is conjured from.
///
/// The type selects which offense stat augments damage (Strength for
/// Physical, Mind for Spell) and which defense stat opposes the to-hit roll
/// (Dodge vs Deflect). Armor only mitigates Physical damage.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PowerType {
    /// Martial training and cunning: swords, bows, pushing.
    #[default]
    Physical,
    /// Magical in nature, conjured without tools: fireball, mindread.
    Spell,
}

bitflags! {
    /// Who a power is allowed to be aimed at.
    ///
    /// Target selection itself is an external collaborator's concern; the
    /// engine only records the capability.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct TargetingFlags: u8 {
        const SELF   = 1 << 0;
        const FRIEND = 1 << 1;
        const FOE    = 1 << 2;
    }
}

/// An action definition a squaddie can use, dealing damage and/or healing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Power {
    id: PowerId,
    name: String,
    power_type: PowerType,
    targeting: TargetingFlags,
    attack: Option<AttackEffect>,
    healing: Option<HealingEffect>,
}

impl Power {
    /// Builds and validates a power definition.
    ///
    /// # Errors
    ///
    /// Returns [`PowerError::NoEffect`] when neither an attack nor a healing
    /// effect is supplied, and [`PowerError::NoTargets`] when the targeting
    /// flags are empty.
    pub fn new(
        id: PowerId,
        name: impl Into<String>,
        power_type: PowerType,
        targeting: TargetingFlags,
        attack: Option<AttackEffect>,
        healing: Option<HealingEffect>,
    ) -> Result<Self, PowerError> {
        let name = name.into();
        if attack.is_none() && healing.is_none() {
            return Err(PowerError::NoEffect { name });
        }
        if targeting.is_empty() {
            return Err(PowerError::NoTargets { name });
        }
        Ok(Self {
            id,
            name,
            power_type,
            targeting,
            attack,
            healing,
        })
    }

    pub fn id(&self) -> &PowerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn power_type(&self) -> PowerType {
        self.power_type
    }

    pub fn targeting(&self) -> TargetingFlags {
        self.targeting
    }

    pub fn attack(&self) -> Option<&AttackEffect> {
        self.attack.as_ref()
    }

    pub fn healing(&self) -> Option<&HealingEffect> {
        self.healing.as_ref()
    }

    /// True when a squaddie may carry this power as its equipped power.
    pub fn can_be_equipped(&self) -> bool {
        self.attack.as_ref().is_some_and(|attack| attack.can_be_equipped)
    }

    /// True when this power retaliates while equipped.
    pub fn can_counter_attack(&self) -> bool {
        self.attack
            .as_ref()
            .is_some_and(|attack| attack.can_counter_attack)
    }
}

/// Errors raised while building a power definition.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PowerError {
    /// The power carries neither an attack effect nor a healing effect.
    #[error("power '{name}' has neither an attack effect nor a healing effect")]
    NoEffect { name: String },

    /// The targeting flags are empty.
    #[error("power '{name}' cannot target anyone")]
    NoTargets { name: String },
}

impl BattleError for PowerError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoEffect { .. } => "POWER_NO_EFFECT",
            Self::NoTargets { .. } => "POWER_NO_TARGETS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sword_attack() -> AttackEffect {
        AttackEffect {
            to_hit_bonus: 1,
            damage_bonus: 2,
            ..AttackEffect::default()
        }
    }

    #[test]
    fn power_without_any_effect_is_rejected() {
        let result = Power::new(
            PowerId::new("broken"),
            "Broken Stick",
            PowerType::Physical,
            TargetingFlags::FOE,
            None,
            None,
        );
        assert_eq!(
            result.unwrap_err(),
            PowerError::NoEffect {
                name: "Broken Stick".into()
            }
        );
    }

    #[test]
    fn power_without_targets_is_rejected() {
        let result = Power::new(
            PowerId::new("aimless"),
            "Aimless Swing",
            PowerType::Physical,
            TargetingFlags::empty(),
            Some(sword_attack()),
            None,
        );
        assert!(matches!(result, Err(PowerError::NoTargets { .. })));
    }

    #[test]
    fn counter_capability_requires_attack_effect() {
        let salve = Power::new(
            PowerId::new("salve"),
            "Salve",
            PowerType::Spell,
            TargetingFlags::SELF | TargetingFlags::FRIEND,
            None,
            Some(HealingEffect {
                hit_points_healed: 2,
                adjustment: HealingAdjustment::Full,
            }),
        )
        .unwrap();
        assert!(!salve.can_counter_attack());
        assert!(!salve.can_be_equipped());
    }
}
