//! Squaddie: a combat unit with offense and defense stats and carried powers.
//!
//! The aggregate is deliberately flat. Identity, offense, defense, and the
//! power collection live on one type with field-level accessors; the only
//! code allowed to mutate defense state is the resolution engine (damage,
//! barrier loss, healing) via the mutators defined here.

mod powers;

use core::fmt;

use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::power::PowerId;

pub use powers::{PowerReference, SquaddieError};

/// Unique identifier for a squaddie.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SquaddieId(String);

impl SquaddieId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SquaddieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SquaddieId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A squaddie's allegiance on the battlefield.
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
pub enum Affiliation {
    #[default]
    Player,
    Enemy,
    Ally,
    Neutral,
}

/// Stat block used to spawn squaddies.
///
/// Profiles are plain data: fill in the fields (struct-update syntax against
/// `Default` keeps call sites short) and call [`SquaddieProfile::spawn`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SquaddieProfile {
    pub name: String,
    pub affiliation: Affiliation,
    pub aim: i32,
    pub strength: i32,
    pub mind: i32,
    pub max_hp: i32,
    pub dodge: i32,
    pub deflect: i32,
    pub max_barrier: i32,
    pub armor: i32,
}

impl Default for SquaddieProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            affiliation: Affiliation::Player,
            aim: 0,
            strength: 0,
            mind: 0,
            max_hp: 5,
            dodge: 0,
            deflect: 0,
            max_barrier: 0,
            armor: 0,
        }
    }
}

impl SquaddieProfile {
    /// Creates a squaddie from this profile with hit points at maximum and
    /// barrier down (barriers are raised explicitly once battle starts).
    pub fn spawn(&self, id: SquaddieId) -> Squaddie {
        Squaddie {
            id,
            name: self.name.clone(),
            affiliation: self.affiliation,
            aim: self.aim,
            strength: self.strength,
            mind: self.mind,
            current_hp: self.max_hp,
            max_hp: self.max_hp,
            dodge: self.dodge,
            deflect: self.deflect,
            current_barrier: 0,
            max_barrier: self.max_barrier,
            armor: self.armor,
            innate_powers: ArrayVec::new(),
            equipped_power: None,
        }
    }
}

/// A person, creature, or thing that can take actions on a battlefield.
///
/// Invariants: `0 <= current_hp <= max_hp` and
/// `0 <= current_barrier <= max_barrier`, upheld by the mutators. Death is a
/// derived condition (`current_hp == 0`), never a separate state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Squaddie {
    id: SquaddieId,
    name: String,
    affiliation: Affiliation,
    aim: i32,
    strength: i32,
    mind: i32,
    current_hp: i32,
    max_hp: i32,
    dodge: i32,
    deflect: i32,
    current_barrier: i32,
    max_barrier: i32,
    armor: i32,
    pub(crate) innate_powers: ArrayVec<PowerReference, { BattleConfig::MAX_INNATE_POWERS }>,
    pub(crate) equipped_power: Option<PowerId>,
}

impl Squaddie {
    pub fn id(&self) -> &SquaddieId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn affiliation(&self) -> Affiliation {
        self.affiliation
    }

    pub fn aim(&self) -> i32 {
        self.aim
    }

    pub fn strength(&self) -> i32 {
        self.strength
    }

    pub fn mind(&self) -> i32 {
        self.mind
    }

    pub fn current_hp(&self) -> i32 {
        self.current_hp
    }

    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    pub fn dodge(&self) -> i32 {
        self.dodge
    }

    pub fn deflect(&self) -> i32 {
        self.deflect
    }

    pub fn current_barrier(&self) -> i32 {
        self.current_barrier
    }

    pub fn max_barrier(&self) -> i32 {
        self.max_barrier
    }

    pub fn armor(&self) -> i32 {
        self.armor
    }

    /// True once hit points reach zero.
    pub fn is_felled(&self) -> bool {
        self.current_hp == 0
    }

    /// Removes hit points, clamping at zero. Returns the amount actually
    /// removed.
    pub fn reduce_hit_points(&mut self, damage: i32) -> i32 {
        let applied = damage.clamp(0, self.current_hp);
        self.current_hp -= applied;
        applied
    }

    /// Restores hit points, capping at the maximum. Returns the amount
    /// actually restored.
    pub fn restore_hit_points(&mut self, healing: i32) -> i32 {
        let applied = healing.clamp(0, self.max_hp - self.current_hp);
        self.current_hp += applied;
        applied
    }

    /// Removes barrier, clamping at zero. Returns the amount actually
    /// removed.
    pub fn reduce_barrier(&mut self, damage: i32) -> i32 {
        let applied = damage.clamp(0, self.current_barrier);
        self.current_barrier -= applied;
        applied
    }

    /// Raises the barrier to its maximum.
    pub fn raise_barrier_to_max(&mut self) {
        self.current_barrier = self.max_barrier;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squaddie() -> Squaddie {
        SquaddieProfile {
            name: "Teros".into(),
            max_hp: 5,
            max_barrier: 2,
            ..SquaddieProfile::default()
        }
        .spawn(SquaddieId::new("teros"))
    }

    #[test]
    fn spawns_with_full_hit_points_and_no_barrier() {
        let teros = squaddie();
        assert_eq!(teros.current_hp(), 5);
        assert_eq!(teros.current_barrier(), 0);
        assert!(!teros.is_felled());
    }

    #[test]
    fn hit_point_loss_clamps_at_zero() {
        let mut teros = squaddie();
        assert_eq!(teros.reduce_hit_points(99), 5);
        assert_eq!(teros.current_hp(), 0);
        assert!(teros.is_felled());
    }

    #[test]
    fn healing_caps_at_maximum() {
        let mut teros = squaddie();
        teros.reduce_hit_points(1);
        assert_eq!(teros.restore_hit_points(3), 1);
        assert_eq!(teros.current_hp(), 5);
    }

    #[test]
    fn barrier_loss_clamps_at_zero() {
        let mut teros = squaddie();
        teros.raise_barrier_to_max();
        assert_eq!(teros.reduce_barrier(5), 2);
        assert_eq!(teros.current_barrier(), 0);
    }
}
