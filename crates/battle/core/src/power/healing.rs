//! Healing effect data carried by restorative powers.

/// How much of the user's Mind stat feeds into healing.
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
pub enum HealingAdjustment {
    /// The full Mind stat is added.
    #[default]
    Full,
    /// Half the Mind stat, integer-truncated.
    Half,
    /// Mind does not contribute.
    Zero,
}

impl HealingAdjustment {
    /// Applies this adjustment to the user's Mind stat.
    pub fn apply(&self, mind: i32) -> i32 {
        match self {
            Self::Full => mind,
            Self::Half => mind / 2,
            Self::Zero => 0,
        }
    }
}

/// Restorative half of a power definition. Healing never rolls to hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealingEffect {
    /// Base hit points restored before the Mind adjustment.
    pub hit_points_healed: i32,

    /// How the user's Mind stat scales the restoration.
    pub adjustment: HealingAdjustment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjustment_scales_mind() {
        assert_eq!(HealingAdjustment::Full.apply(3), 3);
        assert_eq!(HealingAdjustment::Half.apply(3), 1);
        assert_eq!(HealingAdjustment::Half.apply(1), 0);
        assert_eq!(HealingAdjustment::Zero.apply(3), 0);
    }
}
