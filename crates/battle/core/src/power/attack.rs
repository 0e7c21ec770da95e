//! Attack effect data carried by damaging powers.

/// Damage-dealing half of a power definition.
///
/// All bonuses are flat integers combined additively with the user's offense
/// stats by the combat layer; nothing here is a multiplier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackEffect {
    /// Added to the user's Aim when rolling to hit.
    pub to_hit_bonus: i32,

    /// Added to the user's Strength (Physical) or Mind (Spell) to form the
    /// damage pool.
    pub damage_bonus: i32,

    /// Guaranteed bonus barrier damage, consumed from whatever barrier
    /// remains after the main pool is absorbed. Never spills into health.
    pub extra_barrier_burn: i32,

    /// Reduces the flat counter-attack penalty when this power retaliates.
    pub counter_attack_penalty_reduction: i32,

    /// Whether a squaddie may hold this power as its equipped power.
    pub can_be_equipped: bool,

    /// Whether this power retaliates against attackers while equipped.
    pub can_counter_attack: bool,

    /// Present only on powers that can critically hit.
    pub critical_effect: Option<CriticalEffect>,
}

/// Critical-hit parameters of an attack effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CriticalEffect {
    /// Added on top of the normal damage pool on a critical hit.
    pub extra_critical_hit_damage: i32,

    /// Shifts the critical-hit threshold in the attacker's favor.
    pub critical_hit_threshold_bonus: i32,
}
