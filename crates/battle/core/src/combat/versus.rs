//! Attacker-versus-target arithmetic: to-hit bonuses and penalties, damage
//! pools, and the critical-hit threshold.

use crate::combat::chance::{chance_to_crit, chance_to_hit};
use crate::config::BattleConfig;
use crate::power::{AttackEffect, Power, PowerType};
use crate::squaddie::Squaddie;

/// The opposed-roll context between one attacker and one target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VersusContext {
    /// Attacker's total to-hit bonus (power bonus + Aim, minus the counter
    /// penalty when retaliating).
    pub to_hit_bonus: i32,

    /// Target's to-hit penalty (Dodge against Physical, Deflect against
    /// Spell).
    pub to_hit_penalty: i32,

    /// Chance to hit out of 36 for this matchup.
    pub chance_to_hit: i32,
}

/// Builds the opposed-roll context for an attacker using a power on a target.
pub fn versus_context(
    attacker: &Squaddie,
    target: &Squaddie,
    power: &Power,
    is_counter_attack: bool,
) -> VersusContext {
    let to_hit_bonus = total_to_hit_bonus(attacker, power, is_counter_attack);
    let to_hit_penalty = to_hit_penalty(target, power.power_type());
    VersusContext {
        to_hit_bonus,
        to_hit_penalty,
        chance_to_hit: chance_to_hit(to_hit_bonus - to_hit_penalty),
    }
}

/// Attacker's total to-hit bonus for a power, after any counter penalty.
pub fn total_to_hit_bonus(attacker: &Squaddie, power: &Power, is_counter_attack: bool) -> i32 {
    let power_bonus = power.attack().map_or(0, |attack| attack.to_hit_bonus);
    let bonus = power_bonus + attacker.aim();
    if is_counter_attack {
        bonus - counter_attack_penalty(power)
    } else {
        bonus
    }
}

/// Net penalty a power suffers when used as a counter-attack.
pub fn counter_attack_penalty(power: &Power) -> i32 {
    let reduction = power
        .attack()
        .map_or(0, |attack| attack.counter_attack_penalty_reduction);
    BattleConfig::BASE_COUNTER_PENALTY - reduction
}

/// How much the target reduces the chance of being hit by this power type.
pub fn to_hit_penalty(target: &Squaddie, power_type: PowerType) -> i32 {
    match power_type {
        PowerType::Physical => target.dodge(),
        PowerType::Spell => target.deflect(),
    }
}

/// Damage pool for a regular hit: power bonus plus the matching offense stat.
pub fn total_damage_bonus(attacker: &Squaddie, power_type: PowerType, attack: &AttackEffect) -> i32 {
    let stat = match power_type {
        PowerType::Physical => attacker.strength(),
        PowerType::Spell => attacker.mind(),
    };
    attack.damage_bonus + stat
}

/// Damage pool for a critical hit. Strictly additive on top of the normal
/// pool; `None` when the power cannot crit.
pub fn critical_damage_bonus(
    attacker: &Squaddie,
    power_type: PowerType,
    attack: &AttackEffect,
) -> Option<i32> {
    attack.critical_effect.map(|critical| {
        total_damage_bonus(attacker, power_type, attack) + critical.extra_critical_hit_damage
    })
}

/// Effective critical-hit threshold against a target, or `None` when the
/// power cannot crit.
///
/// Mirrors the to-hit computation: the baseline plus the power's threshold
/// bonus, opposed by the target's Dodge/Deflect.
pub fn critical_hit_threshold(
    attack: &AttackEffect,
    target: &Squaddie,
    power_type: PowerType,
) -> Option<i32> {
    attack.critical_effect.map(|critical| {
        BattleConfig::CRIT_BASE_THRESHOLD + critical.critical_hit_threshold_bonus
            - to_hit_penalty(target, power_type)
    })
}

/// Chance out of 36 for a critical hit against a target; 0 when the power
/// cannot crit.
pub fn chance_to_crit_against(
    attack: &AttackEffect,
    target: &Squaddie,
    power_type: PowerType,
) -> i32 {
    critical_hit_threshold(attack, target, power_type).map_or(0, chance_to_crit)
}
