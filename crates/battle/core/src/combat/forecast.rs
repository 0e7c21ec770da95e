//! Probability-correct prediction of a power's outcome, with no mutation.
//!
//! A [`Forecast`] is an ephemeral snapshot: it holds ids, never live
//! references, and is computed fresh from the repositories each time. It is
//! invalid to commit a forecast built against state that has since changed.

use tracing::trace;

use crate::combat::damage::{DamageDistribution, distribute};
use crate::combat::versus::{
    self, VersusContext, chance_to_crit_against, critical_damage_bonus, total_damage_bonus,
};
use crate::env::{BattleEnv, OracleError};
use crate::power::{AttackEffect, Power, PowerId};
use crate::squaddie::{Squaddie, SquaddieId};

/// Who acts, with what, on whom.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionSetup {
    pub user_id: SquaddieId,
    pub power_id: PowerId,
    /// Targets in caller-specified order; forecasting and commitment both
    /// preserve it exactly.
    pub targets: Vec<SquaddieId>,
    pub is_counter_attack: bool,
}

/// Forecast of one action against every target, in target order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Forecast {
    pub setup: ActionSetup,
    pub per_target: Vec<TargetForecast>,
}

/// Forecast of one action against one target.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetForecast {
    pub target_id: SquaddieId,
    pub versus: VersusContext,
    pub attack: Option<AttackForecast>,
    pub healing: Option<HealingForecast>,
    /// Retaliation the target would launch; never present on a forecast
    /// that is itself a counter-attack, which caps the recursion at one
    /// level.
    pub counter_attack: Option<Box<Forecast>>,
}

/// Predicted damage lines for an attack effect.
///
/// Expected values are integer numerators over 36 (chance times damage), so
/// fractional expectations stay exact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackForecast {
    pub damage_taken: i32,
    pub barrier_damage_taken: i32,
    pub expected_damage: i32,
    pub expected_barrier_damage: i32,
    pub chance_to_crit: i32,
    pub critical_damage_taken: i32,
    pub critical_barrier_damage_taken: i32,
    pub critical_expected_damage: i32,
    pub critical_expected_barrier_damage: i32,
    /// True when a regular hit would fell the target outright.
    pub is_fatal: bool,
}

/// Predicted restoration for a healing effect. Healing always lands; the
/// cap against live hit points is applied at commit time.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealingForecast {
    pub target_id: SquaddieId,
    pub raw_hit_points_restored: i32,
}

impl Forecast {
    /// Computes the forecast for an action.
    ///
    /// Read-only over squaddie and power state; safe to recompute and
    /// discard.
    ///
    /// # Errors
    ///
    /// Any unresolvable squaddie or power id aborts the whole forecast.
    pub fn calculate(setup: ActionSetup, env: &BattleEnv<'_>) -> Result<Self, OracleError> {
        let squaddies = env.squaddies()?;
        let powers = env.powers()?;

        let user = squaddies
            .squaddie(&setup.user_id)
            .ok_or_else(|| OracleError::SquaddieNotFound(setup.user_id.clone()))?;
        let power = powers
            .power(&setup.power_id)
            .ok_or_else(|| OracleError::PowerNotFound(setup.power_id.clone()))?;

        trace!(
            user = %setup.user_id,
            power = %setup.power_id,
            targets = setup.targets.len(),
            is_counter_attack = setup.is_counter_attack,
            "calculating forecast"
        );

        let mut per_target = Vec::with_capacity(setup.targets.len());
        for target_id in &setup.targets {
            let target = squaddies
                .squaddie(target_id)
                .ok_or_else(|| OracleError::SquaddieNotFound(target_id.clone()))?;

            let versus = versus::versus_context(user, target, power, setup.is_counter_attack);
            let attack = power
                .attack()
                .map(|effect| attack_forecast(user, target, power, effect, &versus));
            let healing = power.healing().map(|effect| HealingForecast {
                target_id: target_id.clone(),
                raw_hit_points_restored: effect.hit_points_healed
                    + effect.adjustment.apply(user.mind()),
            });

            let counter_attack = if setup.is_counter_attack {
                None
            } else {
                counter_forecast(target, &setup.user_id, env)?
            };

            per_target.push(TargetForecast {
                target_id: target_id.clone(),
                versus,
                attack,
                healing,
                counter_attack: counter_attack.map(Box::new),
            });
        }

        Ok(Self { setup, per_target })
    }
}

fn attack_forecast(
    attacker: &Squaddie,
    target: &Squaddie,
    power: &Power,
    effect: &AttackEffect,
    versus: &VersusContext,
) -> AttackForecast {
    let power_type = power.power_type();
    let normal = distribute(
        total_damage_bonus(attacker, power_type, effect),
        effect.extra_barrier_burn,
        target.current_barrier(),
        target.armor(),
        power_type,
    );

    let chance_to_crit = chance_to_crit_against(effect, target, power_type);
    let critical = if chance_to_crit > 0 {
        critical_damage_bonus(attacker, power_type, effect)
            .map(|pool| {
                distribute(
                    pool,
                    effect.extra_barrier_burn,
                    target.current_barrier(),
                    target.armor(),
                    power_type,
                )
            })
            .unwrap_or_default()
    } else {
        DamageDistribution::default()
    };

    AttackForecast {
        damage_taken: normal.health_damage,
        barrier_damage_taken: normal.total_barrier_damage(),
        expected_damage: versus.chance_to_hit * normal.health_damage,
        expected_barrier_damage: versus.chance_to_hit * normal.total_barrier_damage(),
        chance_to_crit,
        critical_damage_taken: critical.health_damage,
        critical_barrier_damage_taken: critical.total_barrier_damage(),
        critical_expected_damage: versus.chance_to_hit * critical.health_damage,
        critical_expected_barrier_damage: versus.chance_to_hit * critical.total_barrier_damage(),
        is_fatal: normal.health_damage >= target.current_hp(),
    }
}

/// Forecasts the target's retaliation, if its equipped power can counter.
fn counter_forecast(
    target: &Squaddie,
    attacker_id: &SquaddieId,
    env: &BattleEnv<'_>,
) -> Result<Option<Forecast>, OracleError> {
    let Some(equipped_id) = target.equipped_power_id() else {
        return Ok(None);
    };
    let equipped = env
        .powers()?
        .power(equipped_id)
        .ok_or_else(|| OracleError::PowerNotFound(equipped_id.clone()))?;
    if !equipped.can_counter_attack() {
        return Ok(None);
    }

    let setup = ActionSetup {
        user_id: target.id().clone(),
        power_id: equipped_id.clone(),
        targets: vec![attacker_id.clone()],
        is_counter_attack: true,
    };
    Forecast::calculate(setup, env).map(Some)
}
