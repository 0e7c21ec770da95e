//! Commitment of a forecast: actual rolls, actual mutation.
//!
//! An [`ActionResult`] wraps a forecast and applies it exactly once through
//! the authoritative squaddie store. All primary targets resolve before any
//! counter-attack, each phase in caller-specified target order, because
//! rendering and derived logs depend on that sequencing.

use tracing::debug;

use crate::combat::damage::distribute;
use crate::combat::forecast::{Forecast, TargetForecast};
use crate::combat::versus::{self, total_damage_bonus};
use crate::env::{BattleEnv, OracleError, RollSide, SquaddieOracle, SquaddieRepository, compute_seed};
use crate::error::{BattleError, ErrorSeverity};
use crate::power::PowerId;
use crate::squaddie::SquaddieId;

/// Outcome of one opposed attack check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// The attack missed; nothing was mutated.
    Miss,
    /// The attack landed.
    Hit,
    /// The attack landed critically.
    CriticalHit,
}

impl AttackOutcome {
    pub fn is_hit(&self) -> bool {
        !matches!(self, Self::Miss)
    }

    pub fn is_critical(&self) -> bool {
        matches!(self, Self::CriticalHit)
    }
}

/// Raw arithmetic of one opposed check, kept for verbose rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollReport {
    pub attacker_roll: i32,
    pub attacker_total: i32,
    pub defender_roll: i32,
    pub defender_total: i32,
}

/// What one attack actually did to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResolution {
    pub outcome: AttackOutcome,
    /// Hit points actually removed (post-clamp).
    pub health_damage: i32,
    /// Barrier actually removed (post-clamp).
    pub barrier_damage: i32,
    /// True when this blow felled the target.
    pub is_fatal: bool,
    pub to_hit: RollReport,
}

/// What one healing effect actually restored. Healing auto-hits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealingResolution {
    /// Hit points actually restored (capped against the maximum).
    pub hit_points_restored: i32,
}

/// Committed outcome of one action against one target.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetResolution {
    pub user_id: SquaddieId,
    pub power_id: PowerId,
    pub target_id: SquaddieId,
    pub attack: Option<AttackResolution>,
    pub healing: Option<HealingResolution>,
    /// The target's committed retaliation, one level deep at most.
    pub counter_attack: Option<Box<TargetResolution>>,
}

/// Errors raised while committing a forecast.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommitError {
    /// The result was already committed; committing twice would re-apply
    /// damage and healing.
    #[error("action result has already been committed")]
    AlreadyCommitted,

    /// A squaddie or power id no longer resolves.
    #[error(transparent)]
    Lookup(#[from] OracleError),
}

impl BattleError for CommitError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AlreadyCommitted => ErrorSeverity::Internal,
            Self::Lookup(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyCommitted => "COMMIT_ALREADY_COMMITTED",
            Self::Lookup(inner) => inner.error_code(),
        }
    }
}

/// One-shot commitment of a forecast.
///
/// Holds the forecast, the base seed for roll derivation, and, once
/// committed, the per-target resolutions.
#[derive(Clone, Debug)]
pub struct ActionResult {
    forecast: Forecast,
    seed: u64,
    committed: bool,
    resolutions: Vec<TargetResolution>,
}

impl ActionResult {
    pub fn new(forecast: Forecast, seed: u64) -> Self {
        Self {
            forecast,
            seed,
            committed: false,
            resolutions: Vec::new(),
        }
    }

    pub fn forecast(&self) -> &Forecast {
        &self.forecast
    }

    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// Per-target resolutions, in target order. Empty until committed.
    pub fn resolutions(&self) -> &[TargetResolution] {
        &self.resolutions
    }

    /// Applies the forecast: rolls every opposed check, mutates targets,
    /// then executes the triggered counter-attacks one level deep.
    ///
    /// Numbers are recomputed from live repository state rather than
    /// replayed from the forecast, so a forecast committed against changed
    /// state fails loudly on lookups instead of applying stale deltas.
    ///
    /// # Errors
    ///
    /// [`CommitError::AlreadyCommitted`] on a second call, with no state
    /// mutation. Unresolvable ids abort with the underlying lookup error.
    pub fn commit(
        &mut self,
        squaddies: &mut SquaddieRepository,
        env: &BattleEnv<'_>,
    ) -> Result<(), CommitError> {
        if self.committed {
            return Err(CommitError::AlreadyCommitted);
        }

        let mut sequence = 0u64;
        let mut resolutions = Vec::with_capacity(self.forecast.per_target.len());

        for target_forecast in &self.forecast.per_target {
            resolutions.push(resolve_action(
                &self.forecast.setup.user_id,
                &self.forecast.setup.power_id,
                target_forecast,
                self.forecast.setup.is_counter_attack,
                squaddies,
                env,
                self.seed,
                &mut sequence,
            )?);
        }

        for (index, target_forecast) in self.forecast.per_target.iter().enumerate() {
            let Some(counter) = &target_forecast.counter_attack else {
                continue;
            };
            let Some(counter_target) = counter.per_target.first() else {
                continue;
            };

            let counter_user = squaddies
                .squaddie(&counter.setup.user_id)
                .ok_or_else(|| OracleError::SquaddieNotFound(counter.setup.user_id.clone()))?;
            if counter_user.is_felled() {
                debug!(user = %counter.setup.user_id, "felled squaddie cannot counter-attack");
                continue;
            }

            let resolution = resolve_action(
                &counter.setup.user_id,
                &counter.setup.power_id,
                counter_target,
                true,
                squaddies,
                env,
                self.seed,
                &mut sequence,
            )?;
            resolutions[index].counter_attack = Some(Box::new(resolution));
        }

        self.resolutions = resolutions;
        self.committed = true;
        Ok(())
    }
}

struct AttackInputs {
    extra_barrier_burn: i32,
    normal_pool: i32,
    critical: Option<CritInputs>,
}

struct CritInputs {
    pool: i32,
    threshold_bonus: i32,
}

/// Resolves one action against one target, mutating the target.
#[allow(clippy::too_many_arguments)]
fn resolve_action(
    user_id: &SquaddieId,
    power_id: &PowerId,
    target_forecast: &TargetForecast,
    is_counter_attack: bool,
    squaddies: &mut SquaddieRepository,
    env: &BattleEnv<'_>,
    seed: u64,
    sequence: &mut u64,
) -> Result<TargetResolution, CommitError> {
    let rolls = env.rolls()?;
    let power = env
        .powers()?
        .power(power_id)
        .ok_or_else(|| OracleError::PowerNotFound(power_id.clone()))?;
    let power_type = power.power_type();
    let target_id = &target_forecast.target_id;

    let attacker = squaddies
        .squaddie(user_id)
        .ok_or_else(|| OracleError::SquaddieNotFound(user_id.clone()))?;
    let target = squaddies
        .squaddie(target_id)
        .ok_or_else(|| OracleError::SquaddieNotFound(target_id.clone()))?;

    let versus = versus::versus_context(attacker, target, power, is_counter_attack);
    let attack_inputs = power.attack().map(|effect| AttackInputs {
        extra_barrier_burn: effect.extra_barrier_burn,
        normal_pool: total_damage_bonus(attacker, power_type, effect),
        critical: effect.critical_effect.map(|critical| CritInputs {
            pool: total_damage_bonus(attacker, power_type, effect)
                + critical.extra_critical_hit_damage,
            threshold_bonus: critical.critical_hit_threshold_bonus,
        }),
    });
    let healing_raw = power
        .healing()
        .map(|effect| effect.hit_points_healed + effect.adjustment.apply(attacker.mind()));

    let target = squaddies
        .squaddie_mut(target_id)
        .ok_or_else(|| OracleError::SquaddieNotFound(target_id.clone()))?;

    let attack = attack_inputs.map(|inputs| {
        let check = *sequence;
        *sequence += 1;

        let attacker_roll = rolls.roll(RollSide::Attacker, compute_seed(seed, check, 0));
        let defender_roll = rolls.roll(RollSide::Defender, compute_seed(seed, check, 1));
        let to_hit = RollReport {
            attacker_roll,
            attacker_total: attacker_roll + versus.to_hit_bonus,
            defender_roll,
            defender_total: defender_roll + versus.to_hit_penalty,
        };

        if to_hit.attacker_total <= to_hit.defender_total {
            debug!(user = %user_id, power = %power_id, target = %target_id, "attack missed");
            return AttackResolution {
                outcome: AttackOutcome::Miss,
                health_damage: 0,
                barrier_damage: 0,
                is_fatal: false,
                to_hit,
            };
        }

        // The crit check mirrors the to-hit check: the power's threshold
        // bonus against the target's same dodge/deflect penalty.
        let (critical, pool) = match inputs.critical {
            Some(crit) => {
                let crit_attacker = rolls.roll(RollSide::Attacker, compute_seed(seed, check, 2))
                    + crit.threshold_bonus;
                let crit_defender = rolls.roll(RollSide::Defender, compute_seed(seed, check, 3))
                    + versus.to_hit_penalty;
                if crit_attacker > crit_defender {
                    (true, crit.pool)
                } else {
                    (false, inputs.normal_pool)
                }
            }
            None => (false, inputs.normal_pool),
        };

        let distribution = distribute(
            pool,
            inputs.extra_barrier_burn,
            target.current_barrier(),
            target.armor(),
            power_type,
        );
        let barrier_damage = target.reduce_barrier(distribution.total_barrier_damage());
        let health_damage = target.reduce_hit_points(distribution.health_damage);
        let is_fatal = health_damage > 0 && target.is_felled();

        let outcome = if critical {
            AttackOutcome::CriticalHit
        } else {
            AttackOutcome::Hit
        };
        debug!(
            user = %user_id,
            power = %power_id,
            target = %target_id,
            ?outcome,
            health_damage,
            barrier_damage,
            is_fatal,
            "attack resolved"
        );

        AttackResolution {
            outcome,
            health_damage,
            barrier_damage,
            is_fatal,
            to_hit,
        }
    });

    let healing = healing_raw.map(|raw| {
        let hit_points_restored = target.restore_hit_points(raw);
        debug!(
            user = %user_id,
            power = %power_id,
            target = %target_id,
            hit_points_restored,
            "healing resolved"
        );
        HealingResolution { hit_points_restored }
    });

    Ok(TargetResolution {
        user_id: user_id.clone(),
        power_id: power_id.clone(),
        target_id: target_id.clone(),
        attack,
        healing,
        counter_attack: None,
    })
}
