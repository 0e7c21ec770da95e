//! Power resolution: probability tables, damage absorption, forecasting,
//! and commitment.
//!
//! The layering is strict: `chance` and `damage` are pure numeric policy,
//! `versus` combines them with squaddie stats, `forecast` predicts without
//! mutating, and `resolve` is the only code that touches squaddie state.

mod chance;
mod damage;
mod forecast;
mod resolve;
mod versus;

pub use chance::{chance_to_crit, chance_to_hit};
pub use damage::{DamageDistribution, distribute};
pub use forecast::{ActionSetup, AttackForecast, Forecast, HealingForecast, TargetForecast};
pub use resolve::{
    ActionResult, AttackOutcome, AttackResolution, CommitError, HealingResolution, RollReport,
    TargetResolution,
};
pub use versus::{
    VersusContext, chance_to_crit_against, counter_attack_penalty, critical_damage_bonus,
    critical_hit_threshold, to_hit_penalty, total_damage_bonus, total_to_hit_bonus, versus_context,
};
