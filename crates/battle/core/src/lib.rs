//! Deterministic turn-based combat resolution between squaddies and powers.
//!
//! `battle-core` defines the canonical rules (stat model, probability
//! tables, damage absorption) and exposes the two-phase action API: a
//! read-only [`Forecast`] computed against repository state, and a one-shot
//! [`ActionResult`] that commits it with injected randomness, mutating
//! squaddie state and triggering bounded counter-attacks. External
//! collaborators (renderers, storage, AI) consume the types re-exported
//! here.

pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod power;
pub mod squaddie;

pub use combat::{
    ActionResult, ActionSetup, AttackForecast, AttackOutcome, AttackResolution, CommitError,
    DamageDistribution, Forecast, HealingForecast, HealingResolution, RollReport, TargetForecast,
    TargetResolution, VersusContext, chance_to_crit, chance_to_hit, distribute,
};
pub use config::BattleConfig;
pub use env::{
    BattleEnv, FixedRolls, OracleError, PcgDice, PowerOracle, PowerRepository, RollOracle,
    RollSide, SquaddieOracle, SquaddieRepository, compute_seed,
};
pub use error::{BattleError, ErrorSeverity};
pub use power::{
    AttackEffect, CriticalEffect, HealingAdjustment, HealingEffect, Power, PowerError, PowerId,
    PowerType, TargetingFlags,
};
pub use squaddie::{
    Affiliation, PowerReference, Squaddie, SquaddieError, SquaddieId, SquaddieProfile,
};
