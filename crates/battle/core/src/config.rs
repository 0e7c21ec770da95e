/// Engine tuning constants.
///
/// Everything here is compile-time policy: the numbers the combat tables and
/// the counter-attack rules are balanced around. Runtime systems never need
/// an instance; the constants are read directly.
pub struct BattleConfig;

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of innate powers a squaddie can carry.
    pub const MAX_INNATE_POWERS: usize = 16;

    // ===== combat policy constants =====
    /// Sides on the die each combatant rolls during resolution. Two opposed
    /// dice give the 36-outcome space the chance tables are written in.
    pub const DIE_SIDES: u32 = 6;

    /// Flat to-hit penalty applied to counter-attacks before the power's
    /// penalty reduction. An unmodified to-hit-1 power countering with a
    /// zero-aim user nets out to -1.
    pub const BASE_COUNTER_PENALTY: i32 = 2;

    /// Baseline for the critical-hit threshold, the midpoint of the crit
    /// table: an unmodified power against a zero-defense target crits at
    /// 21/36, mirroring the to-hit table's delta-0 anchor.
    pub const CRIT_BASE_THRESHOLD: i32 = 7;
}
