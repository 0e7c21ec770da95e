//! Ordered damage absorption: barrier, then extra barrier burn, then armor.

use crate::power::PowerType;

/// How a pool of incoming damage lands on one target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageDistribution {
    /// Damage that reaches hit points. Not clamped against current HP; the
    /// caller detects fatality and clamps on application.
    pub health_damage: i32,

    /// Barrier consumed by the main damage pool.
    pub barrier_damage: i32,

    /// Barrier consumed by the power's extra barrier burn.
    pub extra_barrier_damage: i32,
}

impl DamageDistribution {
    /// Barrier lost from both the main pool and the extra burn.
    pub fn total_barrier_damage(&self) -> i32 {
        self.barrier_damage + self.extra_barrier_damage
    }
}

/// Distributes a damage pool across a target's defenses.
///
/// # Absorption order
///
/// 1. The barrier absorbs the main pool first. A barrier larger than the
///    pool soaks all of it; otherwise the barrier collapses and the
///    remainder carries on.
/// 2. Extra barrier burn consumes up to whatever barrier remains,
///    independent of the main pool. It never spills into health.
/// 3. Armor subtracts from the remaining pool for Physical powers only;
///    spells go straight through. Health damage never goes negative.
pub fn distribute(
    damage_to_absorb: i32,
    extra_barrier_burn: i32,
    current_barrier: i32,
    armor: i32,
    power_type: PowerType,
) -> DamageDistribution {
    let mut damage_to_absorb = damage_to_absorb;
    let mut remaining_barrier = current_barrier;

    let barrier_damage = if current_barrier > damage_to_absorb {
        remaining_barrier -= damage_to_absorb;
        core::mem::replace(&mut damage_to_absorb, 0)
    } else {
        damage_to_absorb -= current_barrier;
        remaining_barrier = 0;
        current_barrier
    };

    let extra_barrier_damage = if extra_barrier_burn > 0 {
        extra_barrier_burn.min(remaining_barrier)
    } else {
        0
    };

    let health_damage = match power_type {
        PowerType::Physical => (damage_to_absorb - armor).max(0),
        PowerType::Spell => damage_to_absorb,
    };

    DamageDistribution {
        health_damage,
        barrier_damage,
        extra_barrier_damage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn barrier_larger_than_the_pool_soaks_everything() {
        let dist = distribute(3, 0, 5, 0, PowerType::Physical);
        assert_eq!(dist.barrier_damage, 3);
        assert_eq!(dist.health_damage, 0);
        assert_eq!(dist.extra_barrier_damage, 0);
    }

    #[test]
    fn collapsing_barrier_passes_the_remainder_to_health() {
        let dist = distribute(3, 0, 1, 0, PowerType::Spell);
        assert_eq!(dist.barrier_damage, 1);
        assert_eq!(dist.health_damage, 2);
    }

    #[test]
    fn extra_burn_consumes_only_leftover_barrier() {
        // Pool of 2 leaves 3 barrier standing; burn of 5 is capped there.
        let dist = distribute(2, 5, 5, 0, PowerType::Physical);
        assert_eq!(dist.barrier_damage, 2);
        assert_eq!(dist.extra_barrier_damage, 3);
        assert_eq!(dist.health_damage, 0);
    }

    #[test]
    fn extra_burn_is_independent_of_the_remaining_pool() {
        // Barrier collapses under the pool, so nothing is left to burn.
        let dist = distribute(4, 2, 1, 0, PowerType::Physical);
        assert_eq!(dist.barrier_damage, 1);
        assert_eq!(dist.extra_barrier_damage, 0);
        assert_eq!(dist.health_damage, 3);
    }

    #[test]
    fn armor_mitigates_physical_damage_only() {
        let physical = distribute(3, 0, 0, 2, PowerType::Physical);
        assert_eq!(physical.health_damage, 1);

        let spell = distribute(3, 0, 0, 2, PowerType::Spell);
        assert_eq!(spell.health_damage, 3);
    }

    #[test]
    fn armor_never_drives_health_damage_negative() {
        let dist = distribute(1, 0, 0, 4, PowerType::Physical);
        assert_eq!(dist.health_damage, 0);
    }

    #[test]
    fn barrier_accounting_balances() {
        for barrier in 0..6 {
            for pool in 0..6 {
                for burn in 0..4 {
                    let dist = distribute(pool, burn, barrier, 0, PowerType::Spell);
                    assert!(dist.health_damage >= 0);
                    assert!(dist.total_barrier_damage() <= barrier);
                    assert_eq!(
                        dist.barrier_damage + dist.health_damage,
                        pool,
                        "pool splits exactly between barrier and health (barrier {barrier}, pool {pool})"
                    );
                }
            }
        }
    }
}
