//! Stock power definitions.

use battle_core::{
    AttackEffect, CriticalEffect, HealingAdjustment, HealingEffect, Power, PowerId, PowerType,
    TargetingFlags,
};

/// Balanced one-handed weapon that can retaliate.
pub fn spear() -> Power {
    Power::new(
        PowerId::new("spear"),
        "Spear",
        PowerType::Physical,
        TargetingFlags::FOE,
        Some(AttackEffect {
            to_hit_bonus: 1,
            damage_bonus: 1,
            can_be_equipped: true,
            can_counter_attack: true,
            critical_effect: Some(CriticalEffect {
                extra_critical_hit_damage: 1,
                critical_hit_threshold_bonus: 0,
            }),
            ..AttackEffect::default()
        }),
        None,
    )
    .expect("stock power definitions are valid")
}

/// Heavy weapon favored by bandits; hits hard and retaliates.
pub fn axe() -> Power {
    Power::new(
        PowerId::new("axe"),
        "Axe",
        PowerType::Physical,
        TargetingFlags::FOE,
        Some(AttackEffect {
            to_hit_bonus: 1,
            damage_bonus: 2,
            can_be_equipped: true,
            can_counter_attack: true,
            ..AttackEffect::default()
        }),
        None,
    )
    .expect("stock power definitions are valid")
}

/// Offensive spell; cannot retaliate even while equipped.
pub fn fireball() -> Power {
    Power::new(
        PowerId::new("fireball"),
        "Fireball",
        PowerType::Spell,
        TargetingFlags::FOE,
        Some(AttackEffect {
            to_hit_bonus: 1,
            damage_bonus: 1,
            can_be_equipped: true,
            ..AttackEffect::default()
        }),
        None,
    )
    .expect("stock power definitions are valid")
}

/// Restorative staff scaling fully with the user's Mind.
pub fn healing_staff() -> Power {
    Power::new(
        PowerId::new("healing_staff"),
        "Healing Staff",
        PowerType::Spell,
        TargetingFlags::SELF | TargetingFlags::FRIEND,
        None,
        Some(HealingEffect {
            hit_points_healed: 3,
            adjustment: HealingAdjustment::Full,
        }),
    )
    .expect("stock power definitions are valid")
}
