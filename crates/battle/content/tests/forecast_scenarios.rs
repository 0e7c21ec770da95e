use battle_core::{
    ActionSetup, AttackEffect, BattleEnv, Forecast, HealingAdjustment, HealingEffect, OracleError,
    Power, PowerId, PowerOracle, PowerType, SquaddieId, SquaddieOracle, SquaddieProfile,
    TargetingFlags,
};
use battle_content::{Roster, standard_roster};

fn setup(user: &str, power: &str, targets: &[&str]) -> ActionSetup {
    ActionSetup {
        user_id: user.into(),
        power_id: power.into(),
        targets: targets.iter().map(|target| (*target).into()).collect(),
        is_counter_attack: false,
    }
}

fn forecast(roster: &Roster, action: ActionSetup) -> Forecast {
    let env = BattleEnv::new(Some(&roster.squaddies), Some(&roster.powers), None);
    Forecast::calculate(action, &env).expect("forecast should resolve")
}

#[test]
fn attack_numbers_follow_the_tables() {
    let roster = standard_roster();
    let forecast = forecast(&roster, setup("teros", "spear", &["bandit"]));

    let result = &forecast.per_target[0];
    // Spear +1 with Aim 2 against Dodge 0: delta 3 -> 33/36.
    assert_eq!(result.versus.to_hit_bonus, 3);
    assert_eq!(result.versus.to_hit_penalty, 0);
    assert_eq!(result.versus.chance_to_hit, 33);

    let attack = result.attack.as_ref().expect("spear has an attack effect");
    assert_eq!(attack.damage_taken, 2);
    assert_eq!(attack.barrier_damage_taken, 0);
    assert_eq!(attack.expected_damage, 33 * 2);
    assert_eq!(attack.chance_to_crit, 21);
    assert_eq!(attack.critical_damage_taken, 3);
    assert_eq!(attack.critical_expected_damage, 33 * 3);
    assert!(!attack.is_fatal);
}

#[test]
fn fatal_flag_tracks_remaining_hit_points() {
    let mut roster = standard_roster();
    roster
        .powers
        .add_power(
            Power::new(
                PowerId::new("great_maul"),
                "Great Maul",
                PowerType::Physical,
                TargetingFlags::FOE,
                Some(AttackEffect {
                    damage_bonus: 5,
                    ..AttackEffect::default()
                }),
                None,
            )
            .unwrap(),
        )
        .unwrap();

    let forecast = forecast(&roster, setup("bandit", "great_maul", &["lini"]));
    let attack = forecast.per_target[0].attack.as_ref().unwrap();
    assert_eq!(attack.damage_taken, 5);
    assert!(attack.is_fatal);
}

#[test]
fn no_counter_attack_without_an_equipped_power() {
    let roster = standard_roster();
    let forecast = forecast(&roster, setup("teros", "spear", &["mystic_mage"]));
    assert!(forecast.per_target[0].counter_attack.is_none());
}

#[test]
fn equipped_power_that_cannot_counter_does_not_retaliate() {
    let mut roster = standard_roster();
    let fireball = roster
        .powers
        .power(&"fireball".into())
        .expect("fireball is stocked")
        .clone();
    roster
        .squaddies
        .squaddie_mut(&"mystic_mage".into())
        .unwrap()
        .equip_power(&fireball)
        .unwrap();

    let forecast = forecast(&roster, setup("teros", "spear", &["mystic_mage"]));
    assert!(forecast.per_target[0].counter_attack.is_none());
}

#[test]
fn equipped_axe_retaliates_at_a_penalty() {
    let mut roster = standard_roster();
    let axe = roster.powers.power(&"axe".into()).unwrap().clone();
    roster
        .squaddies
        .squaddie_mut(&"bandit".into())
        .unwrap()
        .equip_power(&axe)
        .unwrap();

    let forecast = forecast(&roster, setup("teros", "spear", &["bandit"]));
    let counter = forecast.per_target[0]
        .counter_attack
        .as_ref()
        .expect("an equipped axe retaliates");

    assert!(counter.setup.is_counter_attack);
    assert_eq!(counter.setup.user_id, SquaddieId::new("bandit"));
    assert_eq!(counter.setup.targets, vec![SquaddieId::new("teros")]);
    // Axe +1, Aim 0, flat penalty 2: 1 + 0 - (2 - 0) = -1.
    assert_eq!(counter.per_target[0].versus.to_hit_bonus, -1);
    // A counter-attack never triggers a further counter.
    assert!(counter.per_target[0].counter_attack.is_none());
}

#[test]
fn healing_on_an_armed_target_still_provokes_a_counter() {
    let mut roster = standard_roster();
    let axe = roster.powers.power(&"axe".into()).unwrap().clone();
    roster
        .squaddies
        .squaddie_mut(&"bandit".into())
        .unwrap()
        .equip_power(&axe)
        .unwrap();

    let forecast = forecast(&roster, setup("lini", "healing_staff", &["bandit"]));
    let counter = forecast.per_target[0].counter_attack.as_ref().unwrap();
    assert_eq!(counter.setup.targets, vec![SquaddieId::new("lini")]);
}

#[test]
fn healing_forecast_adds_adjusted_mind() {
    let roster = standard_roster();
    let forecast = forecast(&roster, setup("lini", "healing_staff", &["teros"]));

    let healing = forecast.per_target[0].healing.as_ref().unwrap();
    assert_eq!(healing.target_id, SquaddieId::new("teros"));
    // Staff 3 plus Lini's full Mind of 1; the cap is a commit-time concern.
    assert_eq!(healing.raw_hit_points_restored, 4);
}

#[test]
fn half_and_zero_mind_adjustments_truncate() {
    let mut roster = standard_roster();
    for (id, adjustment) in [
        ("half_staff", HealingAdjustment::Half),
        ("dead_staff", HealingAdjustment::Zero),
    ] {
        roster
            .powers
            .add_power(
                Power::new(
                    PowerId::new(id),
                    "Staff Variant",
                    PowerType::Spell,
                    TargetingFlags::SELF | TargetingFlags::FRIEND,
                    None,
                    Some(HealingEffect {
                        hit_points_healed: 3,
                        adjustment,
                    }),
                )
                .unwrap(),
            )
            .unwrap();
    }
    roster
        .squaddies
        .add_squaddie(
            SquaddieProfile {
                name: "Vale".into(),
                mind: 3,
                ..SquaddieProfile::default()
            }
            .spawn(SquaddieId::new("vale")),
        )
        .unwrap();

    let halved = forecast(&roster, setup("vale", "half_staff", &["teros"]));
    assert_eq!(
        halved.per_target[0]
            .healing
            .as_ref()
            .unwrap()
            .raw_hit_points_restored,
        4
    );

    let zeroed = forecast(&roster, setup("vale", "dead_staff", &["teros"]));
    assert_eq!(
        zeroed.per_target[0]
            .healing
            .as_ref()
            .unwrap()
            .raw_hit_points_restored,
        3
    );
}

#[test]
fn multi_target_forecasts_preserve_target_order() {
    let roster = standard_roster();
    let forecast = forecast(&roster, setup("lini", "healing_staff", &["teros", "lini"]));

    assert_eq!(forecast.per_target.len(), 2);
    assert_eq!(forecast.per_target[0].target_id, SquaddieId::new("teros"));
    assert_eq!(forecast.per_target[1].target_id, SquaddieId::new("lini"));
    assert_eq!(
        forecast.per_target[1]
            .healing
            .as_ref()
            .unwrap()
            .target_id,
        SquaddieId::new("lini")
    );
}

#[test]
fn forecasting_never_mutates_state() {
    let roster = standard_roster();
    let teros_before = roster.squaddies.squaddie(&"teros".into()).unwrap().clone();
    let bandit_before = roster.squaddies.squaddie(&"bandit".into()).unwrap().clone();

    let _ = forecast(&roster, setup("teros", "spear", &["bandit"]));

    assert_eq!(
        roster.squaddies.squaddie(&"teros".into()).unwrap(),
        &teros_before
    );
    assert_eq!(
        roster.squaddies.squaddie(&"bandit".into()).unwrap(),
        &bandit_before
    );
}

#[test]
fn unknown_ids_abort_the_forecast() {
    let roster = standard_roster();
    let env = BattleEnv::new(Some(&roster.squaddies), Some(&roster.powers), None);

    let missing_power = Forecast::calculate(setup("teros", "ballista", &["bandit"]), &env);
    assert_eq!(
        missing_power.unwrap_err(),
        OracleError::PowerNotFound(PowerId::new("ballista"))
    );

    let missing_target = Forecast::calculate(setup("teros", "spear", &["ghost"]), &env);
    assert_eq!(
        missing_target.unwrap_err(),
        OracleError::SquaddieNotFound(SquaddieId::new("ghost"))
    );
}
