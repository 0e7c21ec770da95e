//! Stock squaddie definitions.
//!
//! Each constructor spawns a fresh squaddie with its innate powers wired up
//! but nothing equipped; scenarios equip explicitly.

use battle_core::{Affiliation, PowerReference, Squaddie, SquaddieId, SquaddieProfile};

use crate::powers;

/// Spear-wielding player soldier.
pub fn teros() -> Squaddie {
    let mut teros = SquaddieProfile {
        name: "Teros".into(),
        affiliation: Affiliation::Player,
        aim: 2,
        strength: 1,
        mind: 1,
        max_hp: 5,
        dodge: 1,
        deflect: 1,
        max_barrier: 2,
        armor: 0,
    }
    .spawn(SquaddieId::new("teros"));
    teros
        .add_innate_power(PowerReference::from(&powers::spear()))
        .expect("stock roster powers are unique");
    teros
}

/// Unremarkable axe-carrying enemy.
pub fn bandit() -> Squaddie {
    let mut bandit = SquaddieProfile {
        name: "Bandit".into(),
        affiliation: Affiliation::Enemy,
        max_hp: 5,
        ..SquaddieProfile::default()
    }
    .spawn(SquaddieId::new("bandit"));
    bandit
        .add_innate_power(PowerReference::from(&powers::axe()))
        .expect("stock roster powers are unique");
    bandit
}

/// Enemy caster with a strong Mind and no equipped weapon.
pub fn mystic_mage() -> Squaddie {
    let mut mage = SquaddieProfile {
        name: "Mystic Mage".into(),
        affiliation: Affiliation::Enemy,
        mind: 3,
        deflect: 2,
        max_hp: 5,
        ..SquaddieProfile::default()
    }
    .spawn(SquaddieId::new("mystic_mage"));
    mage.add_innate_power(PowerReference::from(&powers::fireball()))
        .expect("stock roster powers are unique");
    mage
}

/// Player healer carrying the healing staff.
pub fn lini() -> Squaddie {
    let mut lini = SquaddieProfile {
        name: "Lini".into(),
        affiliation: Affiliation::Player,
        mind: 1,
        max_hp: 5,
        ..SquaddieProfile::default()
    }
    .spawn(SquaddieId::new("lini"));
    lini.add_innate_power(PowerReference::from(&powers::healing_staff()))
        .expect("stock roster powers are unique");
    lini
}
