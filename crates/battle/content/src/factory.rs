//! Assembles the stock roster into populated repositories.

use battle_core::{PowerRepository, SquaddieRepository};

use crate::{powers, squaddies};

/// Repositories populated with the stock squaddies and powers.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    pub squaddies: SquaddieRepository,
    pub powers: PowerRepository,
}

/// Builds the standard roster: Teros, Bandit, Mystic Mage, and Lini, with
/// their signature powers registered.
pub fn standard_roster() -> Roster {
    let mut roster = Roster::default();
    roster
        .powers
        .add_powers([
            powers::spear(),
            powers::axe(),
            powers::fireball(),
            powers::healing_staff(),
        ])
        .expect("stock power ids are unique");
    roster
        .squaddies
        .add_squaddies([
            squaddies::teros(),
            squaddies::bandit(),
            squaddies::mystic_mage(),
            squaddies::lini(),
        ])
        .expect("stock squaddie ids are unique");
    roster
}
