//! Canonical squaddie and power definitions.
//!
//! This crate houses the stock roster used by integration tests and demo
//! scenarios: plain constructor functions for each squaddie and power, plus
//! a factory that assembles populated repositories. Content is consumed
//! through the battle-core oracles and never appears in engine state.

mod factory;
mod powers;
mod squaddies;

pub use factory::{Roster, standard_roster};
pub use powers::{axe, fireball, healing_staff, spear};
pub use squaddies::{bandit, lini, mystic_mage, teros};
