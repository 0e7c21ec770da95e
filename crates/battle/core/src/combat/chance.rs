//! Discrete probability tables for opposed-roll combat.
//!
//! Chances are expressed as a numerator over 36, the outcome space of one
//! six-sided die per combatant. Keeping the numerator as an integer lets the
//! forecast layer do exact fractional math (expected damage in 36ths)
//! without floats.

/// Chance to hit for a given bonus differential.
///
/// # Formula
///
/// ```text
/// delta = attacker to-hit bonus - target to-hit penalty
/// delta >  4 -> 36/36
/// delta < -5 ->  0/36
/// otherwise  -> fixed table over [-5, 4]
/// ```
///
/// # Returns
///
/// Chance out of 36.
pub fn chance_to_hit(delta: i32) -> i32 {
    match delta {
        5.. => 36,
        4 => 35,
        3 => 33,
        2 => 30,
        1 => 26,
        0 => 21,
        -1 => 15,
        -2 => 10,
        -3 => 6,
        -4 => 3,
        -5 => 1,
        _ => 0,
    }
}

/// Chance to critically hit for a given effective threshold.
///
/// The table has the same shape as [`chance_to_hit`] shifted onto the
/// threshold range [2, 11]: 36/36 above 11, 0/36 below 2.
///
/// # Returns
///
/// Chance out of 36.
pub fn chance_to_crit(threshold: i32) -> i32 {
    match threshold {
        12.. => 36,
        11 => 35,
        10 => 33,
        9 => 30,
        8 => 26,
        7 => 21,
        6 => 15,
        5 => 10,
        4 => 6,
        3 => 3,
        2 => 1,
        _ => 0,
    }
}
