//! The damage formula.

/// Damage a strike deals against an undefended monster.
///
/// Compares the attacker's attack `A` to the defender's attack `B`:
///
/// - `A > B`: the strike lands for the difference, `A - B`
/// - `A == B`: the clash grinds the defender down to `max(0, defense - 1)`
///   worth of damage
/// - `A < B`: the weaker attacker still lands its full attack, `A`
///
/// The caller compares the result against the defender's defense to decide
/// between a hit and a destruction.
#[must_use]
pub fn strike_damage(attack: i32, defender_attack: i32, defender_defense: i32) -> i32 {
    use std::cmp::Ordering;

    match attack.cmp(&defender_attack) {
        Ordering::Greater => attack - defender_attack,
        Ordering::Equal => (defender_defense - 1).max(0),
        Ordering::Less => attack,
    }
}
