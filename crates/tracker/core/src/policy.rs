//! Turn-boundary staleness policy.
//!
//! A marker goes stale when the actor's turn comes around again: created in
//! an earlier round, or in the same round at an earlier turn index. Ordering
//! is round-major, turn-minor. A marker created on the current round/turn is
//! not stale at that same instant; it only expires the next time the sweep
//! runs for this actor.

use crate::types::TurnStamp;

/// Whether a marker created at `created` is stale at `current`.
///
/// Time never moves backward in combat, so callers only ever pass forward
/// progressions of the pointer.
pub fn is_stale(created: TurnStamp, current: TurnStamp) -> bool {
    created.round < current.round
        || (created.round == current.round && created.turn < current.turn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_stale_at_creation_instant() {
        assert!(!is_stale(TurnStamp::new(2, 3), TurnStamp::new(2, 3)));
    }

    #[test]
    fn stale_on_later_turn_in_same_round() {
        assert!(is_stale(TurnStamp::new(2, 3), TurnStamp::new(2, 4)));
        assert!(is_stale(TurnStamp::new(2, 3), TurnStamp::new(2, 7)));
    }

    #[test]
    fn stale_in_any_later_round() {
        assert!(is_stale(TurnStamp::new(2, 3), TurnStamp::new(3, 0)));
        // Turn index resets each round; an earlier index in a later round
        // is still stale.
        assert!(is_stale(TurnStamp::new(2, 3), TurnStamp::new(3, 2)));
        assert!(is_stale(TurnStamp::new(2, 3), TurnStamp::new(5, 0)));
    }

    #[test]
    fn not_stale_within_same_turn_of_round_one() {
        assert!(!is_stale(TurnStamp::new(1, 0), TurnStamp::new(1, 0)));
        assert!(is_stale(TurnStamp::new(1, 0), TurnStamp::new(1, 1)));
    }
}
