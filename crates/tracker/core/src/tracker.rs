//! Usage gating and recording on a per-actor marker set.
//!
//! Three operations drive the state machine: `check_usage` gates a pending
//! consumption, `record_usage` commits one, and `sweep_stale` expires
//! markers when the actor's turn comes around again. They are advisory:
//! nothing here can fail, and the caller decides what a denial means.

use crate::marker::{MarkerSet, UsageMarker};
use crate::policy;
use crate::slot::SlotType;
use crate::types::TurnStamp;

/// Outcome of gating a slot consumption.
///
/// The names describe slot availability, not what the host must do with the
/// attempt. The integration layer's contract: `WarnAndDeny` cancels the
/// host action after surfacing the warning; `Deny` lets it proceed silently
/// (the user was warned once already and insisted).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decision {
    /// Slot is free; this will be the first use this turn.
    Allow,
    /// Slot already consumed and the user has not yet been warned.
    /// Carries the name of whatever consumed it so the warning can say so.
    WarnAndDeny { used_on: String },
    /// Slot already consumed and the warning was already issued.
    Deny,
}

impl MarkerSet {
    /// Gates consumption of a slot type.
    ///
    /// Side effect: on the first repeated attempt the existing marker's
    /// `warned` flag flips, so a third attempt in the same turn returns
    /// [`Decision::Deny`] without repeating the warning. No marker is ever
    /// created here.
    pub fn check_usage(&mut self, slot: SlotType) -> Decision {
        match self.get_mut(slot) {
            None => Decision::Allow,
            Some(marker) if !marker.warned => {
                marker.warned = true;
                Decision::WarnAndDeny {
                    used_on: marker.source_label.clone(),
                }
            }
            Some(_) => Decision::Deny,
        }
    }

    /// Records that a slot type was consumed by `source_label` at `created`.
    ///
    /// Replaces any existing marker for the slot, so the at-most-one-marker
    /// invariant holds even when callers skip the gate (reaction inference
    /// records unconditionally after its own pre-roll decision).
    pub fn record_usage(
        &mut self,
        slot: SlotType,
        source_label: impl Into<String>,
        created: TurnStamp,
    ) {
        self.insert(UsageMarker::new(slot, source_label, created));
    }

    /// Expires markers that went stale now that the actor's turn is
    /// starting. Returns how many were removed.
    ///
    /// Called once per turn, only for the actor whose turn begins.
    /// Idempotent: a second sweep with the same stamp removes nothing.
    pub fn sweep_stale(&mut self, current: TurnStamp) -> usize {
        let before = self.len();
        self.retain(|m| !policy::is_stale(m.created, current));
        before - self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp(round: u32, turn: u32) -> TurnStamp {
        TurnStamp::new(round, turn)
    }

    #[test]
    fn free_slot_allows() {
        let mut set = MarkerSet::empty();
        assert_eq!(set.check_usage(SlotType::Action), Decision::Allow);
        // The gate never creates markers.
        assert!(set.is_empty());
    }

    #[test]
    fn recorded_usage_warns_then_denies() {
        let mut set = MarkerSet::empty();
        set.record_usage(SlotType::Action, "Item X", stamp(1, 0));

        assert_eq!(
            set.check_usage(SlotType::Action),
            Decision::WarnAndDeny {
                used_on: "Item X".into()
            }
        );
        // Second repeat attempt: warning already issued, silent denial.
        assert_eq!(set.check_usage(SlotType::Action), Decision::Deny);
        assert_eq!(set.check_usage(SlotType::Action), Decision::Deny);
    }

    #[test]
    fn warned_flag_survives_on_the_marker() {
        let mut set = MarkerSet::empty();
        set.record_usage(SlotType::Bonus, "Healing Word", stamp(3, 2));

        let _ = set.check_usage(SlotType::Bonus);
        assert!(set.get(SlotType::Bonus).unwrap().warned);
    }

    #[test]
    fn slots_are_gated_independently() {
        let mut set = MarkerSet::empty();
        set.record_usage(SlotType::Action, "Longsword", stamp(1, 0));

        assert_eq!(set.check_usage(SlotType::Bonus), Decision::Allow);
        assert_eq!(set.check_usage(SlotType::Reaction), Decision::Allow);
    }

    #[test]
    fn record_resets_warned_flag() {
        let mut set = MarkerSet::empty();
        set.record_usage(SlotType::Action, "Item X", stamp(1, 0));
        let _ = set.check_usage(SlotType::Action);

        // A deliberate re-record (user insisted) supersedes the old marker.
        set.record_usage(SlotType::Action, "Item Z", stamp(1, 0));
        let marker = set.get(SlotType::Action).unwrap();
        assert_eq!(marker.source_label, "Item Z");
        assert!(!marker.warned);
    }

    #[test]
    fn sweep_removes_only_stale_markers() {
        let mut set = MarkerSet::empty();
        set.record_usage(SlotType::Action, "Longsword", stamp(1, 0));
        set.record_usage(SlotType::Bonus, "Misty Step", stamp(2, 0));

        // Actor's turn comes around at round 2, turn 0: the round-1 marker
        // is stale, the marker created this instant is not.
        let removed = set.sweep_stale(stamp(2, 0));
        assert_eq!(removed, 1);
        assert!(set.get(SlotType::Action).is_none());
        assert!(set.get(SlotType::Bonus).is_some());
    }

    #[test]
    fn sweep_is_idempotent() {
        let mut set = MarkerSet::empty();
        set.record_usage(SlotType::Action, "Longsword", stamp(1, 0));
        set.record_usage(SlotType::Reaction, "Shield", stamp(2, 1));

        assert_eq!(set.sweep_stale(stamp(2, 1)), 1);
        let after_first = set.clone();
        assert_eq!(set.sweep_stale(stamp(2, 1)), 0);
        assert_eq!(set, after_first);
    }

    #[test]
    fn allow_after_sweep_clears_the_slot() {
        let mut set = MarkerSet::empty();
        set.record_usage(SlotType::Action, "Item X", stamp(1, 0));
        let _ = set.check_usage(SlotType::Action);

        set.sweep_stale(stamp(2, 0));
        assert_eq!(set.check_usage(SlotType::Action), Decision::Allow);
    }
}
