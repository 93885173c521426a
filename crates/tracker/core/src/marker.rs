//! Usage markers attached to an actor.
//!
//! A marker records that the actor has consumed one slot type this turn.
//! The host persists markers as actor-attached effect documents; this module
//! only models their content and the per-actor collection.

use arrayvec::ArrayVec;

use crate::config::TrackingConfig;
use crate::slot::SlotType;
use crate::types::TurnStamp;

/// Record that an actor has consumed a slot type this turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UsageMarker {
    pub slot: SlotType,
    /// Name of the item or activity that consumed the slot.
    pub source_label: String,
    /// Round/turn at creation time, used by the turn-boundary sweep.
    pub created: TurnStamp,
    /// Set once a re-use warning has been issued, so a third attempt in the
    /// same turn stays silent.
    pub warned: bool,
}

impl UsageMarker {
    pub fn new(slot: SlotType, source_label: impl Into<String>, created: TurnStamp) -> Self {
        Self {
            slot,
            source_label: source_label.into(),
            created,
            warned: false,
        }
    }

    /// Human-readable label for the host's effect document, composed from
    /// the slot's label template and the consuming item's name.
    pub fn display_label(&self) -> String {
        match self.slot.label_prefix() {
            Some(prefix) => format!("{prefix}{}", self.source_label),
            None => self.source_label.clone(),
        }
    }
}

/// The markers currently attached to one actor.
///
/// Invariant: at most one marker per slot type. [`MarkerSet::insert`]
/// replaces any existing marker for the same slot, so the invariant holds
/// without callers having to check first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkerSet {
    markers: ArrayVec<UsageMarker, { TrackingConfig::MAX_MARKERS }>,
}

impl MarkerSet {
    /// Creates an empty marker set.
    pub fn empty() -> Self {
        Self {
            markers: ArrayVec::new(),
        }
    }

    /// The marker for a slot type, if one exists.
    pub fn get(&self, slot: SlotType) -> Option<&UsageMarker> {
        self.markers.iter().find(|m| m.slot == slot)
    }

    /// Mutable access to the marker for a slot type.
    pub fn get_mut(&mut self, slot: SlotType) -> Option<&mut UsageMarker> {
        self.markers.iter_mut().find(|m| m.slot == slot)
    }

    /// Attaches a marker, replacing any existing marker for the same slot.
    ///
    /// Replacement supersedes the old marker's content (source label,
    /// creation stamp, warned flag) when a new item legitimately spends an
    /// already-open slot within the same turn.
    pub fn insert(&mut self, marker: UsageMarker) {
        self.markers.retain(|m| m.slot != marker.slot);
        if !self.markers.is_full() {
            self.markers.push(marker);
        }
    }

    /// Removes the marker for a slot type. Returns true if one was removed.
    pub fn remove(&mut self, slot: SlotType) -> bool {
        let before = self.markers.len();
        self.markers.retain(|m| m.slot != slot);
        self.markers.len() < before
    }

    /// Keeps only the markers for which the predicate returns true.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&UsageMarker) -> bool,
    {
        self.markers.retain(|m| keep(m));
    }

    /// Iterates over all markers.
    pub fn iter(&self) -> impl Iterator<Item = &UsageMarker> {
        self.markers.iter()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
