//! Hit-point-derived combat states.
//!
//! The host reports hit-point changes; these helpers decide whether the
//! bloodied presentation applies and whether the unconscious/defeated
//! status should flip. They return decisions only: the runtime layer
//! performs the actual host writes, and skips them when nothing changed.

use bitflags::bitflags;

/// An actor's hit points as reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vitality {
    pub hp: u32,
    pub hp_max: u32,
}

impl Vitality {
    pub fn new(hp: u32, hp_max: u32) -> Self {
        Self { hp, hp_max }
    }

    /// At zero hit points.
    pub fn is_down(self) -> bool {
        self.hp == 0
    }

    /// At or below half hit points, but still up.
    pub fn is_bloodied(self) -> bool {
        self.hp > 0 && self.hp * 2 <= self.hp_max
    }
}

bitflags! {
    /// Visual treatments applied to the host's bloodied effect as it is
    /// being created.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct BloodiedPresentation: u8 {
        /// Tint the effect icon red.
        const RED_TINT = 1 << 0;
        /// Render the effect as a full-token overlay.
        const OVERLAY = 1 << 1;
    }
}

impl BloodiedPresentation {
    /// Tint applied when [`BloodiedPresentation::RED_TINT`] is set.
    pub const TINT: &'static str = "#FF0000";

    pub fn from_settings(red_tint: bool, overlay: bool) -> Self {
        let mut presentation = Self::empty();
        if red_tint {
            presentation |= Self::RED_TINT;
        }
        if overlay {
            presentation |= Self::OVERLAY;
        }
        presentation
    }

    /// The tint color to apply, if any.
    pub fn tint(self) -> Option<&'static str> {
        self.contains(Self::RED_TINT).then_some(Self::TINT)
    }
}

/// Whether a player character's unconscious status should flip.
///
/// Returns the new status when it disagrees with the hit points, `None`
/// when they already agree (no host write needed).
pub fn sync_unconscious(vitality: Vitality, unconscious: bool) -> Option<bool> {
    let down = vitality.is_down();
    (down != unconscious).then_some(down)
}

/// Whether an NPC combatant's defeated status should flip.
///
/// Same contract as [`sync_unconscious`]; applied only to NPCs not marked
/// important by the host.
pub fn sync_defeated(vitality: Vitality, defeated: bool) -> Option<bool> {
    let down = vitality.is_down();
    (down != defeated).then_some(down)
}
