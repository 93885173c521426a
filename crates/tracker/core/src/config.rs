use crate::slot::SlotType;

/// Feature toggles gating which slot types are tracked.
///
/// These mirror the host's per-client settings. A disabled slot type
/// short-circuits before any tracker operation runs; the tracker itself
/// never consults this struct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct TrackingConfig {
    /// Track main actions. Off by default: most tables only care about
    /// bonus actions and reactions slipping by.
    pub track_action: bool,
    pub track_bonus: bool,
    pub track_reaction: bool,
    /// Registered for completeness; no event path spends the opportunity
    /// slot directly (off-turn attacks spend the reaction instead).
    pub track_opportunity: bool,
}

impl TrackingConfig {
    /// One marker per slot type at most.
    pub const MAX_MARKERS: usize = SlotType::ALL.len();

    pub fn new() -> Self {
        Self {
            track_action: false,
            track_bonus: true,
            track_reaction: true,
            track_opportunity: true,
        }
    }

    /// Whether tracking is enabled for the given slot type.
    pub fn enabled_for(&self, slot: SlotType) -> bool {
        match slot {
            SlotType::Action => self.track_action,
            SlotType::Bonus => self.track_bonus,
            SlotType::Reaction => self.track_reaction,
            SlotType::Opportunity => self.track_opportunity,
        }
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tracks_bonus_and_reaction_but_not_action() {
        let config = TrackingConfig::default();
        assert!(!config.enabled_for(SlotType::Action));
        assert!(config.enabled_for(SlotType::Bonus));
        assert!(config.enabled_for(SlotType::Reaction));
        assert!(config.enabled_for(SlotType::Opportunity));
    }
}
