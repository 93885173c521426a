//! Plugin settings beyond the per-slot tracking toggles.
//!
//! The host keeps settings as a flat JSON object with camelCase keys;
//! [`SettingsDoc`] decodes both halves from one document. Unknown keys are
//! ignored and missing keys fall back to the registered defaults.

use serde::Deserialize;
use tracker_core::TrackingConfig;

/// Feature toggles that are not per-slot tracking flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginSettings {
    /// Apply an activity's self-targeted effects to the actor on use.
    pub apply_self_effects: bool,
    /// Remind the user to target an enemy when attacking with none selected.
    pub warn_no_target: bool,
    /// Tint the bloodied effect icon red.
    pub red_bloodied: bool,
    /// Render the bloodied effect as a token overlay.
    pub overlay_bloodied: bool,
    /// Keep NPC defeated status in sync with hit points.
    pub sync_defeated: bool,
    /// Keep character unconscious status in sync with hit points.
    pub sync_unconscious: bool,
}

impl PluginSettings {
    pub fn new() -> Self {
        Self {
            apply_self_effects: true,
            warn_no_target: true,
            red_bloodied: true,
            overlay_bloodied: true,
            sync_defeated: true,
            sync_unconscious: true,
        }
    }
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self::new()
    }
}

/// The host's full settings document for this plugin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SettingsDoc {
    #[serde(flatten)]
    pub tracking: TrackingConfig,
    #[serde(flatten)]
    pub plugin: PluginSettings,
}

impl SettingsDoc {
    /// Decodes a settings document from the host's JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
