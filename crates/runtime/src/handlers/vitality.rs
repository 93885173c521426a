//! Hit-point-derived status synchronization.
//!
//! Three handlers cover the directions the host reports changes in:
//! damage changing hit points, a defeated toggle changing hit points back,
//! and the host creating its bloodied effect.

use tracing::{debug, warn};
use tracker_core::{BloodiedPresentation, sync_defeated, sync_unconscious};

use super::EventHandler;
use crate::events::{ActorKind, EventOutcome, HostEvent, TrackedStatus};
use crate::oracle::HostContext;

/// Keeps unconscious (characters) and defeated (NPCs) in step with hit
/// points after damage.
#[derive(Debug, Clone, Copy, Default)]
pub struct VitalitySync;

impl EventHandler for VitalitySync {
    fn name(&self) -> &'static str {
        "vitality_sync"
    }

    fn handle(&mut self, ctx: &mut HostContext<'_>, event: &HostEvent) -> EventOutcome {
        let HostEvent::DamageApplied(report) = event else {
            return EventOutcome::allow();
        };

        if !ctx.combat.in_combat(report.actor) {
            return EventOutcome::allow();
        }
        let plugin = ctx.settings.plugin();

        match report.kind {
            ActorKind::Character => {
                if plugin.sync_unconscious {
                    let current = ctx.status.is_unconscious(report.actor);
                    if let Some(state) = sync_unconscious(report.vitality, current) {
                        debug!(actor = %report.actor, state, "syncing unconscious status");
                        if let Err(err) = ctx.status.set_unconscious(report.actor, state) {
                            warn!(actor = %report.actor, %err, "failed to toggle unconscious");
                        }
                    }
                }
            }
            ActorKind::Npc { important } => {
                if plugin.sync_defeated && !important {
                    let current = ctx.status.is_defeated(report.actor);
                    if let Some(state) = sync_defeated(report.vitality, current) {
                        debug!(actor = %report.actor, state, "syncing defeated status");
                        if let Err(err) = ctx.status.set_defeated(report.actor, state) {
                            warn!(actor = %report.actor, %err, "failed to toggle defeated");
                        }
                        // The defeated overlay replaces the bloodied one
                        // while the NPC is down.
                        if plugin.overlay_bloodied && ctx.status.has_bloodied(report.actor) {
                            if let Err(err) = ctx.status.set_bloodied_overlay(report.actor, !state)
                            {
                                warn!(actor = %report.actor, %err, "failed to adjust bloodied overlay");
                            }
                        }
                    }
                }
            }
        }
        EventOutcome::allow()
    }
}

/// Mirrors a host-side defeated toggle back onto hit points.
///
/// The reverse direction of [`VitalitySync`]: a GM marking an NPC defeated
/// drops it to zero hit points; clearing the status brings it back to one.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusMirror;

impl EventHandler for StatusMirror {
    fn name(&self) -> &'static str {
        "status_mirror"
    }

    fn handle(&mut self, ctx: &mut HostContext<'_>, event: &HostEvent) -> EventOutcome {
        let HostEvent::StatusToggled(toggle) = event else {
            return EventOutcome::allow();
        };

        if toggle.status != TrackedStatus::Defeated {
            return EventOutcome::allow();
        }
        if !matches!(toggle.kind, ActorKind::Npc { .. }) {
            return EventOutcome::allow();
        }
        if !ctx.combat.in_combat(toggle.actor) {
            return EventOutcome::allow();
        }
        let plugin = ctx.settings.plugin();
        if !plugin.sync_defeated {
            return EventOutcome::allow();
        }

        let hp = if toggle.active { 0 } else { 1 };
        debug!(actor = %toggle.actor, hp, "mirroring defeated toggle onto hit points");
        if let Err(err) = ctx.status.set_hp(toggle.actor, hp) {
            warn!(actor = %toggle.actor, %err, "failed to mirror hit points");
        }
        if plugin.overlay_bloodied && ctx.status.has_bloodied(toggle.actor) {
            if let Err(err) = ctx.status.set_bloodied_overlay(toggle.actor, !toggle.active) {
                warn!(actor = %toggle.actor, %err, "failed to adjust bloodied overlay");
            }
        }
        EventOutcome::allow()
    }
}

/// Styles the host's bloodied effect as it is created.
#[derive(Debug, Clone, Copy, Default)]
pub struct BloodiedDecorator;

impl EventHandler for BloodiedDecorator {
    fn name(&self) -> &'static str {
        "bloodied_decorator"
    }

    fn handle(&mut self, ctx: &mut HostContext<'_>, event: &HostEvent) -> EventOutcome {
        if !matches!(event, HostEvent::BloodiedCreating) {
            return EventOutcome::allow();
        }

        let plugin = ctx.settings.plugin();
        let presentation =
            BloodiedPresentation::from_settings(plugin.red_bloodied, plugin.overlay_bloodied);
        if !presentation.is_empty() {
            if let Err(err) = ctx.status.decorate_bloodied(presentation) {
                warn!(%err, "failed to style bloodied effect");
            }
        }
        EventOutcome::allow()
    }
}

#[cfg(test)]
mod tests {
    use tracker_core::{ActorId, CombatPointer, TrackingConfig, Vitality};

    use super::*;
    use crate::events::{DamageReport, StatusToggle};
    use crate::oracle::StatusOracle;
    use crate::oracle::memory::{
        BufferedNotifier, InMemoryCombat, InMemoryMarkerStore, InMemoryStatusStore, StaticSettings,
    };
    use crate::settings::PluginSettings;

    fn combat_with(actors: &[ActorId]) -> InMemoryCombat {
        let mut combat = InMemoryCombat::new();
        combat.set_pointer(CombatPointer::new(1, 0, actors[0]));
        for &actor in actors {
            combat.add_combatant(actor);
        }
        combat
    }

    #[test]
    fn character_at_zero_hp_goes_unconscious() {
        let actor = ActorId(1);
        let combat = combat_with(&[actor]);
        let settings = StaticSettings::new(TrackingConfig::default(), PluginSettings::default());
        let mut markers = InMemoryMarkerStore::new();
        let mut status = InMemoryStatusStore::new();
        let notifier = BufferedNotifier::new();
        let mut ctx = HostContext {
            combat: &combat,
            settings: &settings,
            markers: &mut markers,
            status: &mut status,
            notifier: &notifier,
        };

        let report = DamageReport {
            actor,
            kind: ActorKind::Character,
            vitality: Vitality::new(0, 20),
        };
        VitalitySync.handle(&mut ctx, &HostEvent::DamageApplied(report));
        assert!(status.is_unconscious(actor));

        // Healing back up clears it again.
        let report = DamageReport {
            actor,
            kind: ActorKind::Character,
            vitality: Vitality::new(5, 20),
        };
        let mut ctx = HostContext {
            combat: &combat,
            settings: &settings,
            markers: &mut markers,
            status: &mut status,
            notifier: &notifier,
        };
        VitalitySync.handle(&mut ctx, &HostEvent::DamageApplied(report));
        assert!(!status.is_unconscious(actor));
    }

    #[test]
    fn important_npc_is_never_auto_defeated() {
        let actor = ActorId(7);
        let combat = combat_with(&[actor]);
        let settings = StaticSettings::new(TrackingConfig::default(), PluginSettings::default());
        let mut markers = InMemoryMarkerStore::new();
        let mut status = InMemoryStatusStore::new();
        let notifier = BufferedNotifier::new();
        let mut ctx = HostContext {
            combat: &combat,
            settings: &settings,
            markers: &mut markers,
            status: &mut status,
            notifier: &notifier,
        };

        let report = DamageReport {
            actor,
            kind: ActorKind::Npc { important: true },
            vitality: Vitality::new(0, 50),
        };
        VitalitySync.handle(&mut ctx, &HostEvent::DamageApplied(report));
        assert!(!status.is_defeated(actor));
    }

    #[test]
    fn npc_defeat_pulls_bloodied_overlay() {
        let actor = ActorId(8);
        let combat = combat_with(&[actor]);
        let settings = StaticSettings::new(TrackingConfig::default(), PluginSettings::default());
        let mut markers = InMemoryMarkerStore::new();
        let mut status = InMemoryStatusStore::new();
        status.set_bloodied(actor, true);
        let notifier = BufferedNotifier::new();
        let mut ctx = HostContext {
            combat: &combat,
            settings: &settings,
            markers: &mut markers,
            status: &mut status,
            notifier: &notifier,
        };

        let report = DamageReport {
            actor,
            kind: ActorKind::Npc { important: false },
            vitality: Vitality::new(0, 30),
        };
        VitalitySync.handle(&mut ctx, &HostEvent::DamageApplied(report));
        assert!(status.is_defeated(actor));
        assert_eq!(status.overlay(actor), Some(false));
    }

    #[test]
    fn defeated_toggle_mirrors_hit_points() {
        let actor = ActorId(9);
        let combat = combat_with(&[actor]);
        let settings = StaticSettings::new(TrackingConfig::default(), PluginSettings::default());
        let mut markers = InMemoryMarkerStore::new();
        let mut status = InMemoryStatusStore::new();
        let notifier = BufferedNotifier::new();
        let mut ctx = HostContext {
            combat: &combat,
            settings: &settings,
            markers: &mut markers,
            status: &mut status,
            notifier: &notifier,
        };

        let toggle = StatusToggle {
            actor,
            kind: ActorKind::Npc { important: false },
            status: TrackedStatus::Defeated,
            active: true,
        };
        StatusMirror.handle(&mut ctx, &HostEvent::StatusToggled(toggle));
        assert_eq!(status.hp(actor), Some(0));

        let toggle = StatusToggle {
            active: false,
            ..toggle
        };
        let mut ctx = HostContext {
            combat: &combat,
            settings: &settings,
            markers: &mut markers,
            status: &mut status,
            notifier: &notifier,
        };
        StatusMirror.handle(&mut ctx, &HostEvent::StatusToggled(toggle));
        assert_eq!(status.hp(actor), Some(1));
    }

    #[test]
    fn bloodied_effect_is_styled_per_settings() {
        let actor = ActorId(1);
        let combat = combat_with(&[actor]);
        let plugin = PluginSettings {
            red_bloodied: true,
            overlay_bloodied: false,
            ..PluginSettings::default()
        };
        let settings = StaticSettings::new(TrackingConfig::default(), plugin);
        let mut markers = InMemoryMarkerStore::new();
        let mut status = InMemoryStatusStore::new();
        let notifier = BufferedNotifier::new();
        let mut ctx = HostContext {
            combat: &combat,
            settings: &settings,
            markers: &mut markers,
            status: &mut status,
            notifier: &notifier,
        };

        BloodiedDecorator.handle(&mut ctx, &HostEvent::BloodiedCreating);
        let decoration = status.bloodied_decoration.unwrap();
        assert_eq!(decoration.tint(), Some("#FF0000"));
        assert!(!decoration.contains(BloodiedPresentation::OVERLAY));
    }
}
