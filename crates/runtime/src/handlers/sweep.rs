//! Turn-boundary marker sweep.

use tracing::{debug, warn};

use super::EventHandler;
use crate::events::{EventOutcome, HostEvent};
use crate::oracle::HostContext;

/// Clears stale markers when a turn starts.
///
/// Runs only for the actor whose turn begins; other combatants' markers are
/// untouched until their own turn comes around. The host raises the turn
/// change before any usage check of the new turn, so a swept slot reads as
/// free again immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct TurnSweep;

impl EventHandler for TurnSweep {
    fn name(&self) -> &'static str {
        "turn_sweep"
    }

    fn handle(&mut self, ctx: &mut HostContext<'_>, event: &HostEvent) -> EventOutcome {
        let HostEvent::TurnChanged(pointer) = event else {
            return EventOutcome::allow();
        };

        let actor = pointer.active_actor;
        let mut markers = ctx.markers.markers(actor);
        let removed = markers.sweep_stale(pointer.stamp());
        if removed > 0 {
            debug!(actor = %actor, removed, stamp = %pointer.stamp(), "swept stale markers");
            if let Err(err) = ctx.markers.replace_markers(actor, markers) {
                warn!(actor = %actor, %err, "failed to persist marker sweep");
            }
        }
        EventOutcome::allow()
    }
}

#[cfg(test)]
mod tests {
    use tracker_core::{ActorId, CombatPointer, SlotType, TrackingConfig, TurnStamp};

    use super::*;
    use crate::oracle::MarkerStore;
    use crate::oracle::memory::{
        BufferedNotifier, InMemoryCombat, InMemoryMarkerStore, InMemoryStatusStore, StaticSettings,
    };
    use crate::settings::PluginSettings;

    #[test]
    fn sweeps_only_the_new_active_actor() {
        let a = ActorId(1);
        let b = ActorId(2);
        let mut combat = InMemoryCombat::new();
        combat.add_combatant(a);
        combat.add_combatant(b);
        let settings = StaticSettings::new(TrackingConfig::default(), PluginSettings::default());
        let mut markers = InMemoryMarkerStore::new();
        for actor in [a, b] {
            let mut set = markers.markers(actor);
            set.record_usage(SlotType::Action, "Longsword", TurnStamp::new(1, 0));
            markers.replace_markers(actor, set).unwrap();
        }
        let mut status = InMemoryStatusStore::new();
        let notifier = BufferedNotifier::new();

        let pointer = CombatPointer::new(2, 0, a);
        combat.set_pointer(pointer);
        let mut ctx = HostContext {
            combat: &combat,
            settings: &settings,
            markers: &mut markers,
            status: &mut status,
            notifier: &notifier,
        };
        TurnSweep.handle(&mut ctx, &HostEvent::TurnChanged(pointer));

        assert!(markers.markers(a).is_empty());
        // Not b's turn yet; its marker survives until then.
        assert_eq!(markers.markers(b).len(), 1);
    }
}
