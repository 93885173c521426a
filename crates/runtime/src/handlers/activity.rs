//! Gating and recording of activity use.

use tracing::{debug, warn};
use tracker_core::Decision;

use super::EventHandler;
use crate::events::{ActivityInfo, EventOutcome, HostEvent};
use crate::oracle::HostContext;

/// Pre-use gate: decides whether a tracked activity may consume its slot.
///
/// Not-applicable paths (actor not in combat, untracked activation type,
/// tracking disabled for the slot) allow silently. On the first repeated
/// use the gate surfaces a warning and cancels; once warned, further
/// attempts in the same turn proceed without another message, since the
/// user insisted.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityGate;

impl EventHandler for ActivityGate {
    fn name(&self) -> &'static str {
        "activity_gate"
    }

    fn handle(&mut self, ctx: &mut HostContext<'_>, event: &HostEvent) -> EventOutcome {
        let HostEvent::ActivityAboutToBeUsed(info) = event else {
            return EventOutcome::allow();
        };

        if !ctx.combat.in_combat(info.actor) {
            return EventOutcome::allow();
        }
        let Some(slot) = info.activation.filter(|s| s.is_trackable()) else {
            return EventOutcome::allow();
        };
        if !ctx.settings.tracking().enabled_for(slot) {
            return EventOutcome::allow();
        }

        let mut markers = ctx.markers.markers(info.actor);
        match markers.check_usage(slot) {
            Decision::Allow => EventOutcome::allow(),
            Decision::WarnAndDeny { used_on } => {
                ctx.notifier.warn(&format!(
                    "You already used your {slot} on {used_on}, try again if you really want to use it."
                ));
                // The warned flag flipped; persist it so the next attempt
                // is silently denied.
                if let Err(err) = ctx.markers.replace_markers(info.actor, markers) {
                    warn!(actor = %info.actor, %err, "failed to persist warned flag");
                }
                EventOutcome::cancel()
            }
            Decision::Deny => {
                debug!(actor = %info.actor, %slot, "slot already warned, letting use proceed");
                EventOutcome::allow()
            }
        }
    }
}

/// Post-use recorder: commits the slot consumption and the activity's side
/// concerns (self-effects, missing-target reminder).
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityRecorder;

impl ActivityRecorder {
    fn apply_self_effects(&self, ctx: &mut HostContext<'_>, info: &ActivityInfo) {
        if !info.targets_self || info.self_effects.is_empty() {
            return;
        }
        if !ctx.settings.plugin().apply_self_effects {
            return;
        }

        debug!(actor = %info.actor, count = info.self_effects.len(), "applying self effects");
        for effect in &info.self_effects {
            if let Err(err) = ctx.status.apply_self_effect(info.actor, effect, &info.item_id) {
                warn!(actor = %info.actor, effect = %effect.name, %err, "failed to apply self effect");
            }
        }
    }
}

impl EventHandler for ActivityRecorder {
    fn name(&self) -> &'static str {
        "activity_recorder"
    }

    fn handle(&mut self, ctx: &mut HostContext<'_>, event: &HostEvent) -> EventOutcome {
        let HostEvent::ActivityUsed(info) = event else {
            return EventOutcome::allow();
        };

        if !ctx.combat.in_combat(info.actor) {
            return EventOutcome::allow();
        }

        self.apply_self_effects(ctx, info);

        let tracked_slot = info
            .activation
            .filter(|s| s.is_trackable() && ctx.settings.tracking().enabled_for(*s));
        if let Some(slot) = tracked_slot {
            if let Some(pointer) = ctx.combat.pointer() {
                debug!(actor = %info.actor, %slot, item = %info.item_name, "recording slot use");
                let mut markers = ctx.markers.markers(info.actor);
                markers.record_usage(slot, info.item_name.clone(), pointer.stamp());
                if let Err(err) = ctx.markers.replace_markers(info.actor, markers) {
                    warn!(actor = %info.actor, %slot, %err, "failed to record slot use");
                }
            }
        }

        if ctx.settings.plugin().warn_no_target && info.is_attack && info.target_count == 0 {
            ctx.notifier.warn("Don't forget to target an enemy.");
        }

        EventOutcome::allow()
    }
}
