//! Opportunity-attack inference.
//!
//! An attack roll while it is not the attacker's turn is assumed to spend
//! the reaction. The pre-roll gate and the post-roll recording form one
//! atomic decision: the gate's verdict for the actor is remembered, and the
//! recorder only commits when the gate let the roll happen.

use std::collections::HashMap;

use tracing::{debug, warn};
use tracker_core::{ActorId, Decision, SlotType};

use super::EventHandler;
use crate::events::{EventOutcome, HostEvent};
use crate::oracle::HostContext;

/// Watches attack rolls for off-turn attackers and spends their reaction.
#[derive(Debug, Default)]
pub struct ReactionWatch {
    /// Off-turn attackers whose pre-roll gate allowed the roll, keyed to
    /// the attacking item's name for the marker label. Entries are consumed
    /// by the matching post-roll event.
    pending: HashMap<ActorId, String>,
}

impl ReactionWatch {
    pub fn new() -> Self {
        Self::default()
    }

    fn gate(&mut self, ctx: &mut HostContext<'_>, event: &HostEvent) -> EventOutcome {
        let HostEvent::AttackAboutToRoll(roll) = event else {
            return EventOutcome::allow();
        };

        let Some(pointer) = ctx.combat.pointer() else {
            return EventOutcome::allow();
        };
        if !ctx.combat.in_combat(roll.actor) || pointer.active_actor == roll.actor {
            return EventOutcome::allow();
        }
        if !ctx.settings.tracking().enabled_for(SlotType::Reaction) {
            return EventOutcome::allow();
        }

        let mut markers = ctx.markers.markers(roll.actor);
        match markers.check_usage(SlotType::Reaction) {
            Decision::WarnAndDeny { used_on } => {
                ctx.notifier.warn(&format!(
                    "You already used your reaction on {used_on}, try again if you really want to use it."
                ));
                if let Err(err) = ctx.markers.replace_markers(roll.actor, markers) {
                    warn!(actor = %roll.actor, %err, "failed to persist warned flag");
                }
                EventOutcome::cancel()
            }
            Decision::Allow | Decision::Deny => {
                self.pending.insert(roll.actor, roll.item_name.clone());
                EventOutcome::allow()
            }
        }
    }

    fn record(&mut self, ctx: &mut HostContext<'_>, event: &HostEvent) -> EventOutcome {
        let HostEvent::AttackRolled(roll) = event else {
            return EventOutcome::allow();
        };

        let Some(item_name) = self.pending.remove(&roll.actor) else {
            return EventOutcome::allow();
        };
        let Some(pointer) = ctx.combat.pointer() else {
            return EventOutcome::allow();
        };

        ctx.notifier.info(
            "You're attacking when it's not your turn, assuming an Opportunity Attack.",
        );
        debug!(actor = %roll.actor, item = %item_name, "spending reaction for off-turn attack");

        let mut markers = ctx.markers.markers(roll.actor);
        markers.record_usage(SlotType::Reaction, item_name, pointer.stamp());
        if let Err(err) = ctx.markers.replace_markers(roll.actor, markers) {
            warn!(actor = %roll.actor, %err, "failed to record reaction use");
        }
        EventOutcome::allow()
    }
}

impl EventHandler for ReactionWatch {
    fn name(&self) -> &'static str {
        "reaction_watch"
    }

    fn handle(&mut self, ctx: &mut HostContext<'_>, event: &HostEvent) -> EventOutcome {
        match event {
            HostEvent::AttackAboutToRoll(_) => self.gate(ctx, event),
            HostEvent::AttackRolled(_) => self.record(ctx, event),
            _ => EventOutcome::allow(),
        }
    }
}
