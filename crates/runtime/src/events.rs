//! Inbound host events and the outcome signal handed back to the host.
//!
//! Payloads are read-only snapshots of host documents: the router never
//! mutates them, only the marker and status stores. The host's boolean
//! short-circuit ("return false to cancel") is modeled by [`EventOutcome`];
//! translating a tracker [`Decision`](tracker_core::Decision) into an
//! outcome happens in the handlers, never in the core.

use tracker_core::{ActorId, CombatPointer, SlotType, Vitality};

/// What kind of actor the host reports an event for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActorKind {
    /// Player character.
    Character,
    /// Non-player character. `important` NPCs are exempt from automatic
    /// defeated sync, mirroring the host's own trait flag.
    Npc { important: bool },
}

/// A self-applicable effect carried by an activity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelfEffect {
    pub id: String,
    pub name: String,
}

/// Snapshot of an activity being used (or about to be used).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityInfo {
    pub actor: ActorId,
    /// Host identifier of the originating item; used as the origin of any
    /// self-effects applied from this activity.
    pub item_id: String,
    pub item_name: String,
    /// The activation cost of the activity, if it has one the tracker
    /// recognizes. `None` means the activity is untracked.
    pub activation: Option<SlotType>,
    /// The activity targets or ranges on the actor itself.
    pub targets_self: bool,
    /// The activity is an attack.
    pub is_attack: bool,
    /// How many targets the user currently has selected.
    pub target_count: u32,
    /// Effects the activity would apply to the actor itself.
    pub self_effects: Vec<SelfEffect>,
}

/// Snapshot of an attack roll (pre- or post-roll).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackRoll {
    pub actor: ActorId,
    pub item_id: String,
    pub item_name: String,
}

/// Hit-point change reported by the host after damage was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageReport {
    pub actor: ActorId,
    pub kind: ActorKind,
    pub vitality: Vitality,
}

/// Status effects this plugin mirrors against hit points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackedStatus {
    Unconscious,
    Defeated,
}

/// A token status effect was toggled host-side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusToggle {
    pub actor: ActorId,
    pub kind: ActorKind,
    pub status: TrackedStatus,
    pub active: bool,
}

/// Events the host raises, in the order it raises them.
///
/// Delivery is strictly ordered: pre-use before post-use before the next
/// pre-use, and a turn change sweeps before any usage check of the new turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostEvent {
    /// An activity is about to be used; the outcome can cancel it.
    ActivityAboutToBeUsed(ActivityInfo),
    /// An activity completed.
    ActivityUsed(ActivityInfo),
    /// An attack roll is about to happen; the outcome can cancel it.
    AttackAboutToRoll(AttackRoll),
    /// An attack roll completed.
    AttackRolled(AttackRoll),
    /// The combat turn advanced; the pointer names the new active actor.
    TurnChanged(CombatPointer),
    /// Damage was applied and hit points changed.
    DamageApplied(DamageReport),
    /// A token status effect was toggled.
    StatusToggled(StatusToggle),
    /// The host is about to create its bloodied effect.
    BloodiedCreating,
}

impl HostEvent {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            HostEvent::ActivityAboutToBeUsed(_) => "activity_about_to_be_used",
            HostEvent::ActivityUsed(_) => "activity_used",
            HostEvent::AttackAboutToRoll(_) => "attack_about_to_roll",
            HostEvent::AttackRolled(_) => "attack_rolled",
            HostEvent::TurnChanged(_) => "turn_changed",
            HostEvent::DamageApplied(_) => "damage_applied",
            HostEvent::StatusToggled(_) => "status_toggled",
            HostEvent::BloodiedCreating => "bloodied_creating",
        }
    }
}

/// Whether the host should continue its default handling of the event.
///
/// Only advisory: the host decides what cancellation actually aborts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventOutcome {
    pub proceed: bool,
}

impl EventOutcome {
    /// Let the host's default handling continue.
    pub fn allow() -> Self {
        Self { proceed: true }
    }

    /// Ask the host to cancel its default handling.
    pub fn cancel() -> Self {
        Self { proceed: false }
    }

    /// Combines outcomes from several handlers: any cancellation wins.
    pub fn and(self, other: Self) -> Self {
        Self {
            proceed: self.proceed && other.proceed,
        }
    }
}

impl Default for EventOutcome {
    fn default() -> Self {
        Self::allow()
    }
}
