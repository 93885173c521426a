//! Traits abstracting the host surface.
//!
//! Handlers never touch host globals; everything they read or write goes
//! through these traits, bundled per-dispatch into a [`HostContext`].
//! Absence (no combat running, unknown actor) is not an error anywhere:
//! the tracker treats it as not-applicable and allows the event through.

pub mod memory;

use tracker_core::{
    ActorId, BloodiedPresentation, CombatPointer, MarkerSet, TrackingConfig,
};

use crate::error::StoreError;
use crate::events::SelfEffect;
use crate::settings::PluginSettings;

/// Read access to the host's combat state.
pub trait CombatOracle {
    /// The current combat pointer, or `None` when no combat is running.
    fn pointer(&self) -> Option<CombatPointer>;

    /// Whether the actor is a combatant in the current combat.
    fn in_combat(&self, actor: ActorId) -> bool;
}

/// Read access to the host's settings store.
pub trait SettingsOracle {
    fn tracking(&self) -> TrackingConfig;
    fn plugin(&self) -> PluginSettings;
}

/// The host's actor-attached effect-collection API, narrowed to usage
/// markers.
///
/// Persistence is entirely the host's concern; the store may queue writes
/// internally, and the tracker never awaits them.
pub trait MarkerStore {
    /// The markers currently attached to an actor. Unknown actors have an
    /// empty set.
    fn markers(&self, actor: ActorId) -> MarkerSet;

    /// Replaces the actor's markers wholesale.
    fn replace_markers(&mut self, actor: ActorId, markers: MarkerSet) -> Result<(), StoreError>;
}

/// Status and effect writes the vitality handlers perform.
pub trait StatusOracle {
    fn is_unconscious(&self, actor: ActorId) -> bool;
    fn set_unconscious(&mut self, actor: ActorId, active: bool) -> Result<(), StoreError>;

    fn is_defeated(&self, actor: ActorId) -> bool;
    fn set_defeated(&mut self, actor: ActorId, active: bool) -> Result<(), StoreError>;

    /// Whether the actor currently carries the host's bloodied effect.
    fn has_bloodied(&self, actor: ActorId) -> bool;
    fn set_bloodied_overlay(&mut self, actor: ActorId, overlay: bool) -> Result<(), StoreError>;

    /// Sets the actor's current hit points (used when a defeated toggle is
    /// mirrored back onto hit points).
    fn set_hp(&mut self, actor: ActorId, hp: u32) -> Result<(), StoreError>;

    /// Styles the bloodied effect the host is in the middle of creating.
    fn decorate_bloodied(&mut self, presentation: BloodiedPresentation) -> Result<(), StoreError>;

    /// Applies one of an activity's self-effects to the actor. `origin` is
    /// the host identifier of the originating item.
    fn apply_self_effect(
        &mut self,
        actor: ActorId,
        effect: &SelfEffect,
        origin: &str,
    ) -> Result<(), StoreError>;
}

/// Fire-and-forget user-facing messages. No return value is consulted.
pub trait Notifier {
    fn warn(&self, message: &str);
    fn info(&self, message: &str);
}

/// Everything a handler may touch while processing one event.
pub struct HostContext<'a> {
    pub combat: &'a dyn CombatOracle,
    pub settings: &'a dyn SettingsOracle,
    pub markers: &'a mut dyn MarkerStore,
    pub status: &'a mut dyn StatusOracle,
    pub notifier: &'a dyn Notifier,
}
