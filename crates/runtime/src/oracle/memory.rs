//! In-memory oracle implementations.
//!
//! Used by the integration tests and by hosts that keep tracker state in
//! their own documents and only need a scratch mirror during a callback.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use tracker_core::{
    ActorId, BloodiedPresentation, CombatPointer, MarkerSet, TrackingConfig,
};

use super::{CombatOracle, MarkerStore, Notifier, SettingsOracle, StatusOracle};
use crate::error::StoreError;
use crate::events::SelfEffect;
use crate::settings::PluginSettings;

/// Combat state held directly in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryCombat {
    pointer: Option<CombatPointer>,
    combatants: HashSet<ActorId>,
}

impl InMemoryCombat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts or advances the combat to the given pointer.
    pub fn set_pointer(&mut self, pointer: CombatPointer) {
        self.pointer = Some(pointer);
    }

    /// Ends the combat.
    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    pub fn add_combatant(&mut self, actor: ActorId) {
        self.combatants.insert(actor);
    }

    pub fn remove_combatant(&mut self, actor: ActorId) {
        self.combatants.remove(&actor);
    }
}

impl CombatOracle for InMemoryCombat {
    fn pointer(&self) -> Option<CombatPointer> {
        self.pointer
    }

    fn in_combat(&self, actor: ActorId) -> bool {
        self.pointer.is_some() && self.combatants.contains(&actor)
    }
}

/// Fixed settings, handed out by value.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticSettings {
    pub tracking: TrackingConfig,
    pub plugin: PluginSettings,
}

impl StaticSettings {
    pub fn new(tracking: TrackingConfig, plugin: PluginSettings) -> Self {
        Self { tracking, plugin }
    }
}

impl SettingsOracle for StaticSettings {
    fn tracking(&self) -> TrackingConfig {
        self.tracking
    }

    fn plugin(&self) -> PluginSettings {
        self.plugin
    }
}

/// Marker sets keyed by actor.
#[derive(Clone, Debug, Default)]
pub struct InMemoryMarkerStore {
    sets: HashMap<ActorId, MarkerSet>,
}

impl InMemoryMarkerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MarkerStore for InMemoryMarkerStore {
    fn markers(&self, actor: ActorId) -> MarkerSet {
        self.sets.get(&actor).cloned().unwrap_or_default()
    }

    fn replace_markers(&mut self, actor: ActorId, markers: MarkerSet) -> Result<(), StoreError> {
        if markers.is_empty() {
            self.sets.remove(&actor);
        } else {
            self.sets.insert(actor, markers);
        }
        Ok(())
    }
}

/// Status flags, hit points, and applied effects held in memory.
///
/// Also records the decorations and self-effect applications the handlers
/// requested, so tests can assert on them.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStatusStore {
    unconscious: HashSet<ActorId>,
    defeated: HashSet<ActorId>,
    bloodied: HashSet<ActorId>,
    overlay: HashMap<ActorId, bool>,
    hp: HashMap<ActorId, u32>,
    /// (actor, effect id, origin) triples in application order.
    pub applied_effects: Vec<(ActorId, String, String)>,
    /// The presentation last requested for a bloodied effect under creation.
    pub bloodied_decoration: Option<BloodiedPresentation>,
}

impl InMemoryStatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bloodied(&mut self, actor: ActorId, bloodied: bool) {
        if bloodied {
            self.bloodied.insert(actor);
        } else {
            self.bloodied.remove(&actor);
        }
    }

    pub fn hp(&self, actor: ActorId) -> Option<u32> {
        self.hp.get(&actor).copied()
    }

    pub fn overlay(&self, actor: ActorId) -> Option<bool> {
        self.overlay.get(&actor).copied()
    }
}

impl StatusOracle for InMemoryStatusStore {
    fn is_unconscious(&self, actor: ActorId) -> bool {
        self.unconscious.contains(&actor)
    }

    fn set_unconscious(&mut self, actor: ActorId, active: bool) -> Result<(), StoreError> {
        if active {
            self.unconscious.insert(actor);
        } else {
            self.unconscious.remove(&actor);
        }
        Ok(())
    }

    fn is_defeated(&self, actor: ActorId) -> bool {
        self.defeated.contains(&actor)
    }

    fn set_defeated(&mut self, actor: ActorId, active: bool) -> Result<(), StoreError> {
        if active {
            self.defeated.insert(actor);
        } else {
            self.defeated.remove(&actor);
        }
        Ok(())
    }

    fn has_bloodied(&self, actor: ActorId) -> bool {
        self.bloodied.contains(&actor)
    }

    fn set_bloodied_overlay(&mut self, actor: ActorId, overlay: bool) -> Result<(), StoreError> {
        self.overlay.insert(actor, overlay);
        Ok(())
    }

    fn set_hp(&mut self, actor: ActorId, hp: u32) -> Result<(), StoreError> {
        self.hp.insert(actor, hp);
        Ok(())
    }

    fn decorate_bloodied(&mut self, presentation: BloodiedPresentation) -> Result<(), StoreError> {
        self.bloodied_decoration = Some(presentation);
        Ok(())
    }

    fn apply_self_effect(
        &mut self,
        actor: ActorId,
        effect: &SelfEffect,
        origin: &str,
    ) -> Result<(), StoreError> {
        self.applied_effects
            .push((actor, effect.id.clone(), origin.to_string()));
        Ok(())
    }
}

/// Collects messages instead of showing them.
#[derive(Debug, Default)]
pub struct BufferedNotifier {
    warnings: RefCell<Vec<String>>,
    infos: RefCell<Vec<String>>,
}

impl BufferedNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.borrow().clone()
    }

    pub fn clear(&self) {
        self.warnings.borrow_mut().clear();
        self.infos.borrow_mut().clear();
    }
}

impl Notifier for BufferedNotifier {
    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }

    fn info(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_string());
    }
}
