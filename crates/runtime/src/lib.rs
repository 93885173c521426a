//! Host integration for the action-economy tracker.
//!
//! This crate wires the deterministic logic in `tracker-core` to a
//! tabletop-simulation host. The host is abstracted behind oracle traits
//! (combat pointer, settings store, marker store, status writes, user
//! notifications); inbound host callbacks arrive as [`HostEvent`] values and
//! are dispatched synchronously through the [`EventRouter`], one event to
//! completion before the next.
//!
//! Modules are organized by responsibility:
//! - [`events`] defines the inbound event payloads and the outcome signal
//! - [`handlers`] hold the per-event logic (gating, recording, sweeping,
//!   vitality sync)
//! - [`oracle`] abstracts the host surface, with in-memory implementations
//!   for tests and embedding
//! - [`router`] dispatches events to handlers in registration order
//! - [`settings`] decodes the host's settings document
pub mod error;
pub mod events;
pub mod handlers;
pub mod oracle;
pub mod router;
pub mod settings;

pub use error::StoreError;
pub use events::{
    ActivityInfo, ActorKind, AttackRoll, DamageReport, EventOutcome, HostEvent, SelfEffect,
    StatusToggle, TrackedStatus,
};
pub use handlers::{
    ActivityGate, ActivityRecorder, BloodiedDecorator, EventHandler, ReactionWatch, StatusMirror,
    TurnSweep, VitalitySync,
};
pub use oracle::memory::{
    BufferedNotifier, InMemoryCombat, InMemoryMarkerStore, InMemoryStatusStore, StaticSettings,
};
pub use oracle::{
    CombatOracle, HostContext, MarkerStore, Notifier, SettingsOracle, StatusOracle,
};
pub use router::EventRouter;
pub use settings::{PluginSettings, SettingsDoc};
