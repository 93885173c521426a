//! Deterministic action-economy tracking logic, independent of any host.
//!
//! `tracker-core` owns the per-actor usage markers, the decision ladder that
//! gates repeated slot consumption, and the turn-boundary staleness policy.
//! It never talks to the host directly: callers pass in the combat pointer
//! and the actor's marker set, and get back values describing what should
//! happen. The `runtime` crate translates host events into these calls.
pub mod config;
pub mod marker;
pub mod policy;
pub mod slot;
pub mod tracker;
pub mod types;
pub mod vitality;

pub use config::TrackingConfig;
pub use marker::{MarkerSet, UsageMarker};
pub use policy::is_stale;
pub use slot::SlotType;
pub use tracker::Decision;
pub use types::{ActorId, CombatPointer, TurnStamp};
pub use vitality::{BloodiedPresentation, Vitality, sync_defeated, sync_unconscious};
