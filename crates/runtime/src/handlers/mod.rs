//! Per-event handlers.
//!
//! Each handler reacts to the event variants it cares about and ignores the
//! rest. Handlers run in registration order on the host's single event
//! thread; one event is processed to completion before the next arrives, so
//! no handler needs interior synchronization.

mod activity;
mod reaction;
mod sweep;
mod vitality;

pub use activity::{ActivityGate, ActivityRecorder};
pub use reaction::ReactionWatch;
pub use sweep::TurnSweep;
pub use vitality::{BloodiedDecorator, StatusMirror, VitalitySync};

use crate::events::{EventOutcome, HostEvent};
use crate::oracle::HostContext;

/// Reacts to inbound host events.
///
/// A handler that does not care about an event returns
/// [`EventOutcome::allow`]; only the handler that actually gates an event
/// may cancel it.
pub trait EventHandler {
    /// Human-readable name, used in logging.
    fn name(&self) -> &'static str;

    /// Processes one event. Store failures are logged and swallowed here;
    /// the tracker is advisory and never aborts the host's flow on its own
    /// account.
    fn handle(&mut self, ctx: &mut HostContext<'_>, event: &HostEvent) -> EventOutcome;
}
