//! Synchronous event dispatch.

use tracing::debug;

use crate::events::{EventOutcome, HostEvent};
use crate::handlers::{
    ActivityGate, ActivityRecorder, BloodiedDecorator, EventHandler, ReactionWatch, StatusMirror,
    TurnSweep, VitalitySync,
};
use crate::oracle::HostContext;

/// Dispatches host events to the registered handlers, in order.
///
/// Runs entirely on the host's event thread: one event is processed to
/// completion before the next begins, matching the host's own callback
/// ordering guarantees. The combined outcome cancels the host's default
/// handling as soon as any handler asked for cancellation.
pub struct EventRouter {
    handlers: Vec<Box<dyn EventHandler>>,
}

impl EventRouter {
    /// A router with the full handler set, in the order the host's own
    /// callback sequence expects: gates before recorders, sweeps and
    /// vitality sync after.
    pub fn new() -> Self {
        Self {
            handlers: vec![
                Box::new(ActivityGate),
                Box::new(ActivityRecorder),
                Box::new(ReactionWatch::new()),
                Box::new(TurnSweep),
                Box::new(VitalitySync),
                Box::new(StatusMirror),
                Box::new(BloodiedDecorator),
            ],
        }
    }

    /// A router with a custom handler set.
    pub fn with_handlers(handlers: Vec<Box<dyn EventHandler>>) -> Self {
        Self { handlers }
    }

    /// Processes one event through every handler and combines the outcomes.
    pub fn dispatch(&mut self, ctx: &mut HostContext<'_>, event: &HostEvent) -> EventOutcome {
        let mut outcome = EventOutcome::allow();
        for handler in &mut self.handlers {
            let result = handler.handle(ctx, event);
            if !result.proceed {
                debug!(handler = handler.name(), event = event.name(), "handler cancelled event");
            }
            outcome = outcome.and(result);
        }
        outcome
    }
}

impl Default for EventRouter {
    fn default() -> Self {
        Self::new()
    }
}
