use std::fmt;

/// Unique identifier for an actor owned by the host.
///
/// The tracker never creates or destroys actors; it only attaches markers to
/// them through the host's document API. The id is stable for the lifetime
/// of the combat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Round/turn coordinates at which a marker was created.
///
/// Rounds and turns only move forward; the staleness policy in
/// [`crate::policy`] is the single place that compares stamps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnStamp {
    pub round: u32,
    pub turn: u32,
}

impl TurnStamp {
    pub fn new(round: u32, turn: u32) -> Self {
        Self { round, turn }
    }
}

impl fmt::Display for TurnStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}t{}", self.round, self.turn)
    }
}

/// Snapshot of the host's combat state: where the initiative order stands
/// and whose turn it is.
///
/// The host owns this state; the tracker only reads it. Every operation that
/// needs round/turn data takes a pointer (or its [`TurnStamp`]) explicitly
/// rather than reaching into host globals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatPointer {
    pub round: u32,
    pub turn: u32,
    /// The actor whose turn it currently is.
    pub active_actor: ActorId,
}

impl CombatPointer {
    pub fn new(round: u32, turn: u32, active_actor: ActorId) -> Self {
        Self {
            round,
            turn,
            active_actor,
        }
    }

    /// The round/turn coordinates of this pointer.
    pub fn stamp(&self) -> TurnStamp {
        TurnStamp::new(self.round, self.turn)
    }
}
