//! The per-turn action-economy categories whose consumption is tracked.

/// A resource slot an actor spends at most once per turn.
///
/// `Opportunity` is recognized in configuration but no event path produces
/// it: an off-turn attack is inferred to spend [`SlotType::Reaction`]
/// instead. It therefore has no label template of its own.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SlotType {
    /// The main action.
    Action,
    /// Bonus action.
    Bonus,
    /// Reaction, including inferred opportunity attacks.
    Reaction,
    /// Configured alongside the others but never spent directly.
    Opportunity,
}

impl SlotType {
    /// Every slot type, in display order.
    pub const ALL: [SlotType; 4] = [
        SlotType::Action,
        SlotType::Bonus,
        SlotType::Reaction,
        SlotType::Opportunity,
    ];

    /// Markers last exactly one round before the turn-boundary sweep can
    /// remove them.
    pub const DURATION_ROUNDS: u32 = 1;

    /// Fixed prefix for the marker's display label, or `None` for slot
    /// types that no activity can consume directly.
    pub fn label_prefix(self) -> Option<&'static str> {
        match self {
            SlotType::Action => Some("Action - "),
            SlotType::Bonus => Some("Bonus Action: "),
            SlotType::Reaction => Some("Reaction: "),
            SlotType::Opportunity => None,
        }
    }

    /// Whether an activity with this activation type participates in
    /// tracking at all (independent of user settings).
    pub fn is_trackable(self) -> bool {
        self.label_prefix().is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn parses_snake_case_names() {
        assert_eq!(SlotType::from_str("action").unwrap(), SlotType::Action);
        assert_eq!(SlotType::from_str("bonus").unwrap(), SlotType::Bonus);
        assert_eq!(SlotType::from_str("reaction").unwrap(), SlotType::Reaction);
        assert!(SlotType::from_str("legendary").is_err());
    }

    #[test]
    fn opportunity_is_not_directly_trackable() {
        assert!(SlotType::Action.is_trackable());
        assert!(SlotType::Bonus.is_trackable());
        assert!(SlotType::Reaction.is_trackable());
        assert!(!SlotType::Opportunity.is_trackable());
    }
}
