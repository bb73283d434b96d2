//! Action representation.
//!
//! Actions are a closed set. The phase decides which tags are meaningful:
//! - Draw phase: `Draw`, `Pass`
//! - Bid phase: `Bid(value)`, where `Bid(0)` is the pass sentinel

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A player action.
///
/// ```
/// use medici_engine::core::Action;
///
/// assert!(Action::Bid(0).is_pass_bid());
/// assert_eq!(Action::Bid(7).bid_value(), Some(7));
/// assert_eq!(Action::Draw.bid_value(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Reveal one more card into the lot.
    Draw,
    /// Stop drawing and put the lot up for auction.
    Pass,
    /// Offer this much money for the lot. Zero declines.
    Bid(u32),
}

impl Action {
    /// The offered amount, if this is a bid.
    #[must_use]
    pub const fn bid_value(self) -> Option<u32> {
        match self {
            Action::Bid(v) => Some(v),
            _ => None,
        }
    }

    /// True for the `Bid(0)` sentinel.
    #[must_use]
    pub const fn is_pass_bid(self) -> bool {
        matches!(self, Action::Bid(0))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Draw => f.write_str("Draw"),
            Action::Pass => f.write_str("Pass"),
            Action::Bid(v) => write!(f, "Bid({v})"),
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Day (0-based) when the action was taken.
    pub day: u32,

    /// Sequence number within the day.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, day: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            day,
            sequence,
        }
    }
}
