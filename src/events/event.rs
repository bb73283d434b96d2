//! Things that happen during a game.
//!
//! Events record what changed and for whom. They carry no prose; rendering
//! them for people is left to whoever reads the log.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Resource};
use crate::core::PlayerId;

/// A game event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh deck was shuffled and the first lot revealed.
    DayStarted { day: u32, opener: PlayerId, first_card: Option<Card> },

    /// A card was added to the lot.
    Drew { player: PlayerId, card: Card },

    /// The opener stopped drawing.
    Passed { player: PlayerId },

    /// A bid was recorded. Zero means the player declined.
    BidPlaced { player: PlayerId, value: u32 },

    /// The lot was sold.
    LotWon { player: PlayerId, price: u32, cards: Vec<Card> },

    /// Nobody bid; the lot is gone.
    LotDiscarded { cards: Vec<Card> },

    /// The last open ship was filled from the deck at day end.
    ShipCompleted { player: PlayerId, cards: Vec<Card> },

    /// Ship-value ranking payout. `tier` is 0 for first place.
    ShipPrize { player: PlayerId, tier: u8, amount: u32 },

    /// Tally ranking payout for one resource.
    PyramidPrize { player: PlayerId, resource: Resource, tier: u8, amount: u32 },

    /// Flat bonus for a deep tally.
    PyramidBonus { player: PlayerId, resource: Resource, count: u32, amount: u32 },

    /// Scoring finished for a day.
    DayEnded { day: u32 },

    /// The final day was scored.
    GameOver { winner: PlayerId, money: u32 },
}

impl GameEvent {
    /// Day and game boundaries, as opposed to ordinary play.
    #[must_use]
    pub fn is_milestone(&self) -> bool {
        matches!(
            self,
            GameEvent::DayStarted { .. } | GameEvent::DayEnded { .. } | GameEvent::GameOver { .. }
        )
    }

    /// Money credited to a player by this event.
    #[must_use]
    pub fn payout(&self) -> Option<(PlayerId, u32)> {
        match *self {
            GameEvent::ShipPrize { player, amount, .. }
            | GameEvent::PyramidPrize { player, amount, .. }
            | GameEvent::PyramidBonus { player, amount, .. } => Some((player, amount)),
            _ => None,
        }
    }
}
