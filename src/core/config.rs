//! Game configuration.
//!
//! `GameConfig` is built once and never mutated by play. Every number the
//! rules use lives here; `Default` gives the standard four-player table.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Resource};

/// Flat bonuses paid for deep purchase tallies, per player per resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PyramidBonuses {
    /// Paid when a tally is exactly 5.
    pub five: u32,
    /// Paid when a tally is exactly 6.
    pub six: u32,
    /// Paid when a tally is 7 or more.
    pub seven_plus: u32,
}

impl Default for PyramidBonuses {
    fn default() -> Self {
        Self {
            five: 5,
            six: 10,
            seven_plus: 20,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (2-255).
    pub player_count: usize,

    /// Cards a ship holds before it is full.
    pub ship_capacity: usize,

    /// Largest lot; reaching it ends the draw phase.
    pub max_lot_size: usize,

    /// Days played before the game ends.
    pub days: u32,

    /// Money each player starts with.
    pub starting_money: u32,

    /// Ship-value prizes for first, second and third.
    pub ship_prizes: [u32; 3],

    /// Tally ranking prizes for highest and second highest.
    pub pyramid_prizes: [u32; 2],

    /// Flat bonuses for tallies of 5, 6 and 7+.
    pub pyramid_bonuses: PyramidBonuses,

    /// Clear purchase tallies at the start of every day.
    pub reset_tallies_daily: bool,

    /// Card values dealt for each tradable resource.
    pub trade_values: Vec<u32>,

    /// Value of the single Gold card.
    pub gold_value: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            ship_capacity: 5,
            max_lot_size: 3,
            days: 3,
            starting_money: 40,
            ship_prizes: [30, 20, 10],
            pyramid_prizes: [10, 5],
            pyramid_bonuses: PyramidBonuses::default(),
            reset_tallies_daily: true,
            trade_values: vec![0, 1, 2, 3, 4, 5, 5],
            gold_value: 10,
        }
    }
}

impl GameConfig {
    /// Standard configuration for the given table size.
    pub fn new(player_count: usize) -> Self {
        Self::default().with_player_count(player_count)
    }

    #[must_use]
    pub fn with_player_count(mut self, player_count: usize) -> Self {
        assert!(player_count >= 2, "Must have at least 2 players");
        assert!(player_count <= 255, "At most 255 players supported");
        self.player_count = player_count;
        self
    }

    #[must_use]
    pub fn with_ship_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Ship capacity must be positive");
        self.ship_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_max_lot_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Lot size must be positive");
        self.max_lot_size = size;
        self
    }

    #[must_use]
    pub fn with_days(mut self, days: u32) -> Self {
        assert!(days > 0, "Must play at least 1 day");
        self.days = days;
        self
    }

    #[must_use]
    pub fn with_starting_money(mut self, money: u32) -> Self {
        self.starting_money = money;
        self
    }

    #[must_use]
    pub fn with_ship_prizes(mut self, prizes: [u32; 3]) -> Self {
        self.ship_prizes = prizes;
        self
    }

    #[must_use]
    pub fn with_pyramid_prizes(mut self, prizes: [u32; 2]) -> Self {
        self.pyramid_prizes = prizes;
        self
    }

    #[must_use]
    pub fn with_pyramid_bonuses(mut self, bonuses: PyramidBonuses) -> Self {
        self.pyramid_bonuses = bonuses;
        self
    }

    /// Keep tallies across days instead of clearing them each morning.
    #[must_use]
    pub fn with_persistent_tallies(mut self) -> Self {
        self.reset_tallies_daily = false;
        self
    }

    #[must_use]
    pub fn with_trade_values(mut self, values: Vec<u32>) -> Self {
        assert!(!values.is_empty(), "Each resource needs at least one card");
        self.trade_values = values;
        self
    }

    /// The full, unshuffled deck: every tradable resource at every trade
    /// value, followed by the Gold card.
    ///
    /// ```
    /// use medici_engine::core::GameConfig;
    ///
    /// assert_eq!(GameConfig::default().deck_template().len(), 36);
    /// ```
    #[must_use]
    pub fn deck_template(&self) -> Vec<Card> {
        Resource::TRADABLE
            .iter()
            .flat_map(|&r| self.trade_values.iter().map(move |&v| Card::new(r, v)))
            .chain(std::iter::once(Card::gold(self.gold_value)))
            .collect()
    }
}
