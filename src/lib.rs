//! # medici-engine
//!
//! Rules engine for a multi-day trading game played as a series of
//! English auctions on small lots of goods.
//!
//! ## Design Principles
//!
//! 1. **Closed action set**: `Draw`, `Pass` and `Bid(value)`, validated
//!    against the phase explicitly. Illegal actions are rejected with a
//!    `GameError` before any state changes.
//!
//! 2. **Injectable randomness**: every deck is ordered by a `Shuffler`.
//!    Seeded `GameRng` for play, `PresetShuffle` for stacked-deck tests.
//!
//! 3. **Pure scoring**: tier ranking and prize splitting are plain functions
//!    over per-player scores, applied by the state machine at day end.
//!
//! ## Modules
//!
//! - `core`: players, actions, RNG, configuration, state, errors
//! - `cards`: resources, cards, lots, purchase tallies
//! - `events`: chronological event log, emitted through `tracing`
//! - `scoring`: ship-value and purchase-tally rankings
//! - `rules`: `RulesEngine` trait
//! - `games`: the game implementation
//! - `snapshot`: serde projection of a state
//!
//! ## Example
//!
//! ```
//! use medici_engine::{Action, MediciGameBuilder, RulesEngine};
//!
//! let (mut game, mut state) = MediciGameBuilder::new().build(42);
//! assert_eq!(game.legal_actions(&state), vec![Action::Draw, Action::Pass]);
//!
//! game.apply_action(&mut state, Action::Pass).unwrap();
//! assert_eq!(state.current_player().index(), 1);
//! ```

pub mod cards;
pub mod core;
pub mod events;
pub mod games;
pub mod rules;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, GameConfig, GameError, GameRng, GameRngState, GameState, Phase, PlayerId,
    PlayerMap, PresetShuffle, PyramidBonuses, Shuffler,
};

pub use crate::cards::{Card, Lot, Resource, Tally};

pub use crate::events::{EventLog, GameEvent};

pub use crate::games::medici::{MediciGame, MediciGameBuilder};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::scoring::{pyramid_awards, rank_tiers, ship_awards, tally_bonus, Award};

pub use crate::snapshot::{GameSnapshot, PlayerSnapshot};
