//! Day-end scoring.
//!
//! Pure functions from per-player scores to money awards. The state machine
//! applies the awards and logs them; nothing here touches game state.
//!
//! - `tiers`: rank players into tiers and split prize pools
//! - `ship`: three-prize ranking on cargo value
//! - `pyramid`: two-prize ranking on purchase tallies, plus flat bonuses

pub mod pyramid;
pub mod ship;
pub mod tiers;

pub use pyramid::{pyramid_awards, tally_bonus};
pub use ship::ship_awards;
pub use tiers::{rank_tiers, totals, Award};
