//! Cards, lots and purchase tallies.
//!
//! ## Key Types
//!
//! - `Resource`: the five tradable goods plus Gold
//! - `Card`: immutable (resource, value) pair
//! - `Lot`: the 1-3 cards currently being auctioned
//! - `Tally`: per-resource count of tradable cards a player has won

pub mod card;
pub mod tally;

pub use card::{total_value, Card, Lot, Resource};
pub use tally::Tally;
