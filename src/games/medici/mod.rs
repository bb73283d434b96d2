//! The lot-auction trading game.
//!
//! Each day the table auctions small lots of goods from a shared deck:
//! - The opener reveals up to three cards, then the lot goes to auction
//! - Bids go once around the table, ending with the opener
//! - The winner pays and loads the lot onto their ship
//! - The day ends when all but one ship is full or the deck runs out
//! - Ships are scored on value, purchase tallies on depth
//!
//! After the last day the richest player wins.

mod auction;
mod game;
mod legality;
mod lifecycle;
mod rotation;
mod transition;

pub use auction::winning_bid;
pub use game::{MediciGame, MediciGameBuilder};
pub use legality::{bid_range, can_draw, legal_actions};
pub use rotation::{has_capacity, next_opener};
