//! Rules engine trait for driving a game.
//!
//! Games implement `RulesEngine` to define:
//! - Legal actions for each game state
//! - How actions modify state
//! - When the game is over and who won

pub mod engine;

pub use engine::{GameResult, RulesEngine};
