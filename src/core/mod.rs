//! Core engine types: players, actions, RNG, configuration, state, errors.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{GameConfig, PyramidBonuses};
pub use error::GameError;
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState, PresetShuffle, Shuffler};
pub use state::{GameState, Phase};
