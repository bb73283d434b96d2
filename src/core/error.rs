//! Errors returned when an action is rejected.
//!
//! A rejected action never touches state, so there is nothing to roll back.

use thiserror::Error;

use super::action::Action;
use super::player::PlayerId;
use super::state::Phase;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game is over")]
    GameOver,

    #[error("{action} is not a {phase} phase action")]
    WrongPhase { action: Action, phase: Phase },

    #[error("{action} is not legal for {player}")]
    IllegalAction { action: Action, player: PlayerId },
}
