//! Rules engine trait.
//!
//! The caller drives a game by repeatedly asking for legal actions, picking
//! one, and applying it. Auction resolution, ship completion and scoring all
//! happen inside `apply_action`; they are never separate caller actions.

use serde::{Deserialize, Serialize};

use crate::core::{Action, GameConfig, GameError, GameState, PlayerId, PlayerMap};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Richest player; the lowest seat wins ties.
    pub winner: PlayerId,
    /// Final money per player.
    pub money: PlayerMap<u32>,
}

impl GameResult {
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: empty exactly when the game is over
/// - `apply_action`: must reject anything outside the legal set without
///   touching state, and must be deterministic given the shuffler
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Legal actions for the player whose move is awaited.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Apply an action for the current player.
    fn apply_action(&mut self, state: &mut GameState, action: Action) -> Result<(), GameError>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    /// Check a single action without building the whole legal set.
    fn is_legal(&self, state: &GameState, action: Action) -> bool {
        self.legal_actions(state).contains(&action)
    }
}
