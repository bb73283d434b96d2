//! Game construction and the `RulesEngine` implementation.

use crate::core::{Action, GameConfig, GameError, GameRng, GameState, PlayerId, Shuffler};
use crate::rules::{GameResult, RulesEngine};
use crate::snapshot::GameSnapshot;

use super::{legality, lifecycle, transition};

/// Rules for one game, together with the shuffler that deals each day.
#[derive(Clone, Debug)]
pub struct MediciGame<S: Shuffler = GameRng> {
    config: GameConfig,
    shuffler: S,
}

/// Builder for creating a MediciGame.
#[derive(Clone, Debug, Default)]
pub struct MediciGameBuilder {
    config: GameConfig,
}

impl MediciGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a complete configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config = self.config.with_player_count(count);
        self
    }

    pub fn ship_capacity(mut self, capacity: usize) -> Self {
        self.config = self.config.with_ship_capacity(capacity);
        self
    }

    pub fn days(mut self, days: u32) -> Self {
        self.config = self.config.with_days(days);
        self
    }

    pub fn starting_money(mut self, money: u32) -> Self {
        self.config = self.config.with_starting_money(money);
        self
    }

    /// Build the game and initial state with a seeded RNG.
    pub fn build(self, seed: u64) -> (MediciGame<GameRng>, GameState) {
        self.build_with_shuffler(GameRng::new(seed))
    }

    /// Build the game and initial state with a custom deck source.
    pub fn build_with_shuffler<S: Shuffler>(self, mut shuffler: S) -> (MediciGame<S>, GameState) {
        let mut state = GameState::new(&self.config);
        lifecycle::start_day(&mut state, &self.config, &mut shuffler, PlayerId::new(0));

        let game = MediciGame {
            config: self.config,
            shuffler,
        };
        (game, state)
    }
}

impl<S: Shuffler> MediciGame<S> {
    /// Read-only projection of the state for display or transport.
    #[must_use]
    pub fn snapshot(&self, state: &GameState) -> GameSnapshot {
        GameSnapshot::capture(state, &self.config, self.legal_actions(state))
    }

    /// The deck source used at each day start.
    pub fn shuffler(&self) -> &S {
        &self.shuffler
    }
}

impl<S: Shuffler> RulesEngine for MediciGame<S> {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        legality::legal_actions(state, &self.config)
    }

    fn apply_action(&mut self, state: &mut GameState, action: Action) -> Result<(), GameError> {
        transition::apply(state, &self.config, &mut self.shuffler, action)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.winner().map(|winner| GameResult {
            winner,
            money: state.all_money().clone(),
        })
    }

    fn is_legal(&self, state: &GameState, action: Action) -> bool {
        legality::check(state, &self.config, action).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Phase, PresetShuffle};

    #[test]
    fn test_game_creation() {
        let (game, state) = MediciGameBuilder::new().build(42);

        assert_eq!(game.config().player_count, 4);
        assert_eq!(state.player_count(), 4);
        assert_eq!(state.deck_size(), 35);
        assert_eq!(state.lot().len(), 1);
        assert_eq!(state.phase(), Phase::Draw);
        assert!(game.is_terminal(&state).is_none());
    }

    #[test]
    fn test_builder_options() {
        let (game, state) = MediciGameBuilder::new()
            .player_count(3)
            .ship_capacity(4)
            .days(2)
            .starting_money(25)
            .build_with_shuffler(PresetShuffle::default());

        assert_eq!(game.config().ship_capacity, 4);
        assert_eq!(game.config().days, 2);
        assert_eq!(state.money(PlayerId::new(2)), 25);
        assert_eq!(game.shuffler().remaining(), 0);
    }

    #[test]
    fn test_is_legal_agrees_with_legal_actions() {
        let (game, state) = MediciGameBuilder::new().build(7);
        for action in [Action::Draw, Action::Pass, Action::Bid(0), Action::Bid(1)] {
            assert_eq!(game.is_legal(&state, action), game.legal_actions(&state).contains(&action));
        }
    }

    #[test]
    #[should_panic(expected = "Must have at least 2 players")]
    fn test_builder_rejects_solo() {
        let _ = MediciGameBuilder::new().player_count(1);
    }
}
