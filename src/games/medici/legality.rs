//! Which actions are legal in the current state.

use std::ops::RangeInclusive;

use crate::core::{Action, GameConfig, GameError, GameState, Phase, PlayerId};

/// Legal actions for the current player, in a fixed order:
/// `[Draw, Pass]` in the draw phase, ascending bids then `Bid(0)` in the
/// bid phase, nothing once the game is over.
#[must_use]
pub fn legal_actions(state: &GameState, config: &GameConfig) -> Vec<Action> {
    match state.phase() {
        Phase::GameOver => Vec::new(),
        Phase::Draw => {
            if can_draw(state, config) {
                vec![Action::Draw, Action::Pass]
            } else {
                vec![Action::Pass]
            }
        }
        Phase::Bid => match bid_range(state, config, state.current_player()) {
            Some(range) => range.map(Action::Bid).chain([Action::Bid(0)]).collect(),
            None => vec![Action::Bid(0)],
        },
    }
}

/// Validate one action without allocating the legal set.
pub fn check(state: &GameState, config: &GameConfig, action: Action) -> Result<(), GameError> {
    let player = state.current_player();
    let illegal = GameError::IllegalAction { action, player };
    let wrong_phase = GameError::WrongPhase { action, phase: state.phase() };

    match (state.phase(), action) {
        (Phase::GameOver, _) => Err(GameError::GameOver),
        (Phase::Draw, Action::Pass) => Ok(()),
        (Phase::Draw, Action::Draw) if can_draw(state, config) => Ok(()),
        (Phase::Draw, Action::Draw) => Err(illegal),
        (Phase::Draw, Action::Bid(_)) => Err(wrong_phase),
        (Phase::Bid, Action::Bid(0)) => Ok(()),
        (Phase::Bid, Action::Bid(v)) => match bid_range(state, config, player) {
            Some(range) if range.contains(&v) => Ok(()),
            _ => Err(illegal),
        },
        (Phase::Bid, Action::Draw | Action::Pass) => Err(wrong_phase),
    }
}

/// Drawing needs a card in the deck, room in the lot, and at least one ship
/// that could still take the bigger lot.
#[must_use]
pub fn can_draw(state: &GameState, config: &GameConfig) -> bool {
    let next_lot = state.lot().len() + 1;
    !state.deck().is_empty()
        && next_lot <= config.max_lot_size
        && PlayerId::all(state.player_count())
            .any(|p| state.cargo(p).len() + next_lot <= config.ship_capacity)
}

/// Non-zero bids a player may make, or `None` if their only move is `Bid(0)`.
///
/// A ship that cannot take the whole lot may not bid. Otherwise a bid must
/// beat the current high bid and cannot exceed the player's money.
#[must_use]
pub fn bid_range(state: &GameState, config: &GameConfig, player: PlayerId) -> Option<RangeInclusive<u32>> {
    if state.cargo(player).len() + state.lot().len() > config.ship_capacity {
        return None;
    }
    let min = state.high_bid() + 1;
    let max = state.money(player);
    (min <= max).then(|| min..=max)
}
