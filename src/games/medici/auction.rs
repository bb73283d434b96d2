//! Auction resolution and what follows it.
//!
//! After every auction the day may end, either because all but one ship is
//! full or because the deck ran out. Otherwise the next lot is set up.

use crate::core::{GameConfig, GameState, Phase, PlayerId, Shuffler};
use crate::events::GameEvent;

use super::{lifecycle, rotation};

/// Settle the current lot, then end the day or open the next lot.
pub(crate) fn resolve<S: Shuffler>(state: &mut GameState, config: &GameConfig, shuffler: &mut S) {
    settle_lot(state);

    if day_is_over(state, config) {
        lifecycle::end_day(state, config, shuffler);
    } else {
        open_next_lot(state, config);
    }
}

/// The highest positive bid, if any.
#[must_use]
pub fn winning_bid(state: &GameState) -> Option<(PlayerId, u32)> {
    state
        .bids
        .iter()
        .filter(|(_, &v)| v > 0)
        .map(|(&p, &v)| (p, v))
        // Ties cannot happen in legal play; the lower seat wins if they do.
        .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
}

fn settle_lot(state: &mut GameState) {
    let winner = winning_bid(state);
    let lot = std::mem::take(&mut state.lot);
    state.bids.clear();

    match winner {
        Some((winner, price)) => {
            state.money[winner] -= price;
            state.cargo[winner].extend(lot.iter().copied());
            state.tallies[winner].record_lot(&lot);
            state.record_event(GameEvent::LotWon { player: winner, price, cards: lot.to_vec() });
        }
        None => state.record_event(GameEvent::LotDiscarded { cards: lot.to_vec() }),
    }
}

/// Day-end check. When exactly one ship is still open and the rest are
/// full, that ship is topped up from the deck first.
fn day_is_over(state: &mut GameState, config: &GameConfig) -> bool {
    let open: Vec<PlayerId> = PlayerId::all(state.player_count())
        .filter(|&p| rotation::has_capacity(state, config, p))
        .collect();

    match open.as_slice() {
        [] => true,
        [last] => {
            complete_ship(state, config, *last);
            true
        }
        _ => state.deck.is_empty(),
    }
}

/// Fill a ship from the deck while it holds no more than capacity cards.
///
/// The bound is inclusive, so a ship can end one card over capacity.
fn complete_ship(state: &mut GameState, config: &GameConfig, player: PlayerId) {
    let mut added = Vec::new();
    while state.cargo[player].len() <= config.ship_capacity {
        let Some(card) = state.deck.pop() else { break };
        state.cargo[player].push(card);
        added.push(card);
    }
    state.record_event(GameEvent::ShipCompleted { player, cards: added });
}

fn open_next_lot(state: &mut GameState, config: &GameConfig) {
    if let Some(card) = state.deck.pop() {
        state.lot.push(card);
    }
    state.bids.clear();
    state.phase = Phase::Draw;
    state.turn_player = rotation::next_opener(state, config);
    state.current_player = state.turn_player;
}
