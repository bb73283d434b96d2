//! Seat rotation.
//!
//! Two different rules share the table:
//! - bidding walks every seat in order, full ships included
//! - choosing the next opener skips seats whose ship is already full

use crate::core::{GameConfig, GameState, PlayerId};

/// The next seat in bidding order. Never skips anyone.
#[must_use]
pub fn next(state: &GameState, player: PlayerId) -> PlayerId {
    player.next(state.player_count())
}

/// Whether a player's ship still has room for at least one card.
#[must_use]
pub fn has_capacity(state: &GameState, config: &GameConfig, player: PlayerId) -> bool {
    state.cargo(player).len() < config.ship_capacity
}

/// The opener of the next lot: the first seat after the current opener
/// whose ship has room.
///
/// If every ship is full the plain next seat is returned; day-end checks
/// run before this and make that case unreachable in play.
#[must_use]
pub fn next_opener(state: &GameState, config: &GameConfig) -> PlayerId {
    let n = state.player_count();
    let start = state.turn_player().next(n);
    std::iter::successors(Some(start), |p| Some(p.next(n)))
        .take(n)
        .find(|&p| has_capacity(state, config, p))
        .unwrap_or(start)
}
