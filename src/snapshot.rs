//! Read-only projection of a game state.
//!
//! A snapshot is a plain serde value: everything a viewer needs in one
//! place, detached from the live state.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Resource};
use crate::core::{Action, GameConfig, GameState, Phase, PlayerId};
use crate::events::GameEvent;
use crate::games::medici::has_capacity;

/// One player's public position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub player: PlayerId,
    pub money: u32,
    pub cargo: Vec<Card>,
    pub cargo_value: u32,
    /// Whether the ship can take at least one more card.
    pub has_capacity: bool,
    /// Bid on the current lot, if they have acted.
    pub bid: Option<u32>,
    pub tallies: Vec<(Resource, u32)>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub day: u32,
    pub phase: Phase,
    pub turn_player: PlayerId,
    pub current_player: PlayerId,
    pub players: Vec<PlayerSnapshot>,
    pub lot: Vec<Card>,
    pub deck_size: usize,
    pub legal_actions: Vec<Action>,
    pub is_terminal: bool,
    pub winner: Option<PlayerId>,
    pub events: Vec<GameEvent>,
}

impl GameSnapshot {
    /// Capture the state. `legal_actions` should come from the same state.
    #[must_use]
    pub fn capture(state: &GameState, config: &GameConfig, legal_actions: Vec<Action>) -> Self {
        let players = PlayerId::all(state.player_count())
            .map(|player| PlayerSnapshot {
                player,
                money: state.money(player),
                cargo: state.cargo(player).to_vec(),
                cargo_value: state.cargo_value(player),
                has_capacity: has_capacity(state, config, player),
                bid: state.bid(player),
                tallies: state.tally(player).iter().collect(),
            })
            .collect();

        Self {
            day: state.day(),
            phase: state.phase(),
            turn_player: state.turn_player(),
            current_player: state.current_player(),
            players,
            lot: state.lot().to_vec(),
            deck_size: state.deck_size(),
            legal_actions,
            is_terminal: state.is_terminal(),
            winner: state.winner(),
            events: state.events().iter().cloned().collect(),
        }
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&PlayerSnapshot> {
        self.players.get(player.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::medici::MediciGameBuilder;
    use crate::rules::RulesEngine;

    #[test]
    fn test_snapshot_of_fresh_game() {
        let (game, state) = MediciGameBuilder::new().build(42);
        let snap = game.snapshot(&state);

        assert_eq!(snap.day, 0);
        assert_eq!(snap.phase, Phase::Draw);
        assert_eq!(snap.players.len(), 4);
        assert_eq!(snap.lot.len(), 1);
        assert_eq!(snap.deck_size, 35);
        assert_eq!(snap.legal_actions, vec![Action::Draw, Action::Pass]);
        assert!(!snap.is_terminal);
        assert_eq!(snap.winner, None);
        assert!(matches!(snap.events.first(), Some(GameEvent::DayStarted { day: 0, .. })));

        let p1 = snap.player(PlayerId::new(1)).unwrap();
        assert_eq!(p1.money, 40);
        assert_eq!(p1.bid, None);
        assert_eq!(p1.tallies.len(), 5);
        assert!(p1.has_capacity);
    }

    #[test]
    fn test_snapshot_reports_full_ship() {
        let (game, mut state) = MediciGameBuilder::new().build(5);
        let full = PlayerId::new(3);
        state.cargo[full] = vec![Card::new(Resource::Grain, 1); game.config().ship_capacity];

        let snap = game.snapshot(&state);
        for p in PlayerId::all(4) {
            let seat = snap.player(p).unwrap();
            assert_eq!(seat.has_capacity, has_capacity(&state, game.config(), p));
        }
        assert!(!snap.player(full).unwrap().has_capacity);
        assert!(snap.player(PlayerId::new(0)).unwrap().has_capacity);
    }

    #[test]
    fn test_snapshot_json_roundtrip() {
        let (mut game, mut state) = MediciGameBuilder::new().build(3);
        game.apply_action(&mut state, Action::Pass).unwrap();
        game.apply_action(&mut state, Action::Bid(4)).unwrap();

        let snap = game.snapshot(&state);
        assert_eq!(snap.player(PlayerId::new(1)).unwrap().bid, Some(4));

        let json = serde_json::to_string(&snap).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }
}
