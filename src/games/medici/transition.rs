//! Applying a validated action.

use crate::core::{Action, ActionRecord, GameConfig, GameError, GameState, Phase, Shuffler};
use crate::events::GameEvent;

use super::{auction, legality, rotation};

/// Validate and apply one action for the current player.
///
/// Nothing is mutated unless the action is legal.
pub(crate) fn apply<S: Shuffler>(
    state: &mut GameState,
    config: &GameConfig,
    shuffler: &mut S,
    action: Action,
) -> Result<(), GameError> {
    legality::check(state, config, action)?;

    let player = state.current_player;
    let sequence = state.next_sequence();
    state.record_action(ActionRecord::new(player, action, state.day, sequence));

    match action {
        Action::Pass => {
            state.record_event(GameEvent::Passed { player });
            state.current_player = rotation::next(state, player);
            state.phase = Phase::Bid;
        }
        Action::Draw => {
            // `check` guarantees a card is available.
            if let Some(card) = state.deck.pop() {
                state.lot.push(card);
                state.record_event(GameEvent::Drew { player, card });
            }
            if state.lot.len() >= config.max_lot_size {
                state.current_player = rotation::next(state, player);
                state.phase = Phase::Bid;
            }
        }
        Action::Bid(value) => {
            state.bids.insert(player, value);
            state.record_event(GameEvent::BidPlaced { player, value });

            if player == state.turn_player || state.deck.is_empty() {
                auction::resolve(state, config, shuffler);
            } else {
                state.current_player = rotation::next(state, player);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Resource};
    use crate::core::{PlayerId, PresetShuffle};

    fn setup() -> (GameConfig, GameState, PresetShuffle) {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        let mut shuffle = PresetShuffle::default();
        super::super::lifecycle::start_day(&mut state, &config, &mut shuffle, PlayerId::new(0));
        (config, state, shuffle)
    }

    #[test]
    fn test_pass_opens_bidding_left_of_opener() {
        let (config, mut state, mut shuffle) = setup();

        apply(&mut state, &config, &mut shuffle, Action::Pass).unwrap();

        assert_eq!(state.phase(), Phase::Bid);
        assert_eq!(state.current_player(), PlayerId::new(1));
        assert_eq!(state.turn_player(), PlayerId::new(0));
        assert_eq!(state.lot().len(), 1);
    }

    #[test]
    fn test_draw_keeps_turn_until_lot_is_full() {
        let (config, mut state, mut shuffle) = setup();

        apply(&mut state, &config, &mut shuffle, Action::Draw).unwrap();
        assert_eq!(state.phase(), Phase::Draw);
        assert_eq!(state.current_player(), PlayerId::new(0));
        assert_eq!(state.lot().len(), 2);

        apply(&mut state, &config, &mut shuffle, Action::Draw).unwrap();
        assert_eq!(state.phase(), Phase::Bid);
        assert_eq!(state.current_player(), PlayerId::new(1));
        assert_eq!(state.lot().len(), 3);
        assert_eq!(state.deck_size(), 33);
    }

    #[test]
    fn test_bidding_round_ends_at_opener() {
        let (config, mut state, mut shuffle) = setup();
        apply(&mut state, &config, &mut shuffle, Action::Pass).unwrap();

        apply(&mut state, &config, &mut shuffle, Action::Bid(3)).unwrap();
        apply(&mut state, &config, &mut shuffle, Action::Bid(0)).unwrap();
        apply(&mut state, &config, &mut shuffle, Action::Bid(5)).unwrap();
        assert_eq!(state.current_player(), PlayerId::new(0));
        assert_eq!(state.high_bid(), 5);

        apply(&mut state, &config, &mut shuffle, Action::Bid(0)).unwrap();

        // Seat 3 bought the opening Gold card.
        assert_eq!(state.money(PlayerId::new(3)), 35);
        assert_eq!(state.cargo(PlayerId::new(3)), &[Card::gold(10)]);
        assert_eq!(state.turn_player(), PlayerId::new(1));
        assert_eq!(state.phase(), Phase::Draw);
    }

    #[test]
    fn test_rejected_action_leaves_state_alone() {
        let (config, mut state, mut shuffle) = setup();
        let events_before = state.events().len();

        let err = apply(&mut state, &config, &mut shuffle, Action::Bid(4)).unwrap_err();

        assert_eq!(err, GameError::WrongPhase { action: Action::Bid(4), phase: Phase::Draw });
        assert_eq!(state.events().len(), events_before);
        assert_eq!(state.history().count(), 0);
        assert_eq!(state.phase(), Phase::Draw);
    }

    #[test]
    fn test_overbid_rejected() {
        let (config, mut state, mut shuffle) = setup();
        apply(&mut state, &config, &mut shuffle, Action::Pass).unwrap();

        let err = apply(&mut state, &config, &mut shuffle, Action::Bid(41)).unwrap_err();
        assert_eq!(err, GameError::IllegalAction { action: Action::Bid(41), player: PlayerId::new(1) });
    }

    #[test]
    fn test_empty_deck_forces_resolution() {
        let (config, mut state, mut shuffle) = setup();
        state.deck = vec![Card::new(Resource::Spice, 4)];
        apply(&mut state, &config, &mut shuffle, Action::Draw).unwrap();
        assert!(state.deck().is_empty());
        apply(&mut state, &config, &mut shuffle, Action::Pass).unwrap();

        // First bidder is not the opener, but the deck is gone.
        apply(&mut state, &config, &mut shuffle, Action::Bid(2)).unwrap();

        assert_eq!(state.day(), 1);
        assert_eq!(state.cards_in_ships(), 0);
        assert!(state
            .events()
            .iter()
            .any(|e| matches!(e, GameEvent::LotWon { player, price: 2, .. } if *player == PlayerId::new(1))));
    }

    #[test]
    fn test_history_records_actions() {
        let (config, mut state, mut shuffle) = setup();
        apply(&mut state, &config, &mut shuffle, Action::Draw).unwrap();
        apply(&mut state, &config, &mut shuffle, Action::Pass).unwrap();

        let history: Vec<_> = state.history().cloned().collect();
        assert_eq!(history[0], ActionRecord::new(PlayerId::new(0), Action::Draw, 0, 0));
        assert_eq!(history[1], ActionRecord::new(PlayerId::new(0), Action::Pass, 0, 1));
    }
}
