//! Day start, day-end scoring and game end.

use crate::cards::{total_value, Resource, Tally};
use crate::core::{GameConfig, GameState, Phase, PlayerId, Shuffler};
use crate::events::GameEvent;
use crate::scoring::{pyramid_awards, ship_awards, tally_bonus};

/// Deal a fresh shuffled deck, reveal the first lot card and hand the table
/// to `opener`.
pub(crate) fn start_day<S: Shuffler>(
    state: &mut GameState,
    config: &GameConfig,
    shuffler: &mut S,
    opener: PlayerId,
) {
    let mut deck = config.deck_template();
    shuffler.shuffle_deck(&mut deck);
    state.deck = deck;

    state.lot.clear();
    state.bids.clear();
    if config.reset_tallies_daily {
        for (_, tally) in state.tallies.iter_mut() {
            *tally = Tally::new();
        }
    }

    let first_card = state.deck.pop();
    state.lot.extend(first_card);

    state.phase = Phase::Draw;
    state.turn_player = opener;
    state.current_player = opener;
    state.reset_sequence();

    state.record_event(GameEvent::DayStarted { day: state.day, opener, first_card });
}

/// Score the day, empty the ships, then start the next day or end the game.
///
/// The next day opens with the poorest player; the richest player wins the
/// game. Both pick the lowest seat on ties.
pub(crate) fn end_day<S: Shuffler>(state: &mut GameState, config: &GameConfig, shuffler: &mut S) {
    score_ships(state, config);
    score_pyramids(state, config);

    for (_, cargo) in state.cargo.iter_mut() {
        cargo.clear();
    }
    state.lot.clear();
    state.bids.clear();
    state.record_event(GameEvent::DayEnded { day: state.day });

    if state.day + 1 >= config.days {
        let winner = state.money.first_max();
        state.phase = Phase::GameOver;
        state.winner = Some(winner);
        state.record_event(GameEvent::GameOver { winner, money: state.money[winner] });
    } else {
        state.day += 1;
        let opener = state.money.first_min();
        start_day(state, config, shuffler, opener);
    }
}

fn score_ships(state: &mut GameState, config: &GameConfig) {
    let values = state.cargo.map(|cargo| total_value(cargo));
    for award in ship_awards(&values, config.ship_prizes) {
        state.money[award.player] += award.amount;
        state.record_event(GameEvent::ShipPrize {
            player: award.player,
            tier: award.tier,
            amount: award.amount,
        });
    }
}

fn score_pyramids(state: &mut GameState, config: &GameConfig) {
    for resource in Resource::TRADABLE {
        let tallies = state.tallies.map(|t| t[resource]);

        for award in pyramid_awards(&tallies, config.pyramid_prizes) {
            state.money[award.player] += award.amount;
            state.record_event(GameEvent::PyramidPrize {
                player: award.player,
                resource,
                tier: award.tier,
                amount: award.amount,
            });
        }

        for (player, &count) in tallies.iter() {
            if let Some(amount) = tally_bonus(count, &config.pyramid_bonuses) {
                state.money[player] += amount;
                state.record_event(GameEvent::PyramidBonus { player, resource, count, amount });
            }
        }
    }
}
