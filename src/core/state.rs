//! Game state for one game instance.
//!
//! `GameState` is plain data. It is created by the game builder and changed
//! only through `RulesEngine::apply_action`; everything here is a read-only
//! accessor or a small crate-internal helper used by the rules.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::config::GameConfig;
use super::player::{PlayerId, PlayerMap};
use crate::cards::{total_value, Card, Lot, Tally};
use crate::events::{EventLog, GameEvent};

/// Which kind of action the game is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The opener is revealing cards.
    Draw,
    /// Players are bidding on the lot.
    Bid,
    /// Final day scored. Terminal.
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Draw => "Draw",
            Phase::Bid => "Bid",
            Phase::GameOver => "GameOver",
        };
        f.write_str(name)
    }
}

/// Complete state of one game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    player_count: usize,

    // === Progression ===
    pub(crate) phase: Phase,
    /// 0-based day counter.
    pub(crate) day: u32,
    /// Opener of the current lot; bidding ends when it returns to them.
    pub(crate) turn_player: PlayerId,
    /// Whose action is awaited.
    pub(crate) current_player: PlayerId,

    // === Cards ===
    /// Remaining deck; the top card is the last element.
    pub(crate) deck: Vec<Card>,
    pub(crate) lot: Lot,
    pub(crate) cargo: PlayerMap<Vec<Card>>,

    // === Auction ===
    /// Latest bid per player for the current lot.
    pub(crate) bids: FxHashMap<PlayerId, u32>,

    // === Scores ===
    pub(crate) money: PlayerMap<u32>,
    pub(crate) tallies: PlayerMap<Tally>,
    pub(crate) winner: Option<PlayerId>,

    // === History ===
    pub(crate) events: EventLog,
    pub(crate) history: Vector<ActionRecord>,
    action_sequence: u32,
}

impl GameState {
    /// A table with starting money and empty ships, before any deck is dealt.
    #[must_use]
    pub(crate) fn new(config: &GameConfig) -> Self {
        let n = config.player_count;
        Self {
            player_count: n,
            phase: Phase::Draw,
            day: 0,
            turn_player: PlayerId::new(0),
            current_player: PlayerId::new(0),
            deck: Vec::new(),
            lot: Lot::new(),
            cargo: PlayerMap::with_default(n),
            bids: FxHashMap::default(),
            money: PlayerMap::with_value(n, config.starting_money),
            tallies: PlayerMap::with_default(n),
            winner: None,
            events: EventLog::new(),
            history: Vector::new(),
            action_sequence: 0,
        }
    }

    // === Progression ===

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn day(&self) -> u32 {
        self.day
    }

    #[must_use]
    pub fn turn_player(&self) -> PlayerId {
        self.turn_player
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Set once the last day has been scored.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    // === Cards ===

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Remaining deck, bottom first.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    #[must_use]
    pub fn lot(&self) -> &[Card] {
        &self.lot
    }

    #[must_use]
    pub fn cargo(&self, player: PlayerId) -> &[Card] {
        &self.cargo[player]
    }

    #[must_use]
    pub fn cargo_value(&self, player: PlayerId) -> u32 {
        total_value(&self.cargo[player])
    }

    /// Cards held across all ships.
    #[must_use]
    pub fn cards_in_ships(&self) -> usize {
        self.cargo.values().map(Vec::len).sum()
    }

    // === Auction ===

    #[must_use]
    pub fn bid(&self, player: PlayerId) -> Option<u32> {
        self.bids.get(&player).copied()
    }

    /// Highest bid recorded on the current lot, zero if none.
    #[must_use]
    pub fn high_bid(&self) -> u32 {
        self.bids.values().copied().max().unwrap_or(0)
    }

    // === Scores ===

    #[must_use]
    pub fn money(&self, player: PlayerId) -> u32 {
        self.money[player]
    }

    #[must_use]
    pub fn all_money(&self) -> &PlayerMap<u32> {
        &self.money
    }

    #[must_use]
    pub fn tally(&self, player: PlayerId) -> &Tally {
        &self.tallies[player]
    }

    // === History ===

    #[must_use]
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Actions applied so far, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &ActionRecord> {
        self.history.iter()
    }

    pub(crate) fn record_event(&mut self, event: GameEvent) {
        self.events.record(event);
    }

    pub(crate) fn record_action(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }

    /// Get the next action sequence number within the day and increment.
    pub(crate) fn next_sequence(&mut self) -> u32 {
        let seq = self.action_sequence;
        self.action_sequence += 1;
        seq
    }

    pub(crate) fn reset_sequence(&mut self) {
        self.action_sequence = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Resource;

    #[test]
    fn test_new_table() {
        let state = GameState::new(&GameConfig::default());

        assert_eq!(state.player_count(), 4);
        assert_eq!(state.phase(), Phase::Draw);
        assert_eq!(state.day(), 0);
        assert_eq!(state.current_player(), PlayerId::new(0));
        for p in PlayerId::all(4) {
            assert_eq!(state.money(p), 40);
            assert!(state.cargo(p).is_empty());
            assert_eq!(state.tally(p)[Resource::Fur], 0);
        }
        assert!(!state.is_terminal());
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_high_bid() {
        let mut state = GameState::new(&GameConfig::default());
        assert_eq!(state.high_bid(), 0);

        state.bids.insert(PlayerId::new(1), 4);
        state.bids.insert(PlayerId::new(2), 0);
        state.bids.insert(PlayerId::new(3), 9);
        assert_eq!(state.high_bid(), 9);
        assert_eq!(state.bid(PlayerId::new(2)), Some(0));
        assert_eq!(state.bid(PlayerId::new(0)), None);
    }

    #[test]
    fn test_cargo_value() {
        let mut state = GameState::new(&GameConfig::default());
        let p = PlayerId::new(2);
        state.cargo[p] = vec![Card::gold(10), Card::new(Resource::Cloth, 4)];

        assert_eq!(state.cargo_value(p), 14);
        assert_eq!(state.cards_in_ships(), 2);
    }

    #[test]
    fn test_sequence_numbers() {
        let mut state = GameState::new(&GameConfig::default());
        assert_eq!(state.next_sequence(), 0);
        assert_eq!(state.next_sequence(), 1);
        state.reset_sequence();
        assert_eq!(state.next_sequence(), 0);
    }
}
