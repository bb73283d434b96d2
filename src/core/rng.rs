//! Deterministic random number generation and the deck shuffling seam.
//!
//! The engine never touches ambient randomness. Every day start asks a
//! [`Shuffler`] to order the fresh deck; production games use [`GameRng`],
//! tests can use [`PresetShuffle`] to stack the deck.
//!
//! ```
//! use medici_engine::core::{GameConfig, GameRng, Shuffler};
//!
//! let template = GameConfig::default().deck_template();
//! let (mut a, mut b) = (template.clone(), template);
//! GameRng::new(42).shuffle_deck(&mut a);
//! GameRng::new(42).shuffle_deck(&mut b);
//! assert_eq!(a, b);
//! ```

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Source of deck orderings.
///
/// The deck is drawn from the tail, so the last card after shuffling is the
/// first one revealed.
pub trait Shuffler {
    /// Reorder a freshly built deck in place.
    fn shuffle_deck(&mut self, deck: &mut Vec<Card>);
}

/// Seeded ChaCha8 deck shuffler.
///
/// One seed fixes every day's deck order, so a game is replayable from its
/// seed and action list alone.
#[derive(Clone, Debug)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed), seed }
    }

    /// Pick one element uniformly, e.g. a random legal action for playouts.
    #[must_use]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    /// Checkpoint taken between days or before saving a game.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState { seed: self.seed, word_pos: self.rng.get_word_pos() }
    }

    /// Resume exactly where [`GameRng::state`] was taken.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(state.seed);
        rng.set_word_pos(state.word_pos);
        Self { rng, seed: state.seed }
    }
}

impl Shuffler for GameRng {
    fn shuffle_deck(&mut self, deck: &mut Vec<Card>) {
        deck.shuffle(&mut self.rng);
    }
}

/// Saved position of a [`GameRng`]: the seed plus the ChaCha8 word counter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}

/// Hands out predetermined deck orders, one per day.
///
/// Once the queue runs dry the template order is left untouched.
#[derive(Clone, Debug, Default)]
pub struct PresetShuffle {
    orders: VecDeque<Vec<Card>>,
}

impl PresetShuffle {
    /// Queue the given deck orders, first day first.
    pub fn new(orders: impl IntoIterator<Item = Vec<Card>>) -> Self {
        Self {
            orders: orders.into_iter().collect(),
        }
    }

    /// Append another day's order.
    pub fn push(&mut self, order: Vec<Card>) {
        self.orders.push_back(order);
    }

    /// Number of orders not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.orders.len()
    }
}

impl Shuffler for PresetShuffle {
    fn shuffle_deck(&mut self, deck: &mut Vec<Card>) {
        if let Some(order) = self.orders.pop_front() {
            *deck = order;
        }
    }
}
