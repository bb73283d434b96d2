//! Player identification, seat rotation and per-player data storage.
//!
//! ## PlayerId
//!
//! Seat index supporting 2-255 players. Rotation is a pure function of the
//! seat and the table size; it never looks at game state.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access, indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier. Seats are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat to the left of this one, wrapping around the table.
    ///
    /// ```
    /// use medici_engine::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(1).next(4), PlayerId::new(2));
    /// assert_eq!(PlayerId::new(3).next(4), PlayerId::new(0));
    /// ```
    #[must_use]
    pub const fn next(self, player_count: usize) -> Self {
        Self(((self.0 as usize + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use medici_engine::core::{PlayerId, PlayerMap};
///
/// let mut money: PlayerMap<u32> = PlayerMap::with_value(4, 40);
/// money[PlayerId::new(1)] -= 12;
/// assert_eq!(money[PlayerId::new(1)], 28);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// One entry per seat, produced by `init`.
    ///
    /// Panics for an empty table or more than 255 seats.
    pub fn new(player_count: usize, init: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= usize::from(u8::MAX), "At most 255 players supported");
        Self { seats: PlayerId::all(player_count).map(init).collect() }
    }

    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self { seats: vec![value; player_count] }.checked()
    }

    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    fn checked(self) -> Self {
        assert!(!self.seats.is_empty(), "Must have at least 1 player");
        assert!(self.seats.len() <= usize::from(u8::MAX), "At most 255 players supported");
        self
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// Entries in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all(self.seats.len()).zip(&self.seats)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::all(self.seats.len()).zip(self.seats.iter_mut())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.seats.iter()
    }

    /// Project every seat's entry into a new map.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> PlayerMap<U> {
        PlayerMap { seats: self.seats.iter().map(f).collect() }
    }
}

impl<T: Ord> PlayerMap<T> {
    /// The first seat holding the largest value.
    #[must_use]
    pub fn first_max(&self) -> PlayerId {
        self.first_by(|candidate, best| candidate > best)
    }

    /// The first seat holding the smallest value.
    #[must_use]
    pub fn first_min(&self) -> PlayerId {
        self.first_by(|candidate, best| candidate < best)
    }

    /// Scan in seat order, replacing the incumbent only on a strict win.
    fn first_by(&self, beats: impl Fn(&T, &T) -> bool) -> PlayerId {
        let mut best = PlayerId(0);
        for (player, value) in self.iter() {
            if beats(value, &self[best]) {
                best = player;
            }
        }
        best
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        &self.seats[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.seats[player.index()]
    }
}
