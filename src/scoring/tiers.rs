//! Ranking players into tiers and splitting prize pools.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

/// Money paid to one player by a ranking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub player: PlayerId,
    /// 0 for first place.
    pub tier: u8,
    pub amount: u32,
}

/// Group players by score, highest first, keeping at most `depth` tiers.
///
/// Players with equal scores share a tier. Each tier lists players in seat
/// order.
///
/// ```
/// use medici_engine::core::{PlayerId, PlayerMap};
/// use medici_engine::scoring::rank_tiers;
///
/// let scores = PlayerMap::new(4, |p| [3, 3, 1, 0][p.index()]);
/// let tiers = rank_tiers(&scores, 2);
/// assert_eq!(tiers, vec![
///     vec![PlayerId::new(0), PlayerId::new(1)],
///     vec![PlayerId::new(2)],
/// ]);
/// ```
#[must_use]
pub fn rank_tiers(scores: &PlayerMap<u32>, depth: usize) -> Vec<Vec<PlayerId>> {
    let mut distinct: Vec<u32> = scores.values().copied().collect();
    distinct.sort_unstable_by(|a, b| b.cmp(a));
    distinct.dedup();

    distinct
        .into_iter()
        .take(depth)
        .map(|value| {
            scores
                .iter()
                .filter(|(_, &s)| s == value)
                .map(|(p, _)| p)
                .collect()
        })
        .collect()
}

/// Sum of awards per player.
#[must_use]
pub fn totals(player_count: usize, awards: &[Award]) -> PlayerMap<u32> {
    let mut out = PlayerMap::with_value(player_count, 0);
    for award in awards {
        out[award.player] += award.amount;
    }
    out
}

/// Split `pool` evenly among `players`. The remainder is dropped.
pub(crate) fn split(pool: u32, players: &[PlayerId], tier: u8) -> impl Iterator<Item = Award> + '_ {
    let share = match players.len() {
        0 => 0,
        n => pool / n as u32,
    };
    players.iter().map(move |&player| Award { player, tier, amount: share })
}

/// The `index`-th tier, or an empty slice when fewer distinct scores exist.
pub(crate) fn tier(tiers: &[Vec<PlayerId>], index: usize) -> &[PlayerId] {
    match tiers.get(index) {
        Some(players) => players,
        None => &[],
    }
}
