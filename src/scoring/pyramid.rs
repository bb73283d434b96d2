//! Purchase-tally ("pyramid") ranking, scored separately for each resource.

use crate::core::{PlayerMap, PyramidBonuses};

use super::tiers::{rank_tiers, split, tier, Award};

/// Ranking awards for one resource's tallies.
///
/// A sole leader takes the first prize and the next tally down splits the
/// second. A shared lead splits both prizes and nobody else is paid.
#[must_use]
pub fn pyramid_awards(tallies: &PlayerMap<u32>, prizes: [u32; 2]) -> Vec<Award> {
    let tiers = rank_tiers(tallies, 2);
    let top = tier(&tiers, 0);
    let second = tier(&tiers, 1);
    let [p0, p1] = prizes;

    if top.len() == 1 {
        split(p0, top, 0).chain(split(p1, second, 1)).collect()
    } else {
        split(p0 + p1, top, 0).collect()
    }
}

/// Flat bonus for a single tally, independent of ranking.
///
/// ```
/// use medici_engine::core::PyramidBonuses;
/// use medici_engine::scoring::tally_bonus;
///
/// let bonuses = PyramidBonuses::default();
/// assert_eq!(tally_bonus(4, &bonuses), None);
/// assert_eq!(tally_bonus(5, &bonuses), Some(5));
/// assert_eq!(tally_bonus(9, &bonuses), Some(20));
/// ```
#[must_use]
pub fn tally_bonus(count: u32, bonuses: &PyramidBonuses) -> Option<u32> {
    match count {
        0..=4 => None,
        5 => Some(bonuses.five),
        6 => Some(bonuses.six),
        _ => Some(bonuses.seven_plus),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::scoring::tiers::totals;

    const PRIZES: [u32; 2] = [10, 5];

    fn paid(tallies: &[u32]) -> Vec<u32> {
        let map = PlayerMap::new(tallies.len(), |p| tallies[p.index()]);
        totals(tallies.len(), &pyramid_awards(&map, PRIZES))
            .values()
            .copied()
            .collect()
    }

    #[test]
    fn test_sole_leader_and_runner_up() {
        assert_eq!(paid(&[1, 4, 2, 0]), vec![0, 10, 5, 0]);
    }

    #[test]
    fn test_tied_runners_up_split_second_prize() {
        assert_eq!(paid(&[3, 1, 1, 0]), vec![10, 2, 2, 0]);
    }

    #[test]
    fn test_tied_leaders_split_both_prizes() {
        let map = PlayerMap::new(4, |p| [3, 3, 1, 0][p.index()]);
        let awards = pyramid_awards(&map, PRIZES);

        assert_eq!(awards.len(), 2);
        assert_eq!(awards[0].player, PlayerId::new(0));
        assert_eq!(awards[1].player, PlayerId::new(1));
        assert!(awards.iter().all(|a| a.amount == 7 && a.tier == 0));
    }

    #[test]
    fn test_nobody_bought_anything() {
        // Everyone ties at zero and shares the pool.
        assert_eq!(paid(&[0, 0, 0, 0]), vec![3, 3, 3, 3]);
    }

    #[test]
    fn test_bonus_thresholds() {
        let bonuses = PyramidBonuses { five: 1, six: 2, seven_plus: 3 };
        let got: Vec<_> = (4..=8).map(|c| tally_bonus(c, &bonuses)).collect();
        assert_eq!(got, vec![None, Some(1), Some(2), Some(3), Some(3)]);
    }
}
