//! Ship-value ranking.
//!
//! Three prizes are paid on cargo value. How many tiers get paid depends on
//! how crowded the top is: prize money a shared tier soaks up is not paid
//! again further down.
//!
//! | first tier | second tier | paid                                              |
//! |------------|-------------|---------------------------------------------------|
//! | 1          | 1           | p0; p1; third tier splits p2                      |
//! | 1          | 2+          | p0; second tier splits p1 + p2                    |
//! | 2          | any         | first tier splits p0 + p1; second tier splits p2  |
//! | 3+         | -           | first tier splits p0 + p1 + p2                    |

use crate::core::PlayerMap;

use super::tiers::{rank_tiers, split, tier, Award};

/// Awards for a day's ship values.
///
/// ```
/// use medici_engine::core::PlayerMap;
/// use medici_engine::scoring::ship_awards;
///
/// let values = PlayerMap::new(4, |p| [20, 12, 12, 3][p.index()]);
/// let awards = ship_awards(&values, [30, 20, 10]);
/// let paid: Vec<u32> = awards.iter().map(|a| a.amount).collect();
/// assert_eq!(paid, vec![30, 15, 15]);
/// ```
#[must_use]
pub fn ship_awards(values: &PlayerMap<u32>, prizes: [u32; 3]) -> Vec<Award> {
    let tiers = rank_tiers(values, 3);
    let first = tier(&tiers, 0);
    let second = tier(&tiers, 1);
    let third = tier(&tiers, 2);
    let [p0, p1, p2] = prizes;

    let mut awards = Vec::with_capacity(values.player_count());
    match first.len() {
        1 => {
            awards.extend(split(p0, first, 0));
            match second.len() {
                0 => {}
                1 => {
                    awards.extend(split(p1, second, 1));
                    awards.extend(split(p2, third, 2));
                }
                _ => awards.extend(split(p1 + p2, second, 1)),
            }
        }
        2 => {
            awards.extend(split(p0 + p1, first, 0));
            awards.extend(split(p2, second, 1));
        }
        _ => awards.extend(split(p0 + p1 + p2, first, 0)),
    }
    awards
}
