//! Per-player purchase tallies ("pyramids").

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::card::{Card, Resource};

/// Count of tradable cards won, per resource.
///
/// Every card in a won lot counts, so two Fur cards bump Fur by two. Gold is
/// ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tally {
    counts: [u32; Resource::TRADABLE.len()],
}

impl Tally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for one resource. Gold always reads zero.
    #[must_use]
    pub fn get(&self, resource: Resource) -> u32 {
        resource.tradable_index().map_or(0, |i| self.counts[i])
    }

    /// Record a won lot.
    pub fn record_lot<'a>(&mut self, lot: impl IntoIterator<Item = &'a Card>) {
        for card in lot {
            if let Some(i) = card.resource.tradable_index() {
                self.counts[i] += 1;
            }
        }
    }

    /// Set a count directly.
    pub fn set(&mut self, resource: Resource, count: u32) {
        if let Some(i) = resource.tradable_index() {
            self.counts[i] = count;
        }
    }

    /// (resource, count) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Resource, u32)> + '_ {
        Resource::TRADABLE.iter().copied().zip(self.counts.iter().copied())
    }
}

impl Index<Resource> for Tally {
    type Output = u32;

    fn index(&self, resource: Resource) -> &u32 {
        const ZERO: u32 = 0;
        match resource.tradable_index() {
            Some(i) => &self.counts[i],
            None => &ZERO,
        }
    }
}
