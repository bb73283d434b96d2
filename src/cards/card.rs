//! Trade goods and the cards that carry them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A kind of cargo.
///
/// Five tradable commodities plus Gold. Gold is worth shipping but never
/// counts toward a purchase tally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Resource {
    Cloth,
    Fur,
    Grain,
    Dye,
    Spice,
    Gold,
}

impl Resource {
    /// Tradable kinds in canonical order.
    pub const TRADABLE: [Resource; 5] = [
        Resource::Cloth,
        Resource::Fur,
        Resource::Grain,
        Resource::Dye,
        Resource::Spice,
    ];

    /// Position in [`Resource::TRADABLE`], or `None` for Gold.
    #[must_use]
    pub const fn tradable_index(self) -> Option<usize> {
        match self {
            Resource::Cloth => Some(0),
            Resource::Fur => Some(1),
            Resource::Grain => Some(2),
            Resource::Dye => Some(3),
            Resource::Spice => Some(4),
            Resource::Gold => None,
        }
    }

    #[must_use]
    pub const fn is_tradable(self) -> bool {
        self.tradable_index().is_some()
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Resource::Cloth => "Cloth",
            Resource::Fur => "Fur",
            Resource::Grain => "Grain",
            Resource::Dye => "Dye",
            Resource::Spice => "Spice",
            Resource::Gold => "Gold",
        };
        f.write_str(name)
    }
}

/// An immutable (resource, value) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub resource: Resource,
    pub value: u32,
}

impl Card {
    #[must_use]
    pub const fn new(resource: Resource, value: u32) -> Self {
        Self { resource, value }
    }

    #[must_use]
    pub const fn gold(value: u32) -> Self {
        Self::new(Resource::Gold, value)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {})", self.resource, self.value)
    }
}

/// Cards currently up for auction. Three fit inline.
pub type Lot = SmallVec<[Card; 3]>;

/// Total value of a set of cards.
#[must_use]
pub fn total_value<'a>(cards: impl IntoIterator<Item = &'a Card>) -> u32 {
    cards.into_iter().map(|c| c.value).sum()
}
