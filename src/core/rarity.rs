//! Card rarities and per-rarity counters.

use serde::{Deserialize, Serialize};

/// Rarity bucket of a card. Wildcards are spent per bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Mythic,
    Token,
    Land,
}

impl Rarity {
    /// Every rarity bucket.
    pub const ALL: [Rarity; 6] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Mythic,
        Rarity::Token,
        Rarity::Land,
    ];

    /// Rarities that have a craftable wildcard.
    pub const WILDCARD: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Mythic,
    ];

    /// Wire name (`"common"`, `"mythic"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Mythic => "mythic",
            Rarity::Token => "token",
            Rarity::Land => "land",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One counter per rarity. All six buckets always exist, starting at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityCounts {
    pub rare: u32,
    pub common: u32,
    pub uncommon: u32,
    pub mythic: u32,
    pub token: u32,
    pub land: u32,
}

impl RarityCounts {
    /// All buckets at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, rarity: Rarity) -> u32 {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Uncommon => self.uncommon,
            Rarity::Rare => self.rare,
            Rarity::Mythic => self.mythic,
            Rarity::Token => self.token,
            Rarity::Land => self.land,
        }
    }

    fn slot(&mut self, rarity: Rarity) -> &mut u32 {
        match rarity {
            Rarity::Common => &mut self.common,
            Rarity::Uncommon => &mut self.uncommon,
            Rarity::Rare => &mut self.rare,
            Rarity::Mythic => &mut self.mythic,
            Rarity::Token => &mut self.token,
            Rarity::Land => &mut self.land,
        }
    }

    /// Add to a bucket, saturating at `u32::MAX`.
    pub fn add(&mut self, rarity: Rarity, amount: u32) {
        let slot = self.slot(rarity);
        *slot = slot.saturating_add(amount);
    }

    /// Iterate buckets in `Rarity::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Rarity, u32)> + '_ {
        Rarity::ALL.into_iter().map(move |r| (r, self.get(r)))
    }

    /// Sum of every bucket.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.iter().fold(0_u32, |total, (_, n)| total.saturating_add(n))
    }
}
