//! Wildcard cost summary and booster estimates.

use serde::Serialize;

use super::collection::{Collection, Wildcards};
use crate::cards::CardDatabase;
use crate::core::{BoosterRates, EconomyConfig, Rarity, RarityCounts};
use crate::deck::Deck;

fn rate(rates: &BoosterRates, rarity: Rarity) -> f64 {
    match rarity {
        Rarity::Common => rates.common,
        Rarity::Uncommon => rates.uncommon,
        Rarity::Rare => rates.rare,
        Rarity::Mythic => rates.mythic,
        Rarity::Token | Rarity::Land => 0.0,
    }
}

/// Boosters to open, on average, to cover a wildcard shortfall.
///
/// Rarities are opened in parallel, so the estimate is the worst single
/// rarity rather than the sum.
#[must_use]
pub fn booster_estimate(missing: &RarityCounts, rates: &BoosterRates) -> f64 {
    Rarity::WILDCARD
        .into_iter()
        .map(|r| rate(rates, r) * f64::from(missing.get(r)))
        .fold(0.0, f64::max)
}

/// Shortfall for one rarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CostLine {
    pub rarity: Rarity,
    pub owned: u32,
    pub missing: u32,
}

impl CostLine {
    /// Tooltip text, e.g. `"Rare wildcards needed."`.
    #[must_use]
    pub fn title(&self) -> String {
        let name = self.rarity.as_str();
        let mut chars = name.chars();
        let capitalized: String = chars
            .next()
            .map(|c| c.to_ascii_uppercase())
            .into_iter()
            .chain(chars)
            .collect();
        format!("{capitalized} wildcards needed.")
    }
}

/// `"owned/missing"` when any are owned, else `"missing"`.
impl std::fmt::Display for CostLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.owned > 0 {
            write!(f, "{}/{}", self.owned, self.missing)
        } else {
            write!(f, "{}", self.missing)
        }
    }
}

/// What it costs to finish a deck.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct WildcardCost {
    /// Rarities with a shortfall, common to mythic.
    pub lines: Vec<CostLine>,
    /// Rounded booster estimate. `None` when nothing is missing.
    pub boosters: Option<u32>,
}

impl WildcardCost {
    /// Summarize a shortfall against the wildcards already held.
    #[must_use]
    pub fn new(missing: &RarityCounts, owned: &Wildcards, rates: &BoosterRates) -> Self {
        let lines: Vec<CostLine> = Rarity::WILDCARD
            .into_iter()
            .filter(|&r| missing.get(r) > 0)
            .map(|r| CostLine {
                rarity: r,
                owned: owned.get(r),
                missing: missing.get(r),
            })
            .collect();

        let boosters = (!lines.is_empty()).then(|| booster_estimate(missing, rates).round() as u32);

        Self { lines, boosters }
    }

    /// Cost of a whole deck (mainboard and sideboard) for a collection.
    #[must_use]
    pub fn for_deck<D: CardDatabase + ?Sized>(
        deck: &Deck,
        db: &D,
        collection: &Collection,
        config: &EconomyConfig,
    ) -> Self {
        let counter = collection.counter(db, config);
        let missing = deck.missing_wildcards(db, &counter, true, true);
        Self::new(&missing, &collection.wildcards, &config.booster_rates)
    }

    /// True if nothing is missing.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.lines.is_empty()
    }
}
