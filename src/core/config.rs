//! Configuration types.
//!
//! Constants that vary with the game client's catalog live here rather than
//! in the code that uses them:
//! - `ExportConfig`: Which printings must be swapped for a reprint on export
//! - `EconomyConfig`: Copy limits, unlimited cards and booster drop rates
//!
//! Both load from JSON with `#[serde(default)]`, so a config file only needs
//! to name the values it overrides.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Deck tile (display art) used when a record carries none.
pub const DEFAULT_TILE: u32 = 67003;

/// Settings for the game-client export format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportConfig {
    /// Sets whose printings cannot be imported by the client. Cards from
    /// these sets are exported as their first listed reprint.
    pub reprint_only_sets: Vec<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            reprint_only_sets: vec!["Mythic Edition".to_string()],
        }
    }
}

impl ExportConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a reprint-only set.
    #[must_use]
    pub fn with_reprint_only_set(mut self, set: impl Into<String>) -> Self {
        self.reprint_only_sets.push(set.into());
        self
    }

    /// Check if a set is reprint-only.
    #[must_use]
    pub fn is_reprint_only(&self, set: &str) -> bool {
        self.reprint_only_sets.iter().any(|s| s == set)
    }
}

/// Expected booster openings per wildcard, by rarity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoosterRates {
    pub common: f64,
    pub uncommon: f64,
    pub rare: f64,
    pub mythic: f64,
}

impl Default for BoosterRates {
    fn default() -> Self {
        Self {
            common: 3.36,
            uncommon: 2.6,
            rare: 5.72,
            mythic: 13.24,
        }
    }
}

/// Settings for wildcard shortfall and booster estimates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EconomyConfig {
    /// Copies of a card that ever need to be owned.
    pub max_copies: u32,

    /// Cards a deck may run any number of.
    pub unlimited_cards: Vec<CardId>,

    pub booster_rates: BoosterRates,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            max_copies: 4,
            unlimited_cards: vec![CardId::new(67306), CardId::new(69172)],
            booster_rates: BoosterRates::default(),
        }
    }
}

impl EconomyConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the copy limit.
    #[must_use]
    pub fn with_max_copies(mut self, max: u32) -> Self {
        self.max_copies = max;
        self
    }

    /// Mark a card as unlimited.
    #[must_use]
    pub fn with_unlimited_card(mut self, card: CardId) -> Self {
        self.unlimited_cards.push(card);
        self
    }

    /// Replace the booster rates.
    #[must_use]
    pub fn with_booster_rates(mut self, rates: BoosterRates) -> Self {
        self.booster_rates = rates;
        self
    }

    /// Check if a card is unlimited.
    #[must_use]
    pub fn is_unlimited(&self, card: CardId) -> bool {
        self.unlimited_cards.contains(&card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_defaults() {
        let config = ExportConfig::new();
        assert!(config.is_reprint_only("Mythic Edition"));
        assert!(!config.is_reprint_only("Dominaria"));
    }

    #[test]
    fn test_export_builder() {
        let config = ExportConfig::new().with_reprint_only_set("Signature Spellbook");
        assert!(config.is_reprint_only("Signature Spellbook"));
        assert!(config.is_reprint_only("Mythic Edition"));
    }

    #[test]
    fn test_economy_builder() {
        let config = EconomyConfig::new()
            .with_max_copies(1)
            .with_unlimited_card(CardId::new(5));

        assert_eq!(config.max_copies, 1);
        assert!(config.is_unlimited(CardId::new(5)));
        assert!(config.is_unlimited(CardId::new(67306)));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: EconomyConfig = serde_json::from_str(r#"{"maxCopies": 1}"#).unwrap();
        assert_eq!(config.max_copies, 1);
        assert_eq!(config.unlimited_cards.len(), 2);
        assert_eq!(config.booster_rates, BoosterRates::default());

        let rates: BoosterRates = serde_json::from_str(r#"{"mythic": 10.0}"#).unwrap();
        assert_eq!(rates.mythic, 10.0);
        assert_eq!(rates.rare, 5.72);
    }
}
