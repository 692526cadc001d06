//! In-memory card catalog.
//!
//! The `CardRegistry` stores card data and the set table, keyed for fast
//! lookup by `CardId` and set name. It is the stock `CardDatabase`.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::database::CardDatabase;
use super::definition::{CardData, CardId, SetInfo};
use crate::core::CatalogError;

/// Registry of card and set data.
///
/// ## Example
///
/// ```
/// use arena_decks::cards::{CardData, CardDatabase, CardId, CardRegistry, SetInfo};
///
/// let mut registry = CardRegistry::new();
/// registry
///     .register(CardData::new(CardId::new(1), "Shock", "Dominaria", "144"))
///     .unwrap();
/// registry.register_set("Dominaria", SetInfo::new("dom").with_arena_code("DAR"));
///
/// assert_eq!(registry.card(CardId::new(1)).unwrap().name, "Shock");
/// assert_eq!(registry.set_code("Dominaria"), "DAR");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardData>,
    sets: FxHashMap<String, SetInfo>,
}

/// On-disk catalog layout.
#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    cards: Vec<CardData>,
    #[serde(default)]
    sets: FxHashMap<String, SetInfo>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from `{ "cards": [...], "sets": { name: {...} } }`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let mut registry = Self::new();
        for card in file.cards {
            registry.register(card)?;
        }
        registry.sets = file.sets;

        tracing::debug!(
            cards = registry.cards.len(),
            sets = registry.sets.len(),
            "loaded card catalog"
        );
        Ok(registry)
    }

    /// Register a card.
    ///
    /// Fails if a card with the same ID already exists.
    pub fn register(&mut self, card: CardData) -> Result<(), CatalogError> {
        if self.cards.contains_key(&card.id) {
            return Err(CatalogError::DuplicateCard(card.id));
        }
        self.cards.insert(card.id, card);
        Ok(())
    }

    /// Register or replace a set entry.
    pub fn register_set(&mut self, name: impl Into<String>, set: SetInfo) {
        self.sets.insert(name.into(), set);
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards.
    pub fn iter(&self) -> impl Iterator<Item = &CardData> {
        self.cards.values()
    }
}

impl CardDatabase for CardRegistry {
    fn card(&self, id: CardId) -> Option<&CardData> {
        self.cards.get(&id)
    }

    fn set(&self, name: &str) -> Option<&SetInfo> {
        self.sets.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut registry = CardRegistry::new();
        registry
            .register(CardData::new(CardId::new(1), "Test Card", "Set", "1"))
            .unwrap();

        let found = registry.card(CardId::new(1));
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "Test Card");

        assert!(registry.card(CardId::new(99)).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut registry = CardRegistry::new();
        registry
            .register(CardData::new(CardId::new(1), "Card A", "Set", "1"))
            .unwrap();

        let err = registry
            .register(CardData::new(CardId::new(1), "Card B", "Set", "2"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCard(id) if id == CardId::new(1)));
        assert_eq!(registry.card(CardId::new(1)).unwrap().name, "Card A");
    }

    #[test]
    fn test_set_code_fallback() {
        let mut registry = CardRegistry::new();
        registry.register_set("Ravnica Allegiance", SetInfo::new("rna"));

        assert_eq!(registry.set_code("Ravnica Allegiance"), "rna");
        assert_eq!(registry.set_code("War of the Spark"), "WAR");
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "cards": [
                {"id": 1, "name": "Opt", "set": "Dominaria", "cid": "60", "rarity": "common"},
                {"id": 2, "name": "Karn", "set": "Dominaria", "cid": "1", "rarity": "mythic"}
            ],
            "sets": {"Dominaria": {"code": "dom", "arenacode": "DAR"}}
        }"#;
        let registry = CardRegistry::from_json(json).unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains(CardId::new(2)));
        assert_eq!(registry.set_code("Dominaria"), "DAR");
        assert_eq!(registry.iter().count(), 2);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            CardRegistry::from_json("{\"cards\": 3}"),
            Err(CatalogError::Parse(_))
        ));

        let dup = r#"{"cards": [
            {"id": 1, "name": "A", "set": "S", "cid": "1", "rarity": "rare"},
            {"id": 1, "name": "B", "set": "S", "cid": "2", "rarity": "rare"}
        ]}"#;
        assert!(matches!(
            CardRegistry::from_json(dup),
            Err(CatalogError::DuplicateCard(_))
        ));
    }
}
