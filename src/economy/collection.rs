//! Owned cards and the wildcard shortfall they leave.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardDatabase, CardId, CardsList};
use crate::core::{EconomyConfig, Rarity};
use crate::deck::DeckRecordRef;

/// Computes how many wildcards one card of a deck still needs.
///
/// Gets the whole deck so it can account for copies used elsewhere in it.
pub trait WildcardCounter {
    fn missing_count(&self, deck: &DeckRecordRef<'_>, card: CardId, is_sideboard: bool) -> u32;
}

impl<F> WildcardCounter for F
where
    F: Fn(&DeckRecordRef<'_>, CardId, bool) -> u32,
{
    fn missing_count(&self, deck: &DeckRecordRef<'_>, card: CardId, is_sideboard: bool) -> u32 {
        self(deck, card, is_sideboard)
    }
}

/// Wildcards held, per craftable rarity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wildcards {
    pub common: u32,
    pub uncommon: u32,
    pub rare: u32,
    pub mythic: u32,
}

impl Wildcards {
    /// Held count for a rarity. Tokens and lands have no wildcard.
    #[must_use]
    pub fn get(&self, rarity: Rarity) -> u32 {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Uncommon => self.uncommon,
            Rarity::Rare => self.rare,
            Rarity::Mythic => self.mythic,
            Rarity::Token | Rarity::Land => 0,
        }
    }
}

/// A player's collection: copies owned per card, and wildcards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collection {
    cards: FxHashMap<CardId, u32>,
    pub wildcards: Wildcards,
}

impl Collection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set owned copies of a card (builder pattern).
    #[must_use]
    pub fn with_card(mut self, card: CardId, copies: u32) -> Self {
        self.set_owned(card, copies);
        self
    }

    #[must_use]
    pub fn with_wildcards(mut self, wildcards: Wildcards) -> Self {
        self.wildcards = wildcards;
        self
    }

    pub fn set_owned(&mut self, card: CardId, copies: u32) {
        self.cards.insert(card, copies);
    }

    /// Copies owned of this exact printing.
    #[must_use]
    pub fn owned(&self, card: CardId) -> u32 {
        self.cards.get(&card).copied().unwrap_or(0)
    }

    /// Bind to a database and config to count shortfalls.
    #[must_use]
    pub fn counter<'a, D: CardDatabase + ?Sized>(
        &'a self,
        db: &'a D,
        config: &'a EconomyConfig,
    ) -> CollectionCounter<'a, D> {
        CollectionCounter {
            collection: self,
            db,
            config,
        }
    }
}

/// `WildcardCounter` backed by a `Collection`.
///
/// - Needed: the zone's copies of the card, capped at `max_copies`
/// - Owned: copies of the card and of all its reprints
/// - Sideboard cards only get the owned copies the mainboard left over,
///   unless the card is unlimited and owned at the cap
/// - Basic lands never need wildcards
pub struct CollectionCounter<'a, D: ?Sized> {
    collection: &'a Collection,
    db: &'a D,
    config: &'a EconomyConfig,
}

fn quantity_in(list: &CardsList, card: CardId) -> u32 {
    list.get()
        .iter()
        .filter(|entry| entry.id == card)
        .fold(0_u32, |total, entry| total.saturating_add(entry.quantity))
}

impl<D: CardDatabase + ?Sized> WildcardCounter for CollectionCounter<'_, D> {
    fn missing_count(&self, deck: &DeckRecordRef<'_>, card: CardId, is_sideboard: bool) -> u32 {
        let main_quantity = quantity_in(deck.main_deck, card);
        let zone_quantity = if is_sideboard {
            quantity_in(deck.sideboard, card)
        } else {
            main_quantity
        };
        let needed = zone_quantity.min(self.config.max_copies);

        let mut owned = self.collection.owned(card);
        if let Some(data) = self.db.card(card) {
            if data.is_basic_land() {
                return 0;
            }
            owned = data.reprints.iter().fold(owned, |total, &reprint| {
                total.saturating_add(self.collection.owned(reprint))
            });
        }

        let mut available = owned;
        if is_sideboard {
            available = owned.saturating_sub(main_quantity);
            if owned == self.config.max_copies && self.config.is_unlimited(card) {
                available = self.config.max_copies;
            }
        }

        needed.saturating_sub(available)
    }
}
