//! # arena-decks
//!
//! Constructed deck model for a card game companion application.
//!
//! ## Design Principles
//!
//! 1. **Derived, Not Stored**: Colors, wildcard cost and fingerprints are
//!    computed from the card lists. Only the lists and metadata are state.
//!
//! 2. **Injected Catalog**: Card data comes from a `CardDatabase` passed to
//!    each call that needs it. Nothing reads a global catalog.
//!
//! 3. **Explicit Input Shapes**: Persisted records, partial records and the
//!    game client's own deck shape are variants of `DeckSource`, told apart
//!    by one predicate.
//!
//! ## Modules
//!
//! - `core`: Colors, rarities, configuration, errors
//! - `cards`: Catalog data, lookup, card entries and zone lists
//! - `deck`: Record shapes, the `Deck` value object, exports
//! - `economy`: Collections, wildcard shortfall, booster estimates

pub mod cards;
pub mod core;
pub mod deck;
pub mod economy;

// Re-export commonly used types
pub use crate::core::{
    BoosterRates, CatalogError, Color, Colors, DeckError, EconomyConfig, ExportConfig, Rarity,
    RarityCounts, DEFAULT_TILE,
};

pub use crate::cards::{
    compare_cards, CardData, CardDatabase, CardEntry, CardId, CardRegistry, CardsList, SetInfo,
};

pub use crate::deck::{ArenaDeck, Deck, DeckRecord, DeckRecordRef, DeckSource, PartialDeck};

pub use crate::economy::{Collection, WildcardCost, WildcardCounter, Wildcards};
