//! Deck model: record shapes, the `Deck` value object and its exports.
//!
//! ## Key Types
//!
//! - `DeckSource`: Tagged union of the accepted input shapes
//! - `DeckRecord` / `DeckRecordRef`: Persisted shape, owned or borrowed
//! - `Deck`: Mainboard, sideboard and metadata with derived queries

pub mod export;
pub mod model;
pub mod record;

pub use model::Deck;
pub use record::{ArenaDeck, DeckKind, DeckRecord, DeckRecordRef, DeckSource, PartialDeck};
