//! Error types.
//!
//! Aggregations (colors, wildcards) never fail: cards missing from the
//! database are skipped. Errors only come out of exports, which need every
//! card to resolve, and out of JSON decoding.

use thiserror::Error;

use crate::cards::CardId;

/// Errors from building, decoding or exporting a deck.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("{0} is not in the card database")]
    UnknownCard(CardId),

    #[error("{0} is a reprint-only printing without a listed reprint")]
    MissingReprint(CardId),

    #[error("invalid deck record: {0}")]
    InvalidRecord(#[from] serde_json::Error),
}

/// Errors from building or loading a card catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{0} is already registered")]
    DuplicateCard(CardId),

    #[error("invalid catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
