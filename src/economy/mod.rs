//! Deck economy: what a deck costs a given collection.
//!
//! ## Key Types
//!
//! - `WildcardCounter`: Per-card shortfall, given the whole deck
//! - `Collection`: Owned cards and wildcards; its `CollectionCounter` is the
//!   stock `WildcardCounter`
//! - `WildcardCost`: Per-rarity shortfall with a booster estimate

pub mod boosters;
pub mod collection;

pub use boosters::{booster_estimate, CostLine, WildcardCost};
pub use collection::{Collection, CollectionCounter, WildcardCounter, Wildcards};
