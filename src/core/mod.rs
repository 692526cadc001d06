//! Core value types: colors, rarities, configuration, errors.
//!
//! These carry no card data of their own. Cards and decks build on them.

pub mod color;
pub mod config;
pub mod error;
pub mod rarity;

pub use color::{Color, ColorList, Colors};
pub use config::{BoosterRates, EconomyConfig, ExportConfig, DEFAULT_TILE};
pub use error::{CatalogError, DeckError};
pub use rarity::{Rarity, RarityCounts};
