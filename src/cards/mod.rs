//! Card system: catalog data, lookup, and deck zone lists.
//!
//! ## Key Types
//!
//! - `CardId`: Catalog identifier of a printing
//! - `CardData`: Static catalog data (name, set, rarity, cost, frame)
//! - `CardDatabase`: Read-only lookup trait, injected wherever card data is needed
//! - `CardRegistry`: In-memory `CardDatabase`
//! - `CardEntry`: A card and its quantity in a zone
//! - `CardsList`: Ordered entries making up one zone

pub mod database;
pub mod definition;
pub mod entry;
pub mod list;
pub mod registry;
pub mod sort;

pub use database::{derive_set_code, CardDatabase};
pub use definition::{CardData, CardId, SetInfo};
pub use entry::CardEntry;
pub use list::{AnyCardsList, CardsList};
pub use registry::CardRegistry;
pub use sort::{compare_cards, display_order, type_rank};
