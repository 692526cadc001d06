//! Card entries - one line of a deck zone.

use serde::{Deserialize, Serialize};

use super::definition::CardId;

fn measurable_default() -> bool {
    true
}

/// A card and how many copies of it a zone holds.
///
/// Entries with `measurable: false` have no meaningful count (the client
/// uses this for some basic lands in limited formats) and are exported as
/// a single copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardEntry {
    pub id: CardId,
    pub quantity: u32,
    #[serde(default = "measurable_default")]
    pub measurable: bool,
}

impl CardEntry {
    /// Create a measurable entry.
    #[must_use]
    pub const fn new(id: CardId, quantity: u32) -> Self {
        Self {
            id,
            quantity,
            measurable: true,
        }
    }

    /// Create an entry whose quantity is not measurable.
    #[must_use]
    pub const fn unmeasured(id: CardId) -> Self {
        Self {
            id,
            quantity: 1,
            measurable: false,
        }
    }

    /// Quantity shown in text exports.
    #[must_use]
    pub const fn display_quantity(&self) -> u32 {
        if self.measurable {
            self.quantity
        } else {
            1
        }
    }
}
