//! Card catalog data - static card and set properties.
//!
//! `CardData` holds what the catalog knows about one printing: name, set,
//! collector number, rarity, type line, mana cost and frame colors. How
//! many copies a deck runs is stored separately in `CardEntry`.

use serde::{Deserialize, Serialize};

use crate::core::{Color, Rarity};

/// Catalog identifier of a card printing (the client's group id).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static catalog entry for one printing.
///
/// ## Example
///
/// ```
/// use arena_decks::cards::{CardData, CardId};
/// use arena_decks::core::Rarity;
///
/// let bolt = CardData::new(CardId::new(1), "Lightning Bolt", "M11", "149")
///     .with_rarity(Rarity::Common)
///     .with_type("Instant")
///     .with_cost(["r"]);
///
/// assert!(!bolt.is_land());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardData {
    pub id: CardId,

    pub name: String,

    /// Full set name, the key into the set table.
    pub set: String,

    /// Collector number within the set.
    #[serde(rename = "cid")]
    pub collector_number: String,

    pub rarity: Rarity,

    /// Type line, e.g. `"Creature - Elf Druid"` or `"Basic Land - Forest"`.
    #[serde(rename = "type", default)]
    pub type_line: String,

    /// Mana cost symbols, e.g. `["2", "g", "g"]`.
    #[serde(default)]
    pub cost: Vec<String>,

    /// Frame colors.
    #[serde(default)]
    pub frame: Vec<Color>,

    #[serde(default)]
    pub cmc: u32,

    /// Other printings of the same card.
    #[serde(default)]
    pub reprints: Vec<CardId>,
}

impl CardData {
    /// Create a common, colorless card with the given identity.
    #[must_use]
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        set: impl Into<String>,
        collector_number: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            set: set.into(),
            collector_number: collector_number.into(),
            rarity: Rarity::Common,
            type_line: String::new(),
            cost: Vec::new(),
            frame: Vec::new(),
            cmc: 0,
            reprints: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    #[must_use]
    pub fn with_type(mut self, type_line: impl Into<String>) -> Self {
        self.type_line = type_line.into();
        self
    }

    /// Set the mana cost. Also sets `cmc` from the symbols.
    #[must_use]
    pub fn with_cost<S: Into<String>>(mut self, cost: impl IntoIterator<Item = S>) -> Self {
        self.cost = cost.into_iter().map(Into::into).collect();
        self.cmc = self
            .cost
            .iter()
            .map(|s| s.parse::<u32>().unwrap_or(if s.eq_ignore_ascii_case("x") { 0 } else { 1 }))
            .sum();
        self
    }

    #[must_use]
    pub fn with_frame(mut self, frame: impl IntoIterator<Item = Color>) -> Self {
        self.frame = frame.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_reprints(mut self, reprints: impl IntoIterator<Item = CardId>) -> Self {
        self.reprints = reprints.into_iter().collect();
        self
    }

    /// True if the type line names a land.
    #[must_use]
    pub fn is_land(&self) -> bool {
        self.type_line.contains("Land")
    }

    #[must_use]
    pub fn is_basic_land(&self) -> bool {
        self.type_line.contains("Basic Land")
    }
}

/// Set table entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetInfo {
    /// Catalog set code.
    #[serde(default)]
    pub code: String,

    /// Code the game client uses, when it differs from `code`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arenacode: Option<String>,
}

impl SetInfo {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            arenacode: None,
        }
    }

    #[must_use]
    pub fn with_arena_code(mut self, code: impl Into<String>) -> Self {
        self.arenacode = Some(code.into());
        self
    }

    /// Code to write in client exports: the client code if set, else the
    /// catalog code. `None` when both are empty.
    #[must_use]
    pub fn export_code(&self) -> Option<&str> {
        self.arenacode
            .as_deref()
            .filter(|c| !c.is_empty())
            .or_else(|| Some(self.code.as_str()).filter(|c| !c.is_empty()))
    }
}
