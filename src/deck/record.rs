//! Deck record shapes.
//!
//! A deck reaches the model in one of three shapes:
//! - `DeckRecord`: the persisted shape this crate writes, tagged
//!   `"type": "InternalDeck"` and carrying every field
//! - `PartialDeck`: any subset of the persisted fields, defaults fill the gaps
//! - `ArenaDeck`: the game client's own deck shape, which has no `type`
//!   marker and none of the internal-only fields (`custom`, `archetype`,
//!   `tags`)
//!
//! `DeckSource` is the tagged union of the three. Decks are written back
//! out as a `DeckRecord`, or borrowed as a `DeckRecordRef`.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardsList};
use crate::core::{Color, ColorList, DeckError};

/// Discriminator of internal records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckKind {
    #[default]
    InternalDeck,
}

/// Persisted deck record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckRecord {
    pub main_deck: CardsList,
    pub sideboard: CardsList,
    pub name: String,
    pub id: String,
    /// ISO-8601 timestamp.
    pub last_updated: String,
    pub deck_tile_id: u32,
    pub colors: Vec<Color>,
    pub tags: Vec<String>,
    pub custom: bool,
    /// Commander id, related id, commander id, related id, ...
    #[serde(rename = "commandZoneGRPIds")]
    pub command_zone_grp_ids: Vec<CardId>,
    pub format: String,
    #[serde(rename = "type")]
    pub kind: DeckKind,
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub archetype: String,
}

/// Borrowed view of a deck in persisted shape.
///
/// Card lists and metadata point into the live deck. Serializes exactly
/// like `DeckRecord`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckRecordRef<'a> {
    pub main_deck: &'a CardsList,
    pub sideboard: &'a CardsList,
    pub name: &'a str,
    pub id: &'a str,
    pub last_updated: String,
    pub deck_tile_id: u32,
    pub colors: ColorList,
    pub tags: &'a [String],
    pub custom: bool,
    #[serde(rename = "commandZoneGRPIds")]
    pub command_zone_grp_ids: &'a [CardId],
    pub format: &'a str,
    #[serde(rename = "type")]
    pub kind: DeckKind,
    pub description: &'a str,
    #[serde(skip_serializing_if = "is_blank")]
    pub archetype: &'a str,
}

fn is_blank(s: &&str) -> bool {
    s.is_empty()
}

impl DeckRecordRef<'_> {
    /// Deep copy into an owned record.
    #[must_use]
    pub fn into_owned(self) -> DeckRecord {
        DeckRecord {
            main_deck: self.main_deck.clone(),
            sideboard: self.sideboard.clone(),
            name: self.name.to_string(),
            id: self.id.to_string(),
            last_updated: self.last_updated,
            deck_tile_id: self.deck_tile_id,
            colors: self.colors.into_vec(),
            tags: self.tags.to_vec(),
            custom: self.custom,
            command_zone_grp_ids: self.command_zone_grp_ids.to_vec(),
            format: self.format.to_string(),
            kind: self.kind,
            description: self.description.to_string(),
            archetype: self.archetype.to_string(),
        }
    }
}

/// Deck record with every field optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialDeck {
    pub main_deck: Option<CardsList>,
    pub sideboard: Option<CardsList>,
    pub name: Option<String>,
    pub id: Option<String>,
    pub last_updated: Option<String>,
    pub deck_tile_id: Option<u32>,
    pub tags: Option<Vec<String>>,
    pub custom: Option<bool>,
    pub archetype: Option<String>,
    #[serde(rename = "commandZoneGRPIds")]
    pub command_zone_grp_ids: Option<Vec<CardId>>,
    pub format: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<DeckKind>,
    pub description: Option<String>,
}

impl PartialDeck {
    /// Record a deck starts from when nothing is given: empty zones, no
    /// name, no tile, empty format, stamped with `last_updated`.
    #[must_use]
    pub fn blank(last_updated: impl Into<String>) -> Self {
        Self {
            main_deck: Some(CardsList::default()),
            sideboard: Some(CardsList::default()),
            name: Some(String::new()),
            last_updated: Some(last_updated.into()),
            deck_tile_id: Some(0),
            command_zone_grp_ids: Some(Vec::new()),
            format: Some(String::new()),
            kind: Some(DeckKind::InternalDeck),
            ..Self::default()
        }
    }
}

impl From<DeckRecord> for PartialDeck {
    fn from(record: DeckRecord) -> Self {
        Self {
            main_deck: Some(record.main_deck),
            sideboard: Some(record.sideboard),
            name: Some(record.name),
            id: Some(record.id),
            last_updated: Some(record.last_updated),
            deck_tile_id: Some(record.deck_tile_id),
            tags: Some(record.tags),
            custom: Some(record.custom),
            archetype: Some(record.archetype),
            command_zone_grp_ids: Some(record.command_zone_grp_ids),
            format: Some(record.format),
            kind: Some(record.kind),
            description: Some(record.description),
        }
    }
}

/// Deck as the game client describes it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArenaDeck {
    pub main_deck: Option<CardsList>,
    pub sideboard: Option<CardsList>,
    pub name: Option<String>,
    pub id: Option<String>,
    pub last_updated: Option<String>,
    pub deck_tile_id: Option<u32>,
    #[serde(rename = "commandZoneGRPIds")]
    pub command_zone_grp_ids: Option<Vec<CardId>>,
    pub format: Option<String>,
    pub description: Option<String>,
}

impl From<ArenaDeck> for PartialDeck {
    fn from(deck: ArenaDeck) -> Self {
        Self {
            main_deck: deck.main_deck,
            sideboard: deck.sideboard,
            name: deck.name,
            id: deck.id,
            last_updated: deck.last_updated,
            deck_tile_id: deck.deck_tile_id,
            command_zone_grp_ids: deck.command_zone_grp_ids,
            format: deck.format,
            description: deck.description,
            ..Self::default()
        }
    }
}

/// Any accepted input shape.
#[derive(Clone, Debug, PartialEq)]
pub enum DeckSource {
    Internal(DeckRecord),
    Partial(PartialDeck),
    Arena(ArenaDeck),
}

impl DeckSource {
    /// Classify a JSON record.
    ///
    /// A record with the `InternalDeck` marker is `Internal` when every
    /// persisted field is present and `Partial` otherwise. A record without
    /// the marker is the client's `Arena` shape.
    pub fn from_json(json: &str) -> Result<Self, DeckError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Classify an already parsed JSON value. See `from_json`.
    pub fn from_value(value: serde_json::Value) -> Result<Self, DeckError> {
        let marked = value.get("type").and_then(serde_json::Value::as_str) == Some("InternalDeck");
        if !marked {
            return Ok(Self::Arena(serde_json::from_value(value)?));
        }

        match serde_json::from_value::<DeckRecord>(value.clone()) {
            Ok(record) => Ok(Self::Internal(record)),
            Err(_) => Ok(Self::Partial(serde_json::from_value(value)?)),
        }
    }

    /// True for records this crate wrote: the internal-only fields
    /// (`custom`, `archetype`) are honoured only for these.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        match self {
            Self::Internal(_) => true,
            Self::Partial(partial) => partial.kind.is_some(),
            Self::Arena(_) => false,
        }
    }

    /// Flatten into optional fields.
    #[must_use]
    pub fn into_partial(self) -> PartialDeck {
        match self {
            Self::Internal(record) => record.into(),
            Self::Partial(partial) => partial,
            Self::Arena(deck) => deck.into(),
        }
    }
}

impl From<DeckRecord> for DeckSource {
    fn from(record: DeckRecord) -> Self {
        Self::Internal(record)
    }
}

impl From<PartialDeck> for DeckSource {
    fn from(partial: PartialDeck) -> Self {
        Self::Partial(partial)
    }
}

impl From<ArenaDeck> for DeckSource {
    fn from(deck: ArenaDeck) -> Self {
        Self::Arena(deck)
    }
}
