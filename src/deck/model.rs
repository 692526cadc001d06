//! The constructed deck.
//!
//! `Deck` owns a mainboard and a sideboard `CardsList` plus metadata.
//! Everything else (colors, wildcard shortfall, exports, fingerprint) is
//! derived from those on request.
//!
//! ## Colors cache
//!
//! Color identity is computed at construction (mainboard only) and cached.
//! `get_colors` recomputes it for a chosen set of zones and remembers that
//! choice; any change to a zone's contents recomputes the cache with the
//! remembered choice, so `colors()` never lags behind the cards.
//!
//! ## Sharing
//!
//! `Clone` is a full deep copy. Hand other contexts a clone, never the live
//! deck.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use super::record::{DeckKind, DeckRecord, DeckRecordRef, DeckSource, PartialDeck};
use crate::cards::{CardDatabase, CardEntry, CardId, CardsList};
use crate::core::{Colors, DeckError, RarityCounts, DEFAULT_TILE};
use crate::economy::WildcardCounter;

/// Which zones the cached colors were computed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ColorScope {
    mainboard: bool,
    sideboard: bool,
}

impl Default for ColorScope {
    fn default() -> Self {
        Self {
            mainboard: true,
            sideboard: false,
        }
    }
}

/// A constructed deck.
///
/// ## Example
///
/// ```
/// use arena_decks::cards::{CardData, CardEntry, CardId, CardRegistry, CardsList};
/// use arena_decks::deck::{ArenaDeck, Deck};
///
/// let mut db = CardRegistry::new();
/// db.register(CardData::new(CardId::new(1), "Shock", "Dominaria", "144").with_cost(["r"]))
///     .unwrap();
///
/// let client_deck = ArenaDeck {
///     name: Some("Burn".to_string()),
///     main_deck: Some(CardsList::new(vec![CardEntry::new(CardId::new(1), 4)])),
///     ..ArenaDeck::default()
/// };
/// let deck = Deck::new(client_deck, &db);
///
/// assert_eq!(deck.name(), "Burn");
/// assert_eq!(deck.tags, vec!["unknown".to_string()]);
/// assert_eq!(deck.export_txt(&db).unwrap(), "4 Shock\r\n\r\n");
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    mainboard: CardsList,
    sideboard: CardsList,
    command_zone: Vec<CardId>,
    name: String,
    colors: Colors,
    color_scope: ColorScope,

    /// Empty for decks that were never saved.
    pub id: String,
    pub last_updated: DateTime<Utc>,
    /// Display art card id.
    pub tile: u32,
    pub tags: Vec<String>,
    /// True for decks built in this application rather than the client.
    pub custom: bool,
    pub archetype: String,
    pub format: String,
    pub description: String,
}

impl Default for Deck {
    fn default() -> Self {
        let parts = PartialDeck::blank(format_timestamp(&Utc::now()));
        Self::from_parts(parts, true, CardsList::default(), CardsList::default())
    }
}

impl Deck {
    /// Build a deck from any accepted record shape.
    pub fn new<D: CardDatabase + ?Sized>(source: impl Into<DeckSource>, db: &D) -> Self {
        Self::with_cards(source, CardsList::default(), CardsList::default(), db)
    }

    /// Build a deck, replacing the record's card lists with `main` and
    /// `side` when those are non-empty.
    pub fn with_cards<D: CardDatabase + ?Sized>(
        source: impl Into<DeckSource>,
        main: CardsList,
        side: CardsList,
        db: &D,
    ) -> Self {
        let source = source.into();
        let internal = source.is_internal();
        let mut deck = Self::from_parts(source.into_partial(), internal, main, side);
        deck.refresh_colors(db);

        tracing::debug!(
            id = %deck.id,
            internal,
            mainboard = deck.mainboard.count(),
            sideboard = deck.sideboard.count(),
            "built deck"
        );
        deck
    }

    /// Decode a JSON record of any accepted shape and build a deck.
    pub fn from_json<D: CardDatabase + ?Sized>(json: &str, db: &D) -> Result<Self, DeckError> {
        Ok(Self::new(DeckSource::from_json(json)?, db))
    }

    fn from_parts(parts: PartialDeck, internal: bool, main: CardsList, side: CardsList) -> Self {
        let mainboard = if main.is_empty() {
            parts.main_deck.unwrap_or_default()
        } else {
            main
        };
        let sideboard = if side.is_empty() {
            parts.sideboard.unwrap_or_default()
        } else {
            side
        };

        let command_zone = parts.command_zone_grp_ids.unwrap_or_default();
        if command_zone.len() % 2 != 0 {
            tracing::warn!(
                len = command_zone.len(),
                "command zone list has odd length"
            );
        }

        // Tags always restart from the format; stored tags are not carried
        // over, for any shape.
        let tags = vec![parts.format.clone().unwrap_or_else(|| "unknown".to_string())];

        let (custom, archetype) = if internal {
            (
                parts.custom.unwrap_or(false),
                parts.archetype.unwrap_or_default(),
            )
        } else {
            (false, String::new())
        };

        Self {
            mainboard,
            sideboard,
            command_zone,
            name: parts.name.unwrap_or_default(),
            colors: Colors::new(),
            color_scope: ColorScope::default(),
            id: parts.id.unwrap_or_default(),
            last_updated: parse_timestamp(parts.last_updated.as_deref()),
            tile: parts.deck_tile_id.filter(|&t| t != 0).unwrap_or(DEFAULT_TILE),
            tags,
            custom,
            archetype,
            format: parts.format.unwrap_or_default(),
            description: parts.description.unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn mainboard(&self) -> &CardsList {
        &self.mainboard
    }

    #[must_use]
    pub fn sideboard(&self) -> &CardsList {
        &self.sideboard
    }

    /// Replace the mainboard. Recomputes the colors cache.
    pub fn set_mainboard<D: CardDatabase + ?Sized>(&mut self, list: CardsList, db: &D) {
        self.mainboard = list;
        self.refresh_colors(db);
    }

    /// Replace the sideboard. Recomputes the colors cache.
    pub fn set_sideboard<D: CardDatabase + ?Sized>(&mut self, list: CardsList, db: &D) {
        self.sideboard = list;
        self.refresh_colors(db);
    }

    /// Modify the mainboard in place, then recompute the colors cache.
    pub fn edit_mainboard<D, F, R>(&mut self, db: &D, edit: F) -> R
    where
        D: CardDatabase + ?Sized,
        F: FnOnce(&mut CardsList) -> R,
    {
        let result = edit(&mut self.mainboard);
        self.refresh_colors(db);
        result
    }

    /// Modify the sideboard in place, then recompute the colors cache.
    pub fn edit_sideboard<D, F, R>(&mut self, db: &D, edit: F) -> R
    where
        D: CardDatabase + ?Sized,
        F: FnOnce(&mut CardsList) -> R,
    {
        let result = edit(&mut self.sideboard);
        self.refresh_colors(db);
        result
    }

    /// Reorder the mainboard in place.
    pub fn sort_mainboard<F>(&mut self, compare: F)
    where
        F: FnMut(&CardEntry, &CardEntry) -> Ordering,
    {
        self.mainboard.sort_by(compare);
    }

    /// Reorder the sideboard in place.
    pub fn sort_sideboard<F>(&mut self, compare: F)
    where
        F: FnMut(&CardEntry, &CardEntry) -> Ordering,
    {
        self.sideboard.sort_by(compare);
    }

    /// Raw command zone list: commander id, related id, ...
    #[must_use]
    pub fn commanders(&self) -> &[CardId] {
        &self.command_zone
    }

    /// Number of commanders, `0.0` if none.
    ///
    /// Half the command zone length, as is. An odd-length list gives a
    /// fractional result, which callers must read as "no valid commander".
    /// `commander_count` does that check.
    #[must_use]
    pub fn has_commander(&self) -> f64 {
        self.command_zone.len() as f64 / 2.0
    }

    /// Number of commanders, `None` if the command zone list has odd length.
    #[must_use]
    pub fn commander_count(&self) -> Option<usize> {
        let len = self.command_zone.len();
        (len % 2 == 0).then_some(len / 2)
    }

    /// Id of the commander at `pos` (first is 0).
    #[must_use]
    pub fn commander_id(&self, pos: usize) -> Option<CardId> {
        pos.checked_mul(2)
            .and_then(|i| self.command_zone.get(i))
            .copied()
    }

    /// Cached colors.
    #[must_use]
    pub fn colors(&self) -> &Colors {
        &self.colors
    }

    /// Recompute colors from the chosen zones and cache the result.
    pub fn get_colors<D: CardDatabase + ?Sized>(
        &mut self,
        db: &D,
        count_mainboard: bool,
        count_sideboard: bool,
    ) -> &Colors {
        self.color_scope = ColorScope {
            mainboard: count_mainboard,
            sideboard: count_sideboard,
        };
        self.refresh_colors(db)
    }

    fn refresh_colors<D: CardDatabase + ?Sized>(&mut self, db: &D) -> &Colors {
        let mut colors = Colors::new();
        if self.color_scope.mainboard {
            colors.add_from_color(&self.mainboard.get_colors(db));
        }
        if self.color_scope.sideboard {
            colors.add_from_color(&self.sideboard.get_colors(db));
        }
        self.colors = colors;
        &self.colors
    }

    /// Wildcards needed to complete the deck, per rarity.
    ///
    /// Each entry of the chosen zones asks `counter` for its shortfall,
    /// given the whole deck, and adds it to the card's rarity bucket.
    /// Cards the database doesn't know add nothing.
    pub fn missing_wildcards<D, W>(
        &self,
        db: &D,
        counter: &W,
        count_mainboard: bool,
        count_sideboard: bool,
    ) -> RarityCounts
    where
        D: CardDatabase + ?Sized,
        W: WildcardCounter + ?Sized,
    {
        let mut missing = RarityCounts::new();
        let snapshot = self.save_raw();

        let zones = [
            (count_mainboard, &self.mainboard, false),
            (count_sideboard, &self.sideboard, true),
        ];
        for (_, list, is_sideboard) in zones.into_iter().filter(|(counted, _, _)| *counted) {
            for entry in list.get() {
                let Some(card) = db.card(entry.id) else {
                    tracing::trace!(card = %entry.id, "skipping unknown card in wildcard count");
                    continue;
                };
                missing.add(
                    card.rarity,
                    counter.missing_count(&snapshot, entry.id, is_sideboard),
                );
            }
        }

        missing
    }

    /// Owned copy of the deck in persisted shape.
    #[must_use]
    pub fn save(&self) -> DeckRecord {
        self.save_raw().into_owned()
    }

    /// The deck in persisted shape, borrowing the live card lists and
    /// metadata.
    #[must_use]
    pub fn save_raw(&self) -> DeckRecordRef<'_> {
        DeckRecordRef {
            main_deck: &self.mainboard,
            sideboard: &self.sideboard,
            name: &self.name,
            id: &self.id,
            last_updated: format_timestamp(&self.last_updated),
            deck_tile_id: self.tile,
            colors: self.colors.get(),
            tags: &self.tags,
            custom: self.custom,
            command_zone_grp_ids: &self.command_zone,
            format: &self.format,
            kind: DeckKind::InternalDeck,
            description: &self.description,
            archetype: &self.archetype,
        }
    }

    /// Fingerprint of the deck's cards: `"id,quantity,"` per entry,
    /// mainboard then (optionally) sideboard.
    ///
    /// Sorts both zones into canonical order first, so decks holding the
    /// same entries give the same string whatever order they were built in.
    pub fn unique_string(&mut self, check_side: bool) -> String {
        self.mainboard.sort_canonical();
        self.sideboard.sort_canonical();

        let mut zones = vec![&self.mainboard];
        if check_side {
            zones.push(&self.sideboard);
        }

        zones
            .into_iter()
            .flat_map(CardsList::get)
            .map(|card| format!("{},{},", card.id.raw(), card.quantity))
            .collect()
    }
}

/// ISO-8601 with milliseconds and a `Z` suffix.
fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a stored timestamp. Missing or empty means "now"; anything
/// unparsable is logged and also becomes "now".
fn parse_timestamp(raw: Option<&str>) -> DateTime<Utc> {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return Utc::now();
    };

    if let Ok(time) = DateTime::parse_from_rfc3339(raw) {
        return time.with_timezone(&Utc);
    }
    if let Some(time) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return time.and_utc();
    }

    tracing::warn!(raw, "unparsable lastUpdated, using current time");
    Utc::now()
}
