//! Card lists - one zone of a deck.
//!
//! A `CardsList` is an ordered multiset of `CardEntry`. The same card may
//! appear in several entries (the client does this when a deck is edited);
//! `remove_duplicates` folds them into one entry per card on demand.
//!
//! The game client sends lists in two shapes, both accepted on decode:
//! - entry objects: `[{"id": 1, "quantity": 4}, ...]`
//! - flat pairs: `[1, 4, 2, 3, ...]`

use std::cmp::Ordering;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::database::CardDatabase;
use super::definition::CardId;
use super::entry::CardEntry;
use super::sort::compare_cards;
use crate::core::Colors;

/// Either wire shape of a card list.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum AnyCardsList {
    Entries(Vec<CardEntry>),
    Flat(Vec<u32>),
}

impl From<AnyCardsList> for CardsList {
    fn from(list: AnyCardsList) -> Self {
        match list {
            AnyCardsList::Entries(entries) => Self::new(entries),
            AnyCardsList::Flat(flat) => Self::from_flat(&flat),
        }
    }
}

/// Ordered list of card entries for one zone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AnyCardsList", into = "Vec<CardEntry>")]
pub struct CardsList {
    list: Vec<CardEntry>,
}

impl From<CardsList> for Vec<CardEntry> {
    fn from(list: CardsList) -> Self {
        list.list
    }
}

impl From<Vec<CardEntry>> for CardsList {
    fn from(list: Vec<CardEntry>) -> Self {
        Self::new(list)
    }
}

impl FromIterator<CardEntry> for CardsList {
    fn from_iter<T: IntoIterator<Item = CardEntry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl CardsList {
    /// Create a list from entries, keeping their order.
    #[must_use]
    pub fn new(list: Vec<CardEntry>) -> Self {
        Self { list }
    }

    /// Create a list from the client's flat `[id, qty, id, qty, ...]` form.
    ///
    /// Pairs with a zero quantity are dropped; a trailing unpaired id is
    /// ignored.
    #[must_use]
    pub fn from_flat(flat: &[u32]) -> Self {
        flat.chunks_exact(2)
            .filter(|pair| pair[1] > 0)
            .map(|pair| CardEntry::new(CardId::new(pair[0]), pair[1]))
            .collect()
    }

    /// Entries in list order.
    #[must_use]
    pub fn get(&self) -> &[CardEntry] {
        &self.list
    }

    /// Number of entries (not copies).
    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Total number of copies across all entries, saturating at `u32::MAX`.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.list
            .iter()
            .fold(0_u32, |total, c| total.saturating_add(c.quantity))
    }

    /// Append an entry.
    ///
    /// Does not merge with an existing entry for the same card.
    pub fn add(&mut self, id: CardId, quantity: u32) {
        self.list.push(CardEntry::new(id, quantity));
    }

    /// Remove up to `quantity` copies of a card, taking from entries in
    /// list order. Entries left empty are dropped.
    ///
    /// Returns how many copies were actually removed.
    pub fn remove(&mut self, id: CardId, quantity: u32) -> u32 {
        let mut removed = 0;
        for entry in self.list.iter_mut().filter(|c| c.id == id) {
            let take = entry.quantity.min(quantity - removed);
            entry.quantity -= take;
            removed += take;
            if removed == quantity {
                break;
            }
        }
        self.list.retain(|c| c.id != id || c.quantity > 0);
        removed
    }

    /// Entries folded to one per card, summing quantities, in order of
    /// first occurrence. The list itself is left untouched.
    ///
    /// Quantities are only summed into measurable entries; an unmeasured
    /// first occurrence stays as it is.
    #[must_use]
    pub fn remove_duplicates(&self) -> Vec<CardEntry> {
        let mut merged: Vec<CardEntry> = Vec::with_capacity(self.list.len());
        let mut index: FxHashMap<CardId, usize> = FxHashMap::default();

        for card in &self.list {
            match index.get(&card.id) {
                Some(&i) => {
                    if merged[i].measurable {
                        merged[i].quantity = merged[i].quantity.saturating_add(card.quantity);
                    }
                }
                None => {
                    index.insert(card.id, merged.len());
                    merged.push(*card);
                }
            }
        }

        merged
    }

    /// Replace the list with its deduplicated form.
    pub fn collapse_duplicates(&mut self) {
        self.list = self.remove_duplicates();
    }

    /// Reorder the entries in place. The sort is stable.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&CardEntry, &CardEntry) -> Ordering,
    {
        self.list.sort_by(compare);
    }

    /// Reorder the entries in place by `compare_cards`.
    pub fn sort_canonical(&mut self) {
        self.sort_by(compare_cards);
    }

    /// Color identity of the cards in this list.
    ///
    /// Every card contributes its mana cost. Lands with fewer than three
    /// frame colors contribute their frame as well. Cards the database
    /// doesn't know are skipped.
    #[must_use]
    pub fn get_colors<D: CardDatabase + ?Sized>(&self, db: &D) -> Colors {
        let mut colors = Colors::new();
        let mut seen: FxHashSet<CardId> = FxHashSet::default();

        for entry in &self.list {
            if !seen.insert(entry.id) {
                continue;
            }
            let Some(card) = db.card(entry.id) else {
                tracing::trace!(card = %entry.id, "skipping unknown card in color lookup");
                continue;
            };
            if card.is_land() && card.frame.len() < 3 {
                colors.add_from_frame(&card.frame);
            }
            colors.add_from_cost(&card.cost);
        }

        colors
    }

    /// Copies whose type line contains `type_name`.
    #[must_use]
    pub fn count_type<D: CardDatabase + ?Sized>(&self, db: &D, type_name: &str) -> u32 {
        self.list
            .iter()
            .filter(|entry| {
                db.card(entry.id)
                    .is_some_and(|card| card.type_line.contains(type_name))
            })
            .fold(0_u32, |total, entry| total.saturating_add(entry.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardData, CardRegistry};
    use crate::core::Color;

    fn entries(pairs: &[(u32, u32)]) -> CardsList {
        pairs
            .iter()
            .map(|&(id, q)| CardEntry::new(CardId::new(id), q))
            .collect()
    }

    fn registry() -> CardRegistry {
        let mut db = CardRegistry::new();
        db.register(
            CardData::new(CardId::new(1), "Shock", "S", "1")
                .with_type("Instant")
                .with_cost(["r"]),
        )
        .unwrap();
        db.register(
            CardData::new(CardId::new(2), "Temple", "S", "2")
                .with_type("Land")
                .with_frame([Color::White, Color::Blue]),
        )
        .unwrap();
        db.register(
            CardData::new(CardId::new(3), "Tri Land", "S", "3")
                .with_type("Land")
                .with_frame([Color::Black, Color::Red, Color::Green]),
        )
        .unwrap();
        db
    }

    #[test]
    fn test_remove_duplicates_sums_in_first_order() {
        let list = entries(&[(1, 2), (2, 1), (1, 3)]);
        let merged = list.remove_duplicates();

        assert_eq!(
            merged,
            vec![
                CardEntry::new(CardId::new(1), 5),
                CardEntry::new(CardId::new(2), 1)
            ]
        );
        // Original untouched
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_huge_quantities_saturate() {
        let list = CardsList::from_flat(&[1, u32::MAX, 1, 1, 2, 3]);
        assert_eq!(list.count(), u32::MAX);
        assert_eq!(list.count_type(&registry(), "Instant"), u32::MAX);
        assert_eq!(
            list.remove_duplicates(),
            vec![
                CardEntry::new(CardId::new(1), u32::MAX),
                CardEntry::new(CardId::new(2), 3)
            ]
        );
    }

    #[test]
    fn test_remove_duplicates_unmeasured() {
        let list = CardsList::new(vec![
            CardEntry::unmeasured(CardId::new(9)),
            CardEntry::new(CardId::new(9), 3),
        ]);
        let merged = list.remove_duplicates();
        assert_eq!(merged, vec![CardEntry::unmeasured(CardId::new(9))]);
    }

    #[test]
    fn test_collapse_duplicates() {
        let mut list = entries(&[(4, 1), (4, 1), (4, 2)]);
        list.collapse_duplicates();
        assert_eq!(list.get(), &[CardEntry::new(CardId::new(4), 4)]);
    }

    #[test]
    fn test_from_flat() {
        let list = CardsList::from_flat(&[10, 4, 11, 0, 12, 2, 13]);
        assert_eq!(
            list.get(),
            &[
                CardEntry::new(CardId::new(10), 4),
                CardEntry::new(CardId::new(12), 2)
            ]
        );
    }

    #[test]
    fn test_decode_both_shapes() {
        let a: CardsList = serde_json::from_str(r#"[{"id": 1, "quantity": 2}]"#).unwrap();
        let b: CardsList = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(a, b);

        let empty: CardsList = serde_json::from_str("[]").unwrap();
        assert!(empty.is_empty());

        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, r#"[{"id":1,"quantity":2,"measurable":true}]"#);
    }

    #[test]
    fn test_add_remove_count() {
        let mut list = entries(&[(1, 2), (2, 1), (1, 2)]);
        list.add(CardId::new(3), 4);
        assert_eq!(list.count(), 9);

        assert_eq!(list.remove(CardId::new(1), 3), 3);
        assert_eq!(list.get(), &[
            CardEntry::new(CardId::new(2), 1),
            CardEntry::new(CardId::new(1), 1),
            CardEntry::new(CardId::new(3), 4),
        ]);

        // Asking for more than exists removes what is there
        assert_eq!(list.remove(CardId::new(2), 5), 1);
        assert_eq!(list.count(), 5);
        assert_eq!(list.remove(CardId::new(99), 1), 0);
    }

    #[test]
    fn test_sort_in_place() {
        let mut list = entries(&[(3, 1), (1, 4), (2, 2)]);
        list.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        let ids: Vec<u32> = list.get().iter().map(|c| c.id.raw()).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        list.sort_canonical();
        let ids: Vec<u32> = list.get().iter().map(|c| c.id.raw()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_colors_from_cost_and_land_frame() {
        let db = registry();
        let colors = entries(&[(1, 4), (2, 4), (99, 1)]).get_colors(&db);
        assert_eq!(
            colors.get().as_slice(),
            &[Color::White, Color::Blue, Color::Red]
        );
    }

    #[test]
    fn test_tri_land_frame_ignored() {
        let db = registry();
        let colors = entries(&[(3, 1)]).get_colors(&db);
        assert!(colors.is_colorless());
    }

    #[test]
    fn test_colors_ignore_order() {
        let db = registry();
        let a = entries(&[(1, 1), (2, 1)]).get_colors(&db);
        let b = entries(&[(2, 1), (1, 1), (1, 3)]).get_colors(&db);
        assert_eq!(a, b);
    }

    #[test]
    fn test_count_type() {
        let db = registry();
        let list = entries(&[(1, 4), (2, 3), (3, 2), (99, 1)]);
        assert_eq!(list.count_type(&db, "Land"), 5);
        assert_eq!(list.count_type(&db, "Instant"), 4);
    }
}
