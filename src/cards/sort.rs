//! Card entry orderings.

use std::cmp::Ordering;

use super::database::CardDatabase;
use super::definition::CardData;
use super::entry::CardEntry;

/// Canonical total order: by card id, then quantity, then measurability.
///
/// Two lists with the same multiset of entries sort to the same sequence,
/// which is what deck fingerprints rely on.
#[must_use]
pub fn compare_cards(a: &CardEntry, b: &CardEntry) -> Ordering {
    a.id.cmp(&b.id)
        .then(a.quantity.cmp(&b.quantity))
        .then(a.measurable.cmp(&b.measurable))
}

/// Rank of a type line in deck list display order.
///
/// Creatures first, lands last, unrecognized types ahead of everything.
#[must_use]
pub fn type_rank(type_line: &str) -> u8 {
    const ORDER: [&str; 7] = [
        "Creature",
        "Planeswalker",
        "Instant",
        "Sorcery",
        "Artifact",
        "Enchantment",
        "Land",
    ];
    ORDER
        .iter()
        .position(|t| type_line.contains(t))
        .map_or(0, |i| i as u8 + 1)
}

fn compare_data(a: &CardData, b: &CardData) -> Ordering {
    type_rank(&a.type_line)
        .cmp(&type_rank(&b.type_line))
        .then(a.cmc.cmp(&b.cmc))
        .then_with(|| a.name.cmp(&b.name))
}

/// Display order comparator: type, then mana value, then name.
///
/// Cards the database doesn't know sort before known ones.
pub fn display_order<D: CardDatabase + ?Sized>(
    db: &D,
) -> impl Fn(&CardEntry, &CardEntry) -> Ordering + '_ {
    move |a: &CardEntry, b: &CardEntry| match (db.card(a.id), db.card(b.id)) {
        (Some(x), Some(y)) => compare_data(x, y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => compare_cards(a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardData, CardId, CardRegistry, CardsList};

    #[test]
    fn test_compare_cards_total() {
        let a = CardEntry::new(CardId::new(1), 4);
        let b = CardEntry::new(CardId::new(1), 2);
        let c = CardEntry::new(CardId::new(0), 9);

        assert_eq!(compare_cards(&a, &b), Ordering::Greater);
        assert_eq!(compare_cards(&c, &a), Ordering::Less);
        assert_eq!(compare_cards(&a, &a), Ordering::Equal);

        let mut unmeasured = a;
        unmeasured.measurable = false;
        assert_eq!(compare_cards(&unmeasured, &a), Ordering::Less);
    }

    #[test]
    fn test_type_rank() {
        assert_eq!(type_rank("Legendary Creature - Elf"), 1);
        assert_eq!(type_rank("Legendary Planeswalker - Karn"), 2);
        assert_eq!(type_rank("Basic Land - Island"), 7);
        assert_eq!(type_rank("Artifact Creature - Golem"), 1);
        assert_eq!(type_rank("Conspiracy"), 0);
    }

    #[test]
    fn test_display_order() {
        let mut db = CardRegistry::new();
        db.register(CardData::new(CardId::new(1), "Island", "S", "1").with_type("Basic Land - Island"))
            .unwrap();
        db.register(
            CardData::new(CardId::new(2), "Opt", "S", "2")
                .with_type("Instant")
                .with_cost(["u"]),
        )
        .unwrap();
        db.register(
            CardData::new(CardId::new(3), "Merfolk", "S", "3")
                .with_type("Creature - Merfolk")
                .with_cost(["1", "u"]),
        )
        .unwrap();
        db.register(
            CardData::new(CardId::new(4), "Drake", "S", "4")
                .with_type("Creature - Drake")
                .with_cost(["1", "u"]),
        )
        .unwrap();

        let mut list: CardsList = [1, 2, 3, 4]
            .into_iter()
            .map(|id| CardEntry::new(CardId::new(id), 1))
            .collect();
        list.sort_by(display_order(&db));

        let names: Vec<&str> = list
            .get()
            .iter()
            .map(|c| db.card(c.id).unwrap().name.as_str())
            .collect();
        assert_eq!(names, vec!["Drake", "Merfolk", "Opt", "Island"]);
    }
}
