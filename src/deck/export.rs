//! Text exports.
//!
//! Both formats list the deduplicated mainboard, a blank line, then the
//! deduplicated sideboard, with CRLF line endings:
//! - plain text: `4 Shock\r\n`
//! - game client: `4 Shock (DAR) 144 \r\n` (note the trailing space)
//!
//! Every card must resolve in the database; a miss fails the export.

use super::model::Deck;
use crate::cards::{CardData, CardDatabase, CardEntry, CardsList};
use crate::core::{DeckError, ExportConfig};

const LINE_END: &str = "\r\n";

fn lookup<'a, D: CardDatabase + ?Sized>(
    db: &'a D,
    entry: &CardEntry,
) -> Result<&'a CardData, DeckError> {
    db.card(entry.id).ok_or(DeckError::UnknownCard(entry.id))
}

fn write_zones<F>(main: &CardsList, side: &CardsList, mut line: F) -> Result<String, DeckError>
where
    F: FnMut(&CardEntry) -> Result<String, DeckError>,
{
    let mut out = String::new();
    for card in main.remove_duplicates() {
        out.push_str(&line(&card)?);
    }
    out.push_str(LINE_END);
    for card in side.remove_duplicates() {
        out.push_str(&line(&card)?);
    }
    Ok(out)
}

impl Deck {
    /// Plain text list: `<qty> <name>` per card.
    pub fn export_txt<D: CardDatabase + ?Sized>(&self, db: &D) -> Result<String, DeckError> {
        write_zones(self.mainboard(), self.sideboard(), |card| {
            let data = lookup(db, card)?;
            Ok(format!("{} {}{LINE_END}", card.display_quantity(), data.name))
        })
    }

    /// Game client import list with the default `ExportConfig`.
    pub fn export_arena<D: CardDatabase + ?Sized>(&self, db: &D) -> Result<String, DeckError> {
        self.export_arena_with(db, &ExportConfig::default())
    }

    /// Game client import list: `<qty> <name> (<set code>) <collector number> `
    /// per card.
    ///
    /// Printings from reprint-only sets are swapped for their first listed
    /// reprint, since the client can't import them.
    pub fn export_arena_with<D: CardDatabase + ?Sized>(
        &self,
        db: &D,
        config: &ExportConfig,
    ) -> Result<String, DeckError> {
        write_zones(self.mainboard(), self.sideboard(), |card| {
            let mut data = lookup(db, card)?;
            if config.is_reprint_only(&data.set) {
                let reprint = *data
                    .reprints
                    .first()
                    .ok_or(DeckError::MissingReprint(card.id))?;
                data = db.card(reprint).ok_or(DeckError::UnknownCard(reprint))?;
            }

            Ok(format!(
                "{} {} ({}) {} {LINE_END}",
                card.display_quantity(),
                data.name,
                db.set_code(&data.set),
                data.collector_number
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, CardRegistry, SetInfo};
    use crate::deck::PartialDeck;

    fn registry() -> CardRegistry {
        let mut db = CardRegistry::new();
        db.register(CardData::new(CardId::new(1), "Shock", "Dominaria", "144"))
            .unwrap();
        db.register(
            CardData::new(CardId::new(2), "Sorin", "Mythic Edition", "7")
                .with_reprints([CardId::new(3)]),
        )
        .unwrap();
        db.register(CardData::new(CardId::new(3), "Sorin", "War of the Spark", "217"))
            .unwrap();
        db.register(CardData::new(CardId::new(4), "Lonely", "Mythic Edition", "9"))
            .unwrap();
        db.register_set("Dominaria", SetInfo::new("dom").with_arena_code("DAR"));
        db.register_set("War of the Spark", SetInfo::new("war"));
        db
    }

    fn deck(main: &[(u32, u32)], side: &[(u32, u32)], db: &CardRegistry) -> Deck {
        let list = |pairs: &[(u32, u32)]| -> CardsList {
            pairs
                .iter()
                .map(|&(id, q)| CardEntry::new(CardId::new(id), q))
                .collect()
        };
        Deck::with_cards(PartialDeck::default(), list(main), list(side), db)
    }

    #[test]
    fn test_txt_dedups_each_zone() {
        let db = registry();
        let deck = deck(&[(1, 2), (1, 2)], &[(3, 1)], &db);
        assert_eq!(deck.export_txt(&db).unwrap(), "4 Shock\r\n\r\n1 Sorin\r\n");
    }

    #[test]
    fn test_arena_swaps_reprint_only_sets() {
        let db = registry();
        let deck = deck(&[(1, 4), (2, 1)], &[], &db);
        assert_eq!(
            deck.export_arena(&db).unwrap(),
            "4 Shock (DAR) 144 \r\n1 Sorin (war) 217 \r\n\r\n"
        );
    }

    #[test]
    fn test_arena_missing_reprint() {
        let db = registry();
        let deck = deck(&[(4, 1)], &[], &db);
        assert!(matches!(
            deck.export_arena(&db),
            Err(DeckError::MissingReprint(id)) if id == CardId::new(4)
        ));

        // Without the reprint rule the printing exports as is
        let config = ExportConfig {
            reprint_only_sets: Vec::new(),
        };
        assert_eq!(
            deck.export_arena_with(&db, &config).unwrap(),
            "1 Lonely (MYT) 9 \r\n\r\n"
        );
    }

    #[test]
    fn test_unknown_card_fails_export() {
        let db = registry();
        let deck = deck(&[(1, 1)], &[(50, 1)], &db);
        assert!(matches!(
            deck.export_txt(&db),
            Err(DeckError::UnknownCard(id)) if id == CardId::new(50)
        ));
    }
}
