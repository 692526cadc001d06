//! Card database lookup seam.
//!
//! Decks never own card data. Everything that needs a name, rarity, set or
//! cost asks a `CardDatabase`, passed in by the caller. Tests hand in a
//! small `CardRegistry`; an application hands in its loaded catalog.

use super::definition::{CardData, CardId, SetInfo};

/// Read-only card and set lookup.
pub trait CardDatabase {
    /// Look up a card by ID. `None` if the catalog doesn't know it.
    fn card(&self, id: CardId) -> Option<&CardData>;

    /// Look up a set by its full name.
    fn set(&self, name: &str) -> Option<&SetInfo>;

    /// Set code to use in client exports.
    ///
    /// Falls back to a code derived from the set name when the set is
    /// unknown or carries no code.
    fn set_code(&self, name: &str) -> String {
        self.set(name)
            .and_then(SetInfo::export_code)
            .map(str::to_string)
            .unwrap_or_else(|| derive_set_code(name))
    }
}

impl<D: CardDatabase + ?Sized> CardDatabase for &D {
    fn card(&self, id: CardId) -> Option<&CardData> {
        (**self).card(id)
    }

    fn set(&self, name: &str) -> Option<&SetInfo> {
        (**self).set(name)
    }
}

/// First three alphanumeric characters of a set name, upper-cased.
#[must_use]
pub fn derive_set_code(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .take(3)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_set_code() {
        assert_eq!(derive_set_code("Core Set 2020"), "COR");
        assert_eq!(derive_set_code("M-20"), "M20");
        assert_eq!(derive_set_code(""), "");
    }
}
