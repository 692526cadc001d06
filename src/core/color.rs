//! Color identity.
//!
//! A deck's colors are derived from the cards in it, never stored as the
//! source of truth. `Colors` counts how many color-producing symbols each
//! of the five colors received; the persisted form is just the list of
//! colors that are present, in WUBRG order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One of the five colors.
///
/// Persisted as its integer code (`1..=5`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Color {
    White = 1,
    Blue = 2,
    Black = 3,
    Red = 4,
    Green = 5,
}

impl Color {
    /// All colors in WUBRG order.
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    /// Lowercase mana symbol letter for this color.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Color::White => 'w',
            Color::Blue => 'u',
            Color::Black => 'b',
            Color::Red => 'r',
            Color::Green => 'g',
        }
    }

    /// Integer code used in persisted records.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    const fn index(self) -> usize {
        self as usize - 1
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> Self {
        color.code()
    }
}

impl TryFrom<u8> for Color {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Color::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| format!("invalid color code {code}"))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol().to_ascii_uppercase())
    }
}

/// Ordered list of present colors. Never longer than five.
pub type ColorList = SmallVec<[Color; 5]>;

/// Accumulated color contributions of a list of cards.
///
/// Counts are kept per color so merging is a plain sum; the resulting
/// identity does not depend on the order cards were added in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Colors {
    counts: [u32; 5],
}

impl Colors {
    /// Create an empty (colorless) value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the colors mentioned by a mana cost.
    ///
    /// Each symbol adds one to every color letter it contains, so a hybrid
    /// symbol like `"w/u"` counts for both white and blue. Generic symbols
    /// (`"3"`, `"x"`) add nothing.
    pub fn add_from_cost<S: AsRef<str>>(&mut self, cost: &[S]) {
        for symbol in cost {
            let symbol = symbol.as_ref().to_ascii_lowercase();
            for color in Color::ALL {
                if symbol.contains(color.symbol()) {
                    self.counts[color.index()] += 1;
                }
            }
        }
    }

    /// Add one to each color of a card frame.
    pub fn add_from_frame(&mut self, frame: &[Color]) {
        for &color in frame {
            self.counts[color.index()] += 1;
        }
    }

    /// Merge another value into this one.
    pub fn add_from_color(&mut self, other: &Colors) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts) {
            *mine += theirs;
        }
    }

    /// Count for a single color.
    #[must_use]
    pub fn count(&self, color: Color) -> u32 {
        self.counts[color.index()]
    }

    /// Check if a color is present.
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.count(color) > 0
    }

    /// Present colors in WUBRG order.
    #[must_use]
    pub fn get(&self) -> ColorList {
        Color::ALL.into_iter().filter(|&c| self.contains(c)).collect()
    }

    /// Number of distinct colors present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.iter().filter(|&&n| n > 0).count()
    }

    /// True if no color is present.
    #[must_use]
    pub fn is_colorless(&self) -> bool {
        self.len() == 0
    }

    /// True if more than one color is present.
    #[must_use]
    pub fn is_multicolor(&self) -> bool {
        self.len() > 1
    }

    /// Compare presence only, ignoring how often each color was seen.
    #[must_use]
    pub fn same_identity(&self, other: &Colors) -> bool {
        Color::ALL
            .into_iter()
            .all(|c| self.contains(c) == other.contains(c))
    }
}

impl FromIterator<Color> for Colors {
    fn from_iter<T: IntoIterator<Item = Color>>(iter: T) -> Self {
        let mut colors = Colors::new();
        for color in iter {
            colors.counts[color.index()] += 1;
        }
        colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_symbols() {
        let mut colors = Colors::new();
        colors.add_from_cost(&["2", "r", "r", "w/u"]);

        assert_eq!(colors.count(Color::Red), 2);
        assert_eq!(colors.count(Color::White), 1);
        assert_eq!(colors.count(Color::Blue), 1);
        assert_eq!(colors.get().as_slice(), &[Color::White, Color::Blue, Color::Red]);
    }

    #[test]
    fn test_generic_cost_is_colorless() {
        let mut colors = Colors::new();
        colors.add_from_cost(&["x", "3"]);
        assert!(colors.is_colorless());
        assert!(!colors.is_multicolor());
    }

    #[test]
    fn test_merge_is_order_independent() {
        let red: Colors = [Color::Red].into_iter().collect();
        let green: Colors = [Color::Green, Color::Green].into_iter().collect();

        let mut a = red;
        a.add_from_color(&green);
        let mut b = green;
        b.add_from_color(&red);

        assert_eq!(a, b);
        assert!(a.is_multicolor());
        assert_eq!(a.get().as_slice(), &[Color::Red, Color::Green]);
    }

    #[test]
    fn test_same_identity_ignores_counts() {
        let one: Colors = [Color::Black].into_iter().collect();
        let three: Colors = [Color::Black, Color::Black, Color::Black].into_iter().collect();
        assert_ne!(one, three);
        assert!(one.same_identity(&three));
    }

    #[test]
    fn test_color_codes() {
        assert_eq!(serde_json::to_string(&Color::Blue).unwrap(), "2");
        let parsed: Color = serde_json::from_str("5").unwrap();
        assert_eq!(parsed, Color::Green);
        assert!(serde_json::from_str::<Color>("9").is_err());
    }
}
