use serde::{Deserialize, Serialize};

/// The four minor-arcana suits.
///
/// Canonical names are the lowercase identifiers used in card ids and
/// directory layouts. Decks may alias these to thematic names ("Rods",
/// "Chalices"), but aliasing is a per-deck concern — see the deck manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Wands,
    Cups,
    Swords,
    Pentacles,
}

/// All suit variants in canonical schema order.
const ALL_SUITS: &[Suit] = &[Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles];

impl Suit {
    /// Canonical lowercase name used in card ids and image folder paths.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Self::Wands => "wands",
            Self::Cups => "cups",
            Self::Swords => "swords",
            Self::Pentacles => "pentacles",
        }
    }

    /// Capitalized name for display when a deck defines no alias.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Wands => "Wands",
            Self::Cups => "Cups",
            Self::Swords => "Swords",
            Self::Pentacles => "Pentacles",
        }
    }

    /// All four suits in canonical schema order.
    pub fn all() -> &'static [Suit] {
        ALL_SUITS
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `Suit`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown suit: '{0}'")]
pub struct ParseSuitError(pub String);

impl std::str::FromStr for Suit {
    type Err = ParseSuitError;

    /// Parse a canonical suit name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        ALL_SUITS
            .iter()
            .copied()
            .find(|suit| suit.canonical_name() == lower)
            .ok_or_else(|| ParseSuitError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_suits_in_schema_order() {
        let names: Vec<&str> = Suit::all().iter().map(|s| s.canonical_name()).collect();
        assert_eq!(names, ["wands", "cups", "swords", "pentacles"]);
    }

    #[test]
    fn canonical_names_round_trip() {
        for &suit in Suit::all() {
            let parsed: Suit = suit.canonical_name().parse().unwrap();
            assert_eq!(parsed, suit);
        }
    }

    #[test]
    fn case_insensitive_parsing() {
        let parsed: Suit = "Wands".parse().unwrap();
        assert_eq!(parsed, Suit::Wands);
        let parsed: Suit = "PENTACLES".parse().unwrap();
        assert_eq!(parsed, Suit::Pentacles);
    }

    #[test]
    fn unknown_string_returns_err() {
        let result: Result<Suit, _> = "coins".parse();
        assert!(result.is_err());
    }
}
