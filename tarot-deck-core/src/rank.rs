use serde::{Deserialize, Serialize};

/// The fourteen ranks within a suit: ace through ten plus the four courts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Page,
    Knight,
    Queen,
    King,
}

/// All rank variants in canonical schema order.
const ALL_RANKS: &[Rank] = &[
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Page,
    Rank::Knight,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    /// Canonical lowercase name used in card ids and image file names.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Self::Ace => "ace",
            Self::Two => "two",
            Self::Three => "three",
            Self::Four => "four",
            Self::Five => "five",
            Self::Six => "six",
            Self::Seven => "seven",
            Self::Eight => "eight",
            Self::Nine => "nine",
            Self::Ten => "ten",
            Self::Page => "page",
            Self::Knight => "knight",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }

    /// Capitalized name for display when a deck defines no alias.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Page => "Page",
            Self::Knight => "Knight",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }

    /// True for the four "face" ranks that deck manifests may alias.
    pub fn is_court(&self) -> bool {
        matches!(self, Self::Page | Self::Knight | Self::Queen | Self::King)
    }

    /// All fourteen ranks in canonical schema order.
    pub fn all() -> &'static [Rank] {
        ALL_RANKS
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `Rank`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown rank: '{0}'")]
pub struct ParseRankError(pub String);

impl std::str::FromStr for Rank {
    type Err = ParseRankError;

    /// Parse a canonical rank name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        ALL_RANKS
            .iter()
            .copied()
            .find(|rank| rank.canonical_name() == lower)
            .ok_or_else(|| ParseRankError(s.to_string()))
    }
}
