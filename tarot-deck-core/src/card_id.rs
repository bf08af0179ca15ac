use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::rank::{ParseRankError, Rank};
use crate::suit::{ParseSuitError, Suit};
use crate::MAJOR_ARCANA_COUNT;

/// Arcana classification for a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arcana {
    MajorArcana,
    MinorArcana,
}

impl Arcana {
    /// Canonical name as it appears in card ids ("major_arcana" / "minor_arcana").
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Self::MajorArcana => "major_arcana",
            Self::MinorArcana => "minor_arcana",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::MajorArcana => "Major Arcana",
            Self::MinorArcana => "Minor Arcana",
        }
    }
}

impl std::fmt::Display for Arcana {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Arcana {
    type Err = ParseCardIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major_arcana" => Ok(Self::MajorArcana),
            "minor_arcana" => Ok(Self::MinorArcana),
            _ => Err(ParseCardIdError::malformed(s)),
        }
    }
}

/// Stable identifier for a card in the canonical 78-card schema.
///
/// String form is `major_arcana.NN` (two-digit, zero-padded trump number)
/// or `minor_arcana.<suit>.<rank>`; `Display` and `FromStr` round-trip.
/// The tagged representation means consuming code matches on the variant
/// instead of probing for optional fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardId {
    /// One of the 22 numbered trumps (0..=21).
    Major { number: u8 },
    /// A suited card.
    Minor { suit: Suit, rank: Rank },
}

impl CardId {
    /// Build a major-arcana id, rejecting numbers outside 0..=21.
    pub fn major(number: u8) -> Result<Self, ParseCardIdError> {
        if number >= MAJOR_ARCANA_COUNT {
            return Err(ParseCardIdError::NumberOutOfRange(number));
        }
        Ok(Self::Major { number })
    }

    /// Build a minor-arcana id.
    pub fn minor(suit: Suit, rank: Rank) -> Self {
        Self::Minor { suit, rank }
    }

    /// Which arcana this id belongs to.
    pub fn arcana(&self) -> Arcana {
        match self {
            Self::Major { .. } => Arcana::MajorArcana,
            Self::Minor { .. } => Arcana::MinorArcana,
        }
    }

    /// Trump number for major-arcana ids.
    pub fn number(&self) -> Option<u8> {
        match self {
            Self::Major { number } => Some(*number),
            Self::Minor { .. } => None,
        }
    }

    /// Suit for minor-arcana ids.
    pub fn suit(&self) -> Option<Suit> {
        match self {
            Self::Major { .. } => None,
            Self::Minor { suit, .. } => Some(*suit),
        }
    }

    /// Rank for minor-arcana ids.
    pub fn rank(&self) -> Option<Rank> {
        match self {
            Self::Major { .. } => None,
            Self::Minor { rank, .. } => Some(*rank),
        }
    }

    /// All 78 ids in canonical schema order: trumps 0..=21, then each suit
    /// ace through king.
    pub fn all() -> impl Iterator<Item = CardId> {
        let majors = (0..MAJOR_ARCANA_COUNT).map(|number| CardId::Major { number });
        let minors = Suit::all().iter().flat_map(|&suit| {
            Rank::all()
                .iter()
                .map(move |&rank| CardId::Minor { suit, rank })
        });
        majors.chain(minors)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Major { number } => write!(f, "major_arcana.{number:02}"),
            Self::Minor { suit, rank } => write!(
                f,
                "minor_arcana.{}.{}",
                suit.canonical_name(),
                rank.canonical_name()
            ),
        }
    }
}

/// Error returned when a string cannot be parsed into a `CardId`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseCardIdError {
    #[error("malformed card id: '{0}'")]
    Malformed(String),

    #[error("major arcana number out of range: {0}")]
    NumberOutOfRange(u8),

    #[error(transparent)]
    UnknownSuit(#[from] ParseSuitError),

    #[error(transparent)]
    UnknownRank(#[from] ParseRankError),
}

impl ParseCardIdError {
    fn malformed(s: impl Into<String>) -> Self {
        Self::Malformed(s.into())
    }
}

impl std::str::FromStr for CardId {
    type Err = ParseCardIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        match parts.as_slice() {
            ["major_arcana", number] => {
                let number: u8 = number
                    .parse()
                    .map_err(|_| ParseCardIdError::malformed(s))?;
                CardId::major(number)
            }
            ["minor_arcana", suit, rank] => {
                Ok(CardId::minor(suit.parse()?, rank.parse()?))
            }
            _ => Err(ParseCardIdError::malformed(s)),
        }
    }
}

// Card ids serialize as their string form so manifests and saved state
// stay human-readable.
impl Serialize for CardId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CardId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
