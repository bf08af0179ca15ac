//! The immutable card record produced by the catalog builder.

use std::path::PathBuf;

use tarot_deck_core::{Arcana, CardId, Rank, Suit};

/// A single card in a loaded deck.
///
/// Built once at deck load time and never mutated. The id carries the
/// tagged major/minor structure, so consumers match on it instead of
/// probing optional fields.
#[derive(Debug, Clone)]
pub struct Card {
    /// Stable id within the canonical 78-card schema.
    pub id: CardId,
    /// Display name: localized when available, generated otherwise.
    pub name: String,
    /// Resolved image path, when the deck ships art for this card.
    pub image: Option<PathBuf>,
    /// Accessibility description from the localization file.
    pub alt_text: Option<String>,
    /// Per-deck display names, minor-arcana cards only.
    pub display: Option<MinorDisplay>,
}

/// Deck-specific display names for a minor-arcana card's suit and rank,
/// with manifest aliases already applied.
#[derive(Debug, Clone)]
pub struct MinorDisplay {
    pub suit: String,
    pub rank: String,
}

impl Card {
    pub fn arcana(&self) -> Arcana {
        self.id.arcana()
    }

    pub fn suit(&self) -> Option<Suit> {
        self.id.suit()
    }

    pub fn rank(&self) -> Option<Rank> {
        self.id.rank()
    }

    pub fn number(&self) -> Option<u8> {
        self.id.number()
    }

    /// Raw attribute value by key, for structured-identifier lookup.
    ///
    /// Values are the canonical stored strings ("major_arcana", "wands",
    /// "five"); the major-arcana number is unpadded decimal. No alias
    /// resolution happens here — callers pass canonical values.
    pub fn attribute(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.to_string()),
            "type" => Some(self.id.arcana().canonical_name().to_string()),
            "name" => Some(self.name.clone()),
            "number" => self.id.number().map(|n| n.to_string()),
            "suit" => self.id.suit().map(|s| s.canonical_name().to_string()),
            "rank" => self.id.rank().map(|r| r.canonical_name().to_string()),
            _ => None,
        }
    }
}
