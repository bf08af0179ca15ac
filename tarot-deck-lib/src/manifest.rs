//! Deck manifest (`deck.toml`) parsing.
//!
//! Every field is optional with a documented default; unknown keys are
//! ignored so older builds keep loading newer manifests.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use tarot_deck_core::{CardId, Rank, Suit};

use crate::error::DeckError;

/// Manifest file name expected at every deck root.
pub const MANIFEST_FILE: &str = "deck.toml";

/// Parsed `deck.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeckManifest {
    #[serde(default)]
    deck: DeckSection,
    #[serde(default)]
    card_backs: CardBacksSection,
    #[serde(default)]
    aliases: AliasTables,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DeckSection {
    name: Option<String>,
    version: Option<String>,
    description: Option<String>,
    excluded_cards: Option<ExcludedCards>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ExcludedCards {
    #[serde(default)]
    cards: Vec<String>,
    reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CardBacksSection {
    default: Option<String>,
}

/// The `[aliases]` tables mapping canonical suit/court names to a deck's
/// thematic display names (e.g. `wands = "Rods"`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AliasTables {
    #[serde(default)]
    suits: BTreeMap<String, String>,
    #[serde(default)]
    courts: BTreeMap<String, String>,
}

impl AliasTables {
    /// Display alias for a suit, if the manifest defines one.
    pub fn suit(&self, suit: Suit) -> Option<&str> {
        self.suits.get(suit.canonical_name()).map(String::as_str)
    }

    /// Display alias for a court rank, if the manifest defines one.
    pub fn court(&self, rank: Rank) -> Option<&str> {
        self.courts.get(rank.canonical_name()).map(String::as_str)
    }

    /// Reverse lookup: map a display name back to its canonical suit name.
    /// Matching is case-insensitive.
    pub fn canonical_suit(&self, display: &str) -> Option<&str> {
        self.suits
            .iter()
            .find(|(_, alias)| alias.eq_ignore_ascii_case(display))
            .map(|(canonical, _)| canonical.as_str())
    }
}

impl DeckManifest {
    /// Read and parse `deck.toml` from a deck root directory.
    pub fn load(root: &Path) -> Result<Self, DeckError> {
        let path = root.join(MANIFEST_FILE);
        if !path.exists() {
            return Err(DeckError::ManifestNotFound(root.to_path_buf()));
        }
        let contents = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn name(&self) -> &str {
        self.deck.name.as_deref().unwrap_or("Unknown Deck")
    }

    pub fn version(&self) -> &str {
        self.deck.version.as_deref().unwrap_or("Unknown Version")
    }

    pub fn description(&self) -> Option<&str> {
        self.deck.description.as_deref()
    }

    /// Default card-back identifier.
    pub fn card_back(&self) -> &str {
        self.card_backs.default.as_deref().unwrap_or("classic")
    }

    pub fn aliases(&self) -> &AliasTables {
        &self.aliases
    }

    /// Why the deck excludes cards, when it says.
    pub fn exclusion_reason(&self) -> Option<&str> {
        self.deck
            .excluded_cards
            .as_ref()
            .and_then(|e| e.reason.as_deref())
    }

    /// The parsed exclusion set.
    ///
    /// Entries that are not valid card ids are logged and dropped — they
    /// could never match a card in the canonical schema.
    pub fn excluded_ids(&self) -> HashSet<CardId> {
        let Some(excluded) = &self.deck.excluded_cards else {
            return HashSet::new();
        };
        let mut ids = HashSet::new();
        for raw in &excluded.cards {
            match raw.parse::<CardId>() {
                Ok(id) => {
                    ids.insert(id);
                }
                Err(e) => log::warn!("ignoring excluded card '{raw}': {e}"),
            }
        }
        ids
    }
}
