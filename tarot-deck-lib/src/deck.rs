//! A loaded deck: manifest metadata plus the immutable card catalog.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use tarot_deck_core::{Arcana, CardId, Rank, Suit};

use crate::card::Card;
use crate::catalog;
use crate::error::DeckError;
use crate::localization::Localization;
use crate::manifest::DeckManifest;

/// Localization language loaded at deck construction.
const DEFAULT_LANG: &str = "en";

/// An immutable deck built from a directory containing `deck.toml`.
///
/// All queries are pure reads over the card list; reloading a changed deck
/// means opening it again and dropping this one.
#[derive(Debug)]
pub struct Deck {
    path: PathBuf,
    manifest: DeckManifest,
    excluded: HashSet<CardId>,
    cards: Vec<Card>,
}

impl Deck {
    /// Load a deck from its root directory.
    ///
    /// Fatal only when `deck.toml` is missing or unparseable; missing
    /// localization, aliases, or images degrade to defaults.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DeckError> {
        let path = path.into();
        let manifest = DeckManifest::load(&path)?;
        let l10n = Localization::load(&path, DEFAULT_LANG);
        let cards = catalog::build_catalog(&path, &manifest, &l10n);
        let excluded = manifest.excluded_ids();
        log::info!(
            "loaded deck '{}' ({} cards) from {}",
            manifest.name(),
            cards.len(),
            path.display()
        );
        Ok(Self {
            path,
            manifest,
            excluded,
            cards,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        self.manifest.name()
    }

    pub fn version(&self) -> &str {
        self.manifest.version()
    }

    pub fn description(&self) -> Option<&str> {
        self.manifest.description()
    }

    /// Default card-back identifier for this deck.
    pub fn card_back(&self) -> &str {
        self.manifest.card_back()
    }

    pub fn exclusion_reason(&self) -> Option<&str> {
        self.manifest.exclusion_reason()
    }

    /// All cards in canonical order, exclusions already filtered out.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by id. Linear scan; card lists are at most 78 long.
    pub fn card_by_id(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == *id)
    }

    /// Uniformly random card; `None` for an empty (fully excluded) deck.
    pub fn random_card(&self) -> Option<&Card> {
        self.cards.choose(&mut rand::thread_rng())
    }

    /// Draw up to `count` distinct cards, uniformly at random.
    pub fn draw(&self, count: usize) -> Vec<&Card> {
        self.cards
            .choose_multiple(&mut rand::thread_rng(), count.min(self.cards.len()))
            .collect()
    }

    pub fn cards_by_arcana(&self, arcana: Arcana) -> Vec<&Card> {
        self.cards
            .iter()
            .filter(|card| card.id.arcana() == arcana)
            .collect()
    }

    pub fn cards_by_suit(&self, suit: Suit) -> Vec<&Card> {
        self.cards
            .iter()
            .filter(|card| card.id.suit() == Some(suit))
            .collect()
    }

    /// Distinct suits present among the minor arcana, sorted by canonical
    /// name.
    pub fn suits(&self) -> Vec<Suit> {
        let mut suits: Vec<Suit> = Suit::all()
            .iter()
            .copied()
            .filter(|&suit| self.cards.iter().any(|card| card.id.suit() == Some(suit)))
            .collect();
        suits.sort_by_key(|suit| suit.canonical_name());
        suits
    }

    /// First card matching every attribute in `attrs` exactly.
    ///
    /// Resolves structured identifiers (URI-style addressing split on `.`)
    /// into cards. Comparison is against raw canonical strings; callers
    /// resolve display aliases before calling.
    pub fn find_card_by_attributes(&self, attrs: &HashMap<String, String>) -> Option<&Card> {
        self.cards.iter().find(|card| {
            attrs
                .iter()
                .all(|(key, want)| card.attribute(key).as_deref() == Some(want.as_str()))
        })
    }

    /// True only when every one of the suit's 14 ids is in the exclusion
    /// set — a fully excluded suit, not a partially excluded one.
    pub fn is_suit_excluded(&self, suit: Suit) -> bool {
        Rank::all()
            .iter()
            .all(|&rank| self.excluded.contains(&CardId::minor(suit, rank)))
    }

    /// The deck's display name for a suit, falling back to the capitalized
    /// canonical name.
    pub fn display_suit_name(&self, suit: Suit) -> &str {
        self.manifest
            .aliases()
            .suit(suit)
            .unwrap_or(suit.display_name())
    }

    /// The deck's display name for a court rank, falling back to the
    /// capitalized canonical name.
    pub fn display_court_name(&self, rank: Rank) -> &str {
        self.manifest
            .aliases()
            .court(rank)
            .unwrap_or(rank.display_name())
    }

    /// Map a display suit name back to its canonical form.
    ///
    /// Matching is case-insensitive over the alias table. An unrecognized
    /// name is returned unchanged and treated as already canonical.
    pub fn canonical_suit_name<'a>(&'a self, display: &'a str) -> &'a str {
        self.manifest
            .aliases()
            .canonical_suit(display)
            .unwrap_or(display)
    }
}
