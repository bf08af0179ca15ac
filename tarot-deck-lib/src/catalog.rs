//! Expands the fixed 78-card schema into concrete card records for one deck.

use std::path::Path;

use tarot_deck_core::{CardId, Rank, Suit};

use crate::card::{Card, MinorDisplay};
use crate::images;
use crate::localization::Localization;
use crate::manifest::DeckManifest;

/// Fallback name for a major-arcana card with no localization entry.
/// Majors have no generated "Rank of Suit" style default.
const UNKNOWN_MAJOR_NAME: &str = "Unknown";

/// Build the card list for a deck: all 78 canonical cards minus the
/// manifest's exclusions, with localized names, alt text, and resolved
/// image paths.
pub fn build_catalog(root: &Path, manifest: &DeckManifest, l10n: &Localization) -> Vec<Card> {
    let excluded = manifest.excluded_ids();
    CardId::all()
        .filter(|id| !excluded.contains(id))
        .map(|id| build_card(root, manifest, l10n, id))
        .collect()
}

fn build_card(root: &Path, manifest: &DeckManifest, l10n: &Localization, id: CardId) -> Card {
    let display = match id {
        CardId::Major { .. } => None,
        CardId::Minor { suit, rank } => Some(MinorDisplay {
            suit: display_suit(manifest, suit),
            rank: display_rank(manifest, rank),
        }),
    };

    let name = match l10n.card_name(&id) {
        Some(name) => name.to_string(),
        None => match &display {
            None => UNKNOWN_MAJOR_NAME.to_string(),
            Some(d) => format!("{} of {}", d.rank, d.suit),
        },
    };

    Card {
        id,
        name,
        image: images::resolve_card_image(root, &id),
        alt_text: l10n.alt_text(&id).map(str::to_string),
        display,
    }
}

fn display_suit(manifest: &DeckManifest, suit: Suit) -> String {
    manifest
        .aliases()
        .suit(suit)
        .unwrap_or(suit.display_name())
        .to_string()
}

/// Court ranks take the manifest alias; pip ranks always use the default.
fn display_rank(manifest: &DeckManifest, rank: Rank) -> String {
    if rank.is_court() {
        if let Some(alias) = manifest.aliases().court(rank) {
            return alias.to_string();
        }
    }
    rank.display_name().to_string()
}
