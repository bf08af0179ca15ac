//! Localized card names and alt text (`names/<lang>.toml`).
//!
//! Localization is always optional: a missing or malformed file leaves the
//! tables empty and the catalog builder falls back to generated names.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tarot_deck_core::CardId;

/// Parsed `names/<lang>.toml`.
///
/// Name sections are keyed the way card ids decompose: `major_arcana.<NN>`
/// and `minor_arcana.<suit>.<rank>`. The `[alt_text]` table mirrors the
/// same keys for accessibility descriptions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Localization {
    #[serde(default)]
    major_arcana: BTreeMap<String, String>,
    #[serde(default)]
    minor_arcana: BTreeMap<String, BTreeMap<String, String>>,
    #[serde(default)]
    alt_text: AltTextTables,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct AltTextTables {
    #[serde(default)]
    major_arcana: BTreeMap<String, String>,
    #[serde(default)]
    minor_arcana: BTreeMap<String, BTreeMap<String, String>>,
}

impl Localization {
    /// Load `names/<lang>.toml` from a deck root.
    ///
    /// Never fails: missing files are expected (debug log), malformed ones
    /// are warned about, and both degrade to empty tables.
    pub fn load(root: &Path, lang: &str) -> Self {
        let path = root.join("names").join(format!("{lang}.toml"));
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                log::debug!("no localization at {}: {e}", path.display());
                return Self::default();
            }
        };
        match toml::from_str(&contents) {
            Ok(l10n) => l10n,
            Err(e) => {
                log::warn!("ignoring malformed localization {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Localized name for a card, if present.
    pub fn card_name(&self, id: &CardId) -> Option<&str> {
        lookup(&self.major_arcana, &self.minor_arcana, id)
    }

    /// Alt text for a card, if present.
    pub fn alt_text(&self, id: &CardId) -> Option<&str> {
        lookup(&self.alt_text.major_arcana, &self.alt_text.minor_arcana, id)
    }
}

fn lookup<'a>(
    majors: &'a BTreeMap<String, String>,
    minors: &'a BTreeMap<String, BTreeMap<String, String>>,
    id: &CardId,
) -> Option<&'a str> {
    match id {
        CardId::Major { number } => majors.get(&format!("{number:02}")),
        CardId::Minor { suit, rank } => minors
            .get(suit.canonical_name())
            .and_then(|suit_table| suit_table.get(rank.canonical_name())),
    }
    .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarot_deck_core::{Rank, Suit};

    #[test]
    fn names_and_alt_text_resolve() {
        let l10n: Localization = toml::from_str(
            r#"
            [major_arcana]
            00 = "The Fool"

            [minor_arcana.wands]
            ace = "Ace of Batons"

            [alt_text.major_arcana]
            00 = "A traveler at a cliff edge"
            "#,
        )
        .unwrap();

        let fool = CardId::major(0).unwrap();
        let ace = CardId::minor(Suit::Wands, Rank::Ace);
        assert_eq!(l10n.card_name(&fool), Some("The Fool"));
        assert_eq!(l10n.card_name(&ace), Some("Ace of Batons"));
        assert_eq!(l10n.alt_text(&fool), Some("A traveler at a cliff edge"));
        assert!(l10n.alt_text(&ace).is_none());
        assert!(l10n.card_name(&CardId::major(1).unwrap()).is_none());
    }

    #[test]
    fn missing_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let l10n = Localization::load(dir.path(), "en");
        assert!(l10n.card_name(&CardId::major(0).unwrap()).is_none());
    }

    #[test]
    fn malformed_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let names = dir.path().join("names");
        std::fs::create_dir_all(&names).unwrap();
        std::fs::write(names.join("en.toml"), "not [valid toml").unwrap();
        let l10n = Localization::load(dir.path(), "en");
        assert!(l10n.card_name(&CardId::major(0).unwrap()).is_none());
    }
}
