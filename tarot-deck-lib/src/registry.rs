//! Deck discovery across configured directories, plus the reference deck.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::deck::Deck;
use crate::manifest::MANIFEST_FILE;

/// Directory name of the bundled reference deck (Rider-Waite-Smith).
pub const REFERENCE_DECK_NAME: &str = "rider-waite-smith";

/// Default root holding downloaded reference decks:
/// `<data_dir>/tarot-canvas/reference-decks`.
pub fn default_reference_root() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("tarot-canvas").join("reference-decks")
}

/// Default root for user decks: `<data_dir>/tarot-canvas/decks`.
pub fn default_deck_root() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("tarot-canvas").join("decks")
}

/// Discovers and owns all loaded decks.
///
/// Constructed once at startup with explicit roots — no global state, no
/// filesystem watching. Reloading is an explicit call; the reference-deck
/// slot stays empty until a download lands and `reload_reference_deck`
/// repopulates it.
#[derive(Debug)]
pub struct DeckRegistry {
    reference_root: PathBuf,
    deck_roots: Vec<PathBuf>,
    reference_deck: Option<Deck>,
    decks: BTreeMap<String, Deck>,
}

impl DeckRegistry {
    /// Registry over the standard data directories plus any extra roots
    /// from settings or the command line.
    pub fn with_default_locations(extra_roots: &[PathBuf]) -> Self {
        let mut roots = vec![default_deck_root()];
        roots.extend(extra_roots.iter().cloned());
        Self::new(default_reference_root(), roots)
    }

    /// Build a registry and run the initial scan.
    ///
    /// `deck_roots` ordering matters: the first root is the writable
    /// primary and is created if missing; later roots are read-only
    /// candidates, skipped silently when absent.
    pub fn new(reference_root: PathBuf, deck_roots: Vec<PathBuf>) -> Self {
        let mut registry = Self {
            reference_root,
            deck_roots,
            reference_deck: None,
            decks: BTreeMap::new(),
        };
        registry.load_reference_deck();
        registry.load_decks();
        registry
    }

    /// Where the reference deck lives (or will live once downloaded).
    pub fn reference_deck_path(&self) -> PathBuf {
        self.reference_root.join(REFERENCE_DECK_NAME)
    }

    /// Root directory reference-deck downloads extract into.
    pub fn reference_root(&self) -> &Path {
        &self.reference_root
    }

    /// Cheap existence test; the download routine is idempotent against it.
    pub fn is_reference_deck_present(&self) -> bool {
        self.reference_deck_path().exists()
    }

    /// Populate the reference-deck slot if the deck is on disk.
    ///
    /// Absence is not an error — the slot legitimately stays empty until a
    /// download completes. A present-but-broken deck is logged and leaves
    /// the slot empty.
    pub fn load_reference_deck(&mut self) {
        let path = self.reference_deck_path();
        if !path.exists() {
            log::info!("reference deck not present at {}", path.display());
            self.reference_deck = None;
            return;
        }
        match Deck::open(&path) {
            Ok(deck) => self.reference_deck = Some(deck),
            Err(e) => {
                log::error!(
                    "failed to load reference deck from {}: {e}",
                    path.display()
                );
                self.reference_deck = None;
            }
        }
    }

    /// Re-check the reference-deck slot, typically after a download.
    pub fn reload_reference_deck(&mut self) {
        self.load_reference_deck();
    }

    /// Scan all configured roots for subdirectories containing `deck.toml`.
    ///
    /// Each deck loads independently: a malformed deck is logged and
    /// skipped, never aborting the scan.
    pub fn load_decks(&mut self) {
        self.decks.clear();
        let roots = self.deck_roots.clone();
        for (i, root) in roots.iter().enumerate() {
            if i == 0 {
                if let Err(e) = std::fs::create_dir_all(root) {
                    log::warn!("could not create deck directory {}: {e}", root.display());
                    continue;
                }
            } else if !root.exists() {
                continue;
            }
            self.scan_root(root);
        }
    }

    fn scan_root(&mut self, root: &Path) {
        let entries = match std::fs::read_dir(root) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("could not read deck directory {}: {e}", root.display());
                return;
            }
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() || !path.join(MANIFEST_FILE).exists() {
                continue;
            }
            match Deck::open(&path) {
                Ok(deck) => {
                    self.decks.insert(deck.name().to_string(), deck);
                }
                Err(e) => log::error!("error loading deck {}: {e}", path.display()),
            }
        }
    }

    /// Names of all discovered user decks, sorted.
    pub fn deck_names(&self) -> Vec<&str> {
        self.decks.keys().map(String::as_str).collect()
    }

    /// Look up a user deck by display name.
    pub fn deck(&self, name: &str) -> Option<&Deck> {
        self.decks.get(name)
    }

    pub fn reference_deck(&self) -> Option<&Deck> {
        self.reference_deck.as_ref()
    }

    /// Every loaded deck, reference deck first. A user deck sharing the
    /// reference deck's path is not listed twice.
    pub fn all_decks(&self) -> Vec<&Deck> {
        let mut decks: Vec<&Deck> = Vec::new();
        if let Some(reference) = &self.reference_deck {
            decks.push(reference);
        }
        for deck in self.decks.values() {
            let shadows_reference = self
                .reference_deck
                .as_ref()
                .is_some_and(|reference| reference.path() == deck.path());
            if !shadows_reference {
                decks.push(deck);
            }
        }
        decks
    }
}
