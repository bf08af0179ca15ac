use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use tarot_deck_core::{Arcana, CANONICAL_DECK_SIZE, CardId, Rank, Suit};
use tarot_deck_lib::{Deck, DeckError};

fn write_deck(root: &Path, manifest: &str) {
    fs::create_dir_all(root).unwrap();
    fs::write(root.join("deck.toml"), manifest).unwrap();
}

#[test]
fn open_without_manifest_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = Deck::open(dir.path());
    assert!(matches!(result, Err(DeckError::ManifestNotFound(_))));
}

#[test]
fn open_with_invalid_manifest_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_deck(dir.path(), "this is not [valid toml");
    assert!(matches!(
        Deck::open(dir.path()),
        Err(DeckError::ManifestInvalid(_))
    ));
}

#[test]
fn full_deck_has_78_unique_cards() {
    let dir = tempfile::tempdir().unwrap();
    write_deck(dir.path(), "[deck]\nname = \"Plain\"\n");
    let deck = Deck::open(dir.path()).unwrap();

    assert_eq!(deck.cards().len(), CANONICAL_DECK_SIZE);
    let ids: HashSet<String> = deck.cards().iter().map(|c| c.id.to_string()).collect();
    assert_eq!(ids.len(), CANONICAL_DECK_SIZE);
    assert_eq!(deck.name(), "Plain");
}

#[test]
fn deck_without_localization_uses_generated_names() {
    let dir = tempfile::tempdir().unwrap();
    write_deck(dir.path(), "");
    let deck = Deck::open(dir.path()).unwrap();

    for card in deck.cards() {
        match card.id {
            CardId::Major { .. } => assert_eq!(card.name, "Unknown"),
            CardId::Minor { suit, rank } => {
                assert_eq!(
                    card.name,
                    format!("{} of {}", rank.display_name(), suit.display_name())
                );
            }
        }
        assert!(card.alt_text.is_none());
    }
}

#[test]
fn excluded_card_is_absent() {
    let dir = tempfile::tempdir().unwrap();
    write_deck(
        dir.path(),
        r#"
        [deck.excluded_cards]
        cards = ["major_arcana.00"]
        reason = "lost to history"
        "#,
    );
    let deck = Deck::open(dir.path()).unwrap();

    assert_eq!(deck.cards().len(), CANONICAL_DECK_SIZE - 1);
    assert!(deck.card_by_id(&CardId::major(0).unwrap()).is_none());
    assert!(deck.card_by_id(&CardId::major(1).unwrap()).is_some());
    assert_eq!(deck.exclusion_reason(), Some("lost to history"));
}

#[test]
fn localized_names_and_alt_text_resolve() {
    let dir = tempfile::tempdir().unwrap();
    write_deck(dir.path(), "[deck]\nname = \"Localized\"\n");
    let names = dir.path().join("names");
    fs::create_dir_all(&names).unwrap();
    fs::write(
        names.join("en.toml"),
        r#"
        [major_arcana]
        00 = "The Fool"

        [alt_text.major_arcana]
        00 = "A traveler steps toward a cliff"
        "#,
    )
    .unwrap();
    let deck = Deck::open(dir.path()).unwrap();

    let fool = deck.card_by_id(&CardId::major(0).unwrap()).unwrap();
    assert_eq!(fool.name, "The Fool");
    assert_eq!(
        fool.alt_text.as_deref(),
        Some("A traveler steps toward a cliff")
    );
    // Cards without entries keep the default behavior.
    let magician = deck.card_by_id(&CardId::major(1).unwrap()).unwrap();
    assert_eq!(magician.name, "Unknown");
    assert!(magician.alt_text.is_none());
}

#[test]
fn card_image_is_resolved_at_load() {
    let dir = tempfile::tempdir().unwrap();
    write_deck(dir.path(), "");
    let low = dir.path().join("h750/major_arcana");
    let high = dir.path().join("h2400/major_arcana");
    fs::create_dir_all(&low).unwrap();
    fs::create_dir_all(&high).unwrap();
    fs::write(low.join("00.png"), b"").unwrap();
    fs::write(high.join("00.png"), b"").unwrap();
    let deck = Deck::open(dir.path()).unwrap();

    let fool = deck.card_by_id(&CardId::major(0).unwrap()).unwrap();
    assert_eq!(
        fool.image.as_deref(),
        Some(dir.path().join("h2400/major_arcana/00.png").as_path())
    );
    let magician = deck.card_by_id(&CardId::major(1).unwrap()).unwrap();
    assert!(magician.image.is_none());
}

#[test]
fn find_card_by_attributes_major() {
    let dir = tempfile::tempdir().unwrap();
    write_deck(dir.path(), "");
    let deck = Deck::open(dir.path()).unwrap();

    let attrs = HashMap::from([
        ("type".to_string(), "major_arcana".to_string()),
        ("number".to_string(), "5".to_string()),
    ]);
    let card = deck.find_card_by_attributes(&attrs).unwrap();
    assert_eq!(card.id.to_string(), "major_arcana.05");

    let attrs = HashMap::from([
        ("type".to_string(), "major_arcana".to_string()),
        ("number".to_string(), "99".to_string()),
    ]);
    assert!(deck.find_card_by_attributes(&attrs).is_none());
}

#[test]
fn find_card_by_attributes_minor() {
    let dir = tempfile::tempdir().unwrap();
    write_deck(dir.path(), "");
    let deck = Deck::open(dir.path()).unwrap();

    let attrs = HashMap::from([
        ("type".to_string(), "minor_arcana".to_string()),
        ("suit".to_string(), "swords".to_string()),
        ("rank".to_string(), "queen".to_string()),
    ]);
    let card = deck.find_card_by_attributes(&attrs).unwrap();
    assert_eq!(card.id, CardId::minor(Suit::Swords, Rank::Queen));

    // Attributes are raw canonical values — display aliases don't match.
    let attrs = HashMap::from([("suit".to_string(), "Swords".to_string())]);
    assert!(deck.find_card_by_attributes(&attrs).is_none());
}

#[test]
fn query_filters() {
    let dir = tempfile::tempdir().unwrap();
    write_deck(dir.path(), "");
    let deck = Deck::open(dir.path()).unwrap();

    assert_eq!(deck.cards_by_arcana(Arcana::MajorArcana).len(), 22);
    assert_eq!(deck.cards_by_arcana(Arcana::MinorArcana).len(), 56);
    assert_eq!(deck.cards_by_suit(Suit::Cups).len(), 14);
    // Lexicographic by canonical name.
    assert_eq!(
        deck.suits(),
        [Suit::Cups, Suit::Pentacles, Suit::Swords, Suit::Wands]
    );
}

#[test]
fn suit_exclusion_requires_all_fourteen_ranks() {
    let all_but_one: Vec<String> = Rank::all()
        .iter()
        .filter(|rank| **rank != Rank::King)
        .map(|rank| CardId::minor(Suit::Wands, *rank).to_string())
        .collect();
    let manifest = format!(
        "[deck.excluded_cards]\ncards = [{}]\n",
        all_but_one
            .iter()
            .map(|id| format!("\"{id}\""))
            .collect::<Vec<_>>()
            .join(", ")
    );
    let dir = tempfile::tempdir().unwrap();
    write_deck(dir.path(), &manifest);
    let deck = Deck::open(dir.path()).unwrap();

    // 13 of 14 excluded is not a fully excluded suit.
    assert!(!deck.is_suit_excluded(Suit::Wands));
    assert!(deck.suits().contains(&Suit::Wands));

    let all: Vec<String> = Rank::all()
        .iter()
        .map(|rank| format!("\"{}\"", CardId::minor(Suit::Wands, *rank)))
        .collect();
    let manifest = format!("[deck.excluded_cards]\ncards = [{}]\n", all.join(", "));
    let dir = tempfile::tempdir().unwrap();
    write_deck(dir.path(), &manifest);
    let deck = Deck::open(dir.path()).unwrap();

    assert!(deck.is_suit_excluded(Suit::Wands));
    assert!(!deck.is_suit_excluded(Suit::Cups));
    assert!(!deck.suits().contains(&Suit::Wands));
}

#[test]
fn alias_names_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    write_deck(
        dir.path(),
        r#"
        [aliases.suits]
        wands = "Batons"

        [aliases.courts]
        knight = "Cavalier"
        "#,
    );
    let deck = Deck::open(dir.path()).unwrap();

    assert_eq!(deck.display_suit_name(Suit::Wands), "Batons");
    assert_eq!(deck.display_suit_name(Suit::Cups), "Cups");
    assert_eq!(deck.display_court_name(Rank::Knight), "Cavalier");
    assert_eq!(deck.display_court_name(Rank::Queen), "Queen");

    // Round-trip: display name maps back to the canonical suit.
    let display = deck.display_suit_name(Suit::Wands).to_string();
    assert_eq!(deck.canonical_suit_name(&display), "wands");
    // Unrecognized names pass through unchanged.
    assert_eq!(deck.canonical_suit_name("Moonbeams"), "Moonbeams");
}

#[test]
fn random_card_draws_from_the_catalog() {
    let dir = tempfile::tempdir().unwrap();
    write_deck(dir.path(), "");
    let deck = Deck::open(dir.path()).unwrap();

    for _ in 0..20 {
        let card = deck.random_card().unwrap();
        assert!(deck.card_by_id(&card.id).is_some());
    }
}

#[test]
fn draw_returns_distinct_cards() {
    let dir = tempfile::tempdir().unwrap();
    write_deck(dir.path(), "");
    let deck = Deck::open(dir.path()).unwrap();

    let drawn = deck.draw(3);
    assert_eq!(drawn.len(), 3);
    let ids: HashSet<String> = drawn.iter().map(|c| c.id.to_string()).collect();
    assert_eq!(ids.len(), 3);

    // Asking for more cards than exist caps at the deck size.
    assert_eq!(deck.draw(100).len(), CANONICAL_DECK_SIZE);
}

#[test]
fn random_card_on_empty_deck_is_none() {
    let everything: Vec<String> = CardId::all().map(|id| format!("\"{id}\"")).collect();
    let manifest = format!(
        "[deck.excluded_cards]\ncards = [{}]\n",
        everything.join(", ")
    );
    let dir = tempfile::tempdir().unwrap();
    write_deck(dir.path(), &manifest);
    let deck = Deck::open(dir.path()).unwrap();

    assert!(deck.cards().is_empty());
    assert!(deck.random_card().is_none());
    assert!(deck.suits().is_empty());
}
