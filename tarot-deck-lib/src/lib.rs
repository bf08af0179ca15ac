//! Deck catalog: manifest parsing, card enumeration, image resolution,
//! and deck discovery.
//!
//! Everything here is load-once, read-many: a [`Deck`] is built in one shot
//! from its directory and is immutable afterwards, so queries need no
//! locking. Rebuilding after on-disk changes means discarding the deck and
//! opening it again.

pub mod card;
pub mod catalog;
pub mod deck;
pub mod error;
pub mod images;
pub mod localization;
pub mod manifest;
pub mod registry;
pub mod settings;

pub use card::{Card, MinorDisplay};
pub use deck::Deck;
pub use error::DeckError;
pub use localization::Localization;
pub use manifest::DeckManifest;
pub use registry::{DeckRegistry, REFERENCE_DECK_NAME};
