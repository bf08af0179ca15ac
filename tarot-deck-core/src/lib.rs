//! Core tarot vocabulary: suits, ranks, and card identifiers.
//!
//! This crate is pure data — no file I/O, no deck loading. It defines the
//! fixed 78-card canonical schema that every deck is built from, replacing
//! ad-hoc string matching with typed identifiers.

pub mod card_id;
pub mod rank;
pub mod suit;

pub use card_id::{Arcana, CardId, ParseCardIdError};
pub use rank::{ParseRankError, Rank};
pub use suit::{ParseSuitError, Suit};

/// Number of major arcana cards (trumps 0 through 21).
pub const MAJOR_ARCANA_COUNT: u8 = 22;

/// Ranks per suit: ace through ten plus the four court cards.
pub const RANKS_PER_SUIT: usize = 14;

/// Total cards in the canonical schema: 22 majors + 4 suits x 14 ranks.
pub const CANONICAL_DECK_SIZE: usize = 78;
