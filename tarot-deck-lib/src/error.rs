use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a deck.
///
/// Only "the deck cannot be identified" is fatal; missing optional content
/// (localization, aliases, images) degrades to documented defaults instead.
#[derive(Debug, Error)]
pub enum DeckError {
    /// I/O error while reading deck files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The deck directory has no manifest
    #[error("deck.toml not found in {}", .0.display())]
    ManifestNotFound(PathBuf),

    /// The manifest exists but is not valid TOML
    #[error("invalid deck.toml: {0}")]
    ManifestInvalid(#[from] toml::de::Error),
}
