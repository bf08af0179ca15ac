use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// No deck with the requested name
    #[error("unknown deck: '{0}' (run 'tarot-deck list' to see what's available)")]
    UnknownDeck(String),

    /// The reference deck has not been downloaded yet
    #[error("reference deck not downloaded (run 'tarot-deck fetch')")]
    NoReferenceDeck,

    /// The card id did not parse
    #[error(transparent)]
    BadCardId(#[from] tarot_deck_core::ParseCardIdError),

    /// The card id parsed but is not in this deck
    #[error("card '{0}' is not in this deck")]
    CardNotFound(String),

    /// Reference-deck download failed
    #[error(transparent)]
    Fetch(#[from] tarot_deck_fetch::FetchError),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn unknown_deck(name: impl Into<String>) -> Self {
        Self::UnknownDeck(name.into())
    }

    pub(crate) fn card_not_found(id: impl Into<String>) -> Self {
        Self::CardNotFound(id.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
