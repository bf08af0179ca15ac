use thiserror::Error;

/// Errors that can occur while fetching the reference deck.
///
/// All of these are surfaced to the caller for retry; none of them crash
/// the process or poison existing registry state.
#[derive(Debug, Error)]
pub enum FetchError {
    /// I/O error while writing or extracting the archive
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Network-level failure
    #[error("download failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered, but not with the archive
    #[error("download failed: HTTP {0}")]
    Http(reqwest::StatusCode),

    /// The downloaded archive could not be read
    #[error("invalid archive: {0}")]
    Archive(#[from] zip::result::ZipError),
}
