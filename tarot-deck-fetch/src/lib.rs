//! Reference-deck download and extraction.
//!
//! The distinguished reference deck (Rider-Waite-Smith) is not bundled
//! with the application; it is fetched on first run as a release zip and
//! extracted into the data directory. The download streams on whatever
//! thread calls it and reports progress over an mpsc channel, so frontends
//! run it on a worker thread and keep their event loop responsive.

pub mod download;
pub mod error;
pub mod progress;

pub use download::{REFERENCE_DECK_URL, download_reference_deck};
pub use error::FetchError;
pub use progress::FetchProgress;
