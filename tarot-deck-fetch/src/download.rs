//! Streaming download and extraction of the reference-deck archive.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;
use std::sync::mpsc::Sender;

use tarot_deck_lib::REFERENCE_DECK_NAME;

use crate::error::FetchError;
use crate::progress::FetchProgress;

/// Release archive for the Rider-Waite-Smith reference deck.
pub const REFERENCE_DECK_URL: &str = "https://github.com/arcanaland/reference-decks/releases/download/rider-waite-smith%2Fv1.0/rider-waite-smith-1.0.zip";

/// Stream chunk size for the download loop.
const CHUNK_SIZE: usize = 64 * 1024;

/// Download the reference deck into `dest_root` and extract it.
///
/// Blocks until done — callers wanting a live UI run this on a worker
/// thread and read `progress` from their own. Progress sends are
/// best-effort: a dropped receiver never aborts the download. There is no
/// cancellation and no timeout; a failed fetch is retried by calling
/// again.
///
/// On success the extracted deck sits at `dest_root/rider-waite-smith`
/// and the archive has been removed.
pub fn download_reference_deck(
    dest_root: &Path,
    progress: &Sender<FetchProgress>,
) -> Result<(), FetchError> {
    match fetch_and_extract(dest_root, progress) {
        Ok(()) => {
            let _ = progress.send(FetchProgress::Completed);
            Ok(())
        }
        Err(e) => {
            let _ = progress.send(FetchProgress::failed(e.to_string()));
            Err(e)
        }
    }
}

fn fetch_and_extract(
    dest_root: &Path,
    progress: &Sender<FetchProgress>,
) -> Result<(), FetchError> {
    fs::create_dir_all(dest_root)?;
    let zip_path = dest_root.join(format!("{REFERENCE_DECK_NAME}.zip"));

    log::info!("downloading reference deck to {}", zip_path.display());
    let mut response = reqwest::blocking::get(REFERENCE_DECK_URL)?;
    if !response.status().is_success() {
        return Err(FetchError::Http(response.status()));
    }

    let total_bytes = response.content_length();
    let _ = progress.send(FetchProgress::started(total_bytes));

    let mut out = File::create(&zip_path)?;
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut bytes_read: u64 = 0;
    loop {
        let n = response.read(&mut buf)?;
        if n == 0 {
            break;
        }
        out.write_all(&buf[..n])?;
        bytes_read += n as u64;
        let _ = progress.send(FetchProgress::downloading(bytes_read, total_bytes));
    }
    out.flush()?;
    drop(out);
    log::info!("download complete ({bytes_read} bytes)");

    let _ = progress.send(FetchProgress::Extracting);
    extract_archive(&zip_path, dest_root)?;
    fs::remove_file(&zip_path)?;
    Ok(())
}

/// Unpack the archive into `dest_root`. `ZipArchive::extract` sanitizes
/// entry paths, so no zip-slip handling is needed here.
fn extract_archive(zip_path: &Path, dest_root: &Path) -> Result<(), FetchError> {
    let file = File::open(zip_path)?;
    let mut archive = zip::ZipArchive::new(file)?;
    archive.extract(dest_root)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use zip::write::SimpleFileOptions;

    #[test]
    fn extract_archive_unpacks_a_deck() {
        let dir = tempfile::tempdir().unwrap();
        let zip_path = dir.path().join("deck.zip");
        let file = File::create(&zip_path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = SimpleFileOptions::default();
        writer
            .add_directory("rider-waite-smith/", options)
            .unwrap();
        writer
            .start_file("rider-waite-smith/deck.toml", options)
            .unwrap();
        writer
            .write_all(b"[deck]\nname = \"Rider-Waite-Smith\"\n")
            .unwrap();
        writer.finish().unwrap();

        extract_archive(&zip_path, dir.path()).unwrap();
        assert!(dir.path().join("rider-waite-smith/deck.toml").is_file());
    }
}
