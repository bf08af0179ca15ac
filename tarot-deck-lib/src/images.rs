//! Card image resolution across per-resolution asset folders.
//!
//! Decks ship the same art at several pixel heights (`h750`, `h1200`, ...)
//! plus an optional `scalable` folder of SVGs. Lookup tries a fixed
//! preference order first, then any `h<digits>` folder tallest-first, then
//! one last sweep of every top-level folder. A card with no image anywhere
//! resolves to `None` — some decks legitimately lack art for some cards.

use std::path::{Path, PathBuf};

use tarot_deck_core::CardId;

/// Resolution folders tried first, in preference order.
const PREFERRED_FOLDERS: &[&str] = &["h1200", "h2400", "h750", "scalable"];

/// Extensions tried inside the preferred folders, in order.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "svg"];

/// Relative directory and file stem for a card's image within a resolution
/// folder: `major_arcana.05` lives at `<tier>/major_arcana/05.<ext>`,
/// `minor_arcana.wands.ace` at `<tier>/minor_arcana/wands/ace.<ext>`.
pub fn image_location(id: &CardId) -> (PathBuf, String) {
    match id {
        CardId::Major { number } => (PathBuf::from("major_arcana"), format!("{number:02}")),
        CardId::Minor { suit, rank } => (
            Path::new("minor_arcana").join(suit.canonical_name()),
            rank.canonical_name().to_string(),
        ),
    }
}

/// Find the best available image for a card under a deck root.
pub fn resolve_card_image(root: &Path, id: &CardId) -> Option<PathBuf> {
    let (type_dir, stem) = image_location(id);

    // Pass 1: fixed preference order with known extensions.
    for folder in PREFERRED_FOLDERS {
        let dir = root.join(folder).join(&type_dir);
        for ext in IMAGE_EXTENSIONS {
            let candidate = dir.join(format!("{stem}.{ext}"));
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }

    // Pass 2: any h<digits> folder, tallest first, any extension.
    let mut by_height = height_folders(root);
    by_height.sort_by(|a, b| b.0.cmp(&a.0));
    for (_, dir) in by_height {
        if let Some(found) = find_by_stem(&dir.join(&type_dir), &stem) {
            return Some(found);
        }
    }

    // Pass 3: unordered sweep over every remaining top-level folder.
    if let Ok(entries) = std::fs::read_dir(root) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                if let Some(found) = find_by_stem(&path.join(&type_dir), &stem) {
                    return Some(found);
                }
            }
        }
    }

    log::debug!("no image for {id} under {}", root.display());
    None
}

/// Top-level `h<digits>` folders with their parsed pixel heights.
fn height_folders(root: &Path) -> Vec<(u32, PathBuf)> {
    let Ok(entries) = std::fs::read_dir(root) else {
        return Vec::new();
    };
    entries
        .flatten()
        .filter_map(|entry| {
            let name = entry.file_name();
            let height: u32 = name.to_str()?.strip_prefix('h')?.parse().ok()?;
            let path = entry.path();
            path.is_dir().then_some((height, path))
        })
        .collect()
}

/// First file in `dir` whose stem matches, any extension. Candidates are
/// sorted so resolution is deterministic across platforms.
fn find_by_stem(dir: &Path, stem: &str) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;
    let mut candidates: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.file_stem().and_then(|s| s.to_str()) == Some(stem)
        })
        .collect();
    candidates.sort();
    candidates.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarot_deck_core::{Rank, Suit};

    fn touch(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, b"").unwrap();
    }

    #[test]
    fn major_and_minor_locations() {
        let (dir, stem) = image_location(&CardId::major(5).unwrap());
        assert_eq!(dir, PathBuf::from("major_arcana"));
        assert_eq!(stem, "05");

        let (dir, stem) = image_location(&CardId::minor(Suit::Cups, Rank::Queen));
        assert_eq!(dir, Path::new("minor_arcana").join("cups"));
        assert_eq!(stem, "queen");
    }

    #[test]
    fn preferred_folder_wins() {
        let root = tempfile::tempdir().unwrap();
        let id = CardId::minor(Suit::Wands, Rank::Ace);
        touch(&root.path().join("h750/minor_arcana/wands/ace.png"));
        touch(&root.path().join("h2400/minor_arcana/wands/ace.png"));

        // h2400 outranks h750 in the preference order.
        let resolved = resolve_card_image(root.path(), &id).unwrap();
        assert_eq!(
            resolved,
            root.path().join("h2400/minor_arcana/wands/ace.png")
        );
    }

    #[test]
    fn falls_back_to_tallest_height_folder() {
        let root = tempfile::tempdir().unwrap();
        let id = CardId::major(0).unwrap();
        touch(&root.path().join("h300/major_arcana/00.webp"));
        touch(&root.path().join("h600/major_arcana/00.webp"));

        let resolved = resolve_card_image(root.path(), &id).unwrap();
        assert_eq!(resolved, root.path().join("h600/major_arcana/00.webp"));
    }

    #[test]
    fn final_sweep_finds_oddly_named_folders() {
        let root = tempfile::tempdir().unwrap();
        let id = CardId::major(13).unwrap();
        touch(&root.path().join("artwork/major_arcana/13.png"));

        let resolved = resolve_card_image(root.path(), &id).unwrap();
        assert_eq!(resolved, root.path().join("artwork/major_arcana/13.png"));
    }

    #[test]
    fn missing_image_is_none() {
        let root = tempfile::tempdir().unwrap();
        assert!(resolve_card_image(root.path(), &CardId::major(0).unwrap()).is_none());
    }
}
