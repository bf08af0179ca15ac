//! Shared application settings (extra deck roots, config file location).
//!
//! The CLI and any future frontend read the same file so deck discovery is
//! consistent: `~/.config/tarot-deck/settings.toml`.

use std::io;
use std::path::{Path, PathBuf};

/// Canonical path to the shared settings file: `~/.config/tarot-deck/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("tarot-deck").join("settings.toml")
}

/// Deck roots to scan in addition to the primary data directory:
/// CLI-provided roots first, then any saved in `library.deck_roots`.
pub fn resolve_extra_roots(cli_roots: &[PathBuf]) -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = cli_roots.to_vec();
    for root in load_deck_roots() {
        if !roots.contains(&root) {
            roots.push(root);
        }
    }
    roots
}

/// Read `library.deck_roots` from `settings.toml`, if set.
pub fn load_deck_roots() -> Vec<PathBuf> {
    let Ok(contents) = std::fs::read_to_string(settings_path()) else {
        return Vec::new();
    };
    let Ok(doc) = contents.parse::<toml::Value>() else {
        return Vec::new();
    };
    doc.get("library")
        .and_then(|library| library.get("deck_roots"))
        .and_then(|roots| roots.as_array())
        .map(|roots| {
            roots
                .iter()
                .filter_map(|value| value.as_str())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Save (or clear) the extra deck roots in `settings.toml`.
///
/// Uses `toml::Value` for a surgical update so unrelated fields in the
/// settings file are preserved.
pub fn save_deck_roots(roots: Option<&[PathBuf]>) -> io::Result<()> {
    let settings = settings_path();
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(&settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    // Ensure [library] table exists
    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let library = table
        .entry("library")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let lib_table = library
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[library] is not a table"))?;

    match roots {
        Some(roots) => {
            let values = roots
                .iter()
                .map(|root| toml::Value::String(root.to_string_lossy().into_owned()))
                .collect();
            lib_table.insert("deck_roots".to_string(), toml::Value::Array(values));
        }
        None => {
            lib_table.remove("deck_roots");
        }
    }

    write_settings(&settings, &doc)
}

/// Write atomically via a sibling tmp file.
fn write_settings(settings: &Path, doc: &toml::Value) -> io::Result<()> {
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;
    Ok(())
}
