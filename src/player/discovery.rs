//! MIDI file discovery

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Whether the path names a Standard MIDI File (.mid / .midi, any case)
pub fn is_midi_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("mid") || ext.eq_ignore_ascii_case("midi"))
}

/// Recursively collect MIDI files under `dir`, sorted by path
pub fn scan_midi_files(dir: &Path) -> Result<Vec<PathBuf>> {
    log::info!("Scanning {:?} for MIDI files", dir);
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.with_context(|| format!("Failed to scan directory: {:?}", dir))?;
        if entry.file_type().is_file() && is_midi_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    log::info!("Found {} MIDI file(s)", files.len());
    Ok(files)
}
