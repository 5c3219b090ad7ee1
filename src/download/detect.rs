use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::config::LibrarySettings;
use crate::library::audio_paths;

/// Audio files present in a folder, with their modification times.
#[derive(Debug, Clone, Default)]
pub struct DirSnapshot {
    files: HashMap<PathBuf, Option<SystemTime>>,
}

fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

impl DirSnapshot {
    pub fn capture(dir: &Path, settings: &LibrarySettings) -> Self {
        let files = audio_paths(dir, settings)
            .into_iter()
            .map(|p| {
                let mtime = modified(&p);
                (p, mtime)
            })
            .collect();
        Self { files }
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}

fn newest<'a>(
    candidates: impl Iterator<Item = (&'a PathBuf, &'a Option<SystemTime>)>,
) -> Option<PathBuf> {
    candidates
        .max_by_key(|(_, mtime)| **mtime)
        .map(|(p, _)| p.clone())
}

/// Find the file a download produced in `dir`.
///
/// Files missing from `before` win; among several, the newest one. When nothing
/// is new, the newest file modified at or after `started_at` is taken (the
/// downloader may overwrite an existing name).
pub fn detect_new_file(
    before: &DirSnapshot,
    dir: &Path,
    settings: &LibrarySettings,
    started_at: SystemTime,
) -> Option<PathBuf> {
    let after = DirSnapshot::capture(dir, settings);

    let fresh = after.files.iter().filter(|(p, _)| !before.contains(p));
    if let Some(path) = newest(fresh) {
        tracing::debug!("new file after download: {}", path.display());
        return Some(path);
    }

    let touched = after
        .files
        .iter()
        .filter(|(_, mtime)| mtime.is_some_and(|t| t >= started_at));
    let path = newest(touched);
    if let Some(ref p) = path {
        tracing::debug!("no new file; newest rewritten file is {}", p.display());
    }
    path
}
