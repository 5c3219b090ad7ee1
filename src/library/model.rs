use std::path::{Path, PathBuf};
use std::time::Duration;

use super::metadata::read_metadata;

#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub path: PathBuf,
    pub title: String,
    pub artist: Option<String>,
    pub genre: Option<String>,
    pub album: Option<String>,
    pub duration: Option<Duration>,
}

impl Track {
    /// Build a track from the file at `path`, reading whatever tags it carries.
    pub fn from_path(path: &Path) -> Self {
        let meta = read_metadata(path);
        Self {
            path: path.to_path_buf(),
            title: meta.title,
            artist: meta.artist,
            genre: meta.genre,
            album: meta.album,
            duration: meta.duration,
        }
    }

    /// Fill artist/title from user input where the file carried no tag.
    pub fn with_fallbacks(mut self, title: &str, artist: &str) -> Self {
        let stem_title = self
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem == self.title);
        if stem_title && !title.trim().is_empty() {
            self.title = title.trim().to_string();
        }
        if self.artist.is_none() && !artist.trim().is_empty() {
            self.artist = Some(artist.trim().to_string());
        }
        self
    }
}
