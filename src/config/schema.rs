use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Upper bound for `playback.volume` and the volume keys.
pub const MAX_VOLUME: f32 = 2.0;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tunedeck/config.toml` or `~/.config/tunedeck/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TUNEDECK__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub download: DownloadSettings,
    pub playback: PlaybackSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Folder that holds the music files. Downloads land here too.
    pub dir: PathBuf,
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Optional cap on directory recursion depth (only used when `recursive`).
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("musica"),
            extensions: vec![
                "mp3".into(),
                "flac".into(),
                "wav".into(),
                "ogg".into(),
                "m4a".into(),
            ],
            recursive: false,
            include_hidden: false,
            follow_links: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DownloadSettings {
    /// Downloader executable, looked up on `PATH` unless absolute.
    pub program: String,
    /// Search scheme understood by the downloader, joined to the query with `:`.
    pub search_prefix: String,
    /// Audio format requested from the downloader (`--audio-format`).
    pub audio_format: String,
    /// Output file name template, relative to `library.dir`.
    pub output_template: String,
    /// Extra arguments inserted before the search query.
    pub extra_args: Vec<String>,
    /// Delay after the downloader exits before the folder is re-scanned (milliseconds).
    pub settle_ms: u64,
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            program: "yt-dlp".to_string(),
            search_prefix: "ytsearch".to_string(),
            audio_format: "mp3".to_string(),
            output_template: "%(title)s.%(ext)s".to_string(),
            extra_args: Vec::new(),
            settle_ms: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Initial volume (1.0 = unchanged).
    pub volume: f32,
    /// Amount added/removed by the volume keys.
    pub volume_step: f32,
    /// Number of seconds to seek when pressing left / right.
    pub seek_seconds: u64,
    /// When enabled, next/previous pick a random track instead of the neighbor.
    pub shuffle: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            volume: 1.0,
            volume_step: 0.1,
            seek_seconds: 5,
            shuffle: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// Separator between the columns of a listed track.
    pub list_separator: String,
    /// Append the file path to each listed track.
    pub show_path: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            list_separator: " | ".to_string(),
            show_path: false,
        }
    }
}
