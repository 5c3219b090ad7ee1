//! Text rendering for the menu, the track list and the playback status line.

use std::time::Duration;

use crate::audio::PlaybackStatus;
use crate::config::UiSettings;
use crate::library::{Track, artist_or_unknown, format_duration};
use crate::tracklist::Entry;

pub const MENU: &str = "\n--- TUNEDECK ---\n\
1. List tracks\n\
2. Play a track\n\
3. Delete a track\n\
4. Add a new track (download)\n\
5. Search tracks\n\
6. Rescan music folder\n\
0. Quit\n";

const CONTROLS: [(&str, &str); 5] = [
    ("space/p", "pause"),
    ("left/right", "seek"),
    ("up/down", "volume"),
    ("n/b", "next/prev"),
    ("s/q/enter", "stop"),
];

/// Render the transport help line, incorporating the seek step.
pub fn controls_text(seek_seconds: u64) -> String {
    CONTROLS
        .iter()
        .map(|(keys, action)| {
            if *action == "seek" {
                format!("[{keys}] seek -/+{seek_seconds}s")
            } else {
                format!("[{keys}] {action}")
            }
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

/// One line of the track listing: `id - title | artist | genre | m:ss`.
pub fn track_row(entry: &Entry, ui: &UiSettings) -> String {
    let t = &entry.track;
    let mut parts = vec![
        format!("{} - {}", entry.id, t.title),
        artist_or_unknown(t.artist.as_deref()).to_string(),
        t.genre.clone().unwrap_or_else(|| "-".to_string()),
        format_duration(t.duration),
    ];
    if ui.show_path {
        parts.push(t.path.display().to_string());
    }
    parts.join(&ui.list_separator)
}

/// `Artist - Title`, or just the title when the artist is unknown.
pub fn track_label(track: &Track) -> String {
    match track.artist.as_deref().map(str::trim) {
        Some(a) if !a.is_empty() => format!("{a} - {}", track.title),
        _ => track.title.clone(),
    }
}

/// The single status line redrawn while a track plays.
pub fn status_line(
    track: &Track,
    status: PlaybackStatus,
    elapsed: Duration,
    volume: f32,
) -> String {
    let icon = match status {
        PlaybackStatus::Playing => "▶",
        PlaybackStatus::Paused => "⏸",
        PlaybackStatus::Stopped => "■",
    };
    let album = track
        .album
        .as_deref()
        .map(|a| format!(" [{a}]"))
        .unwrap_or_default();
    format!(
        "{icon} {}{album}  {} / {}  vol {:.0}%",
        track_label(track),
        format_duration(Some(elapsed)),
        format_duration(track.duration),
        volume * 100.0
    )
}
