use std::path::Path;
use std::time::Duration;

use lofty::prelude::*;

/// Fields read from a file's tag block and audio properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackMetadata {
    pub title: String,
    pub artist: Option<String>,
    pub genre: Option<String>,
    pub album: Option<String>,
    pub duration: Option<Duration>,
}

fn non_blank(v: Option<std::borrow::Cow<'_, str>>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Read tag metadata from `path`.
///
/// Files lofty cannot parse (or that carry no tag) still yield a result: the
/// title falls back to the file stem and every other field stays `None`.
pub fn read_metadata(path: &Path) -> TrackMetadata {
    let mut meta = TrackMetadata {
        title: path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string(),
        ..TrackMetadata::default()
    };

    let tagged = match lofty::read_from_path(path) {
        Ok(tagged) => tagged,
        Err(e) => {
            tracing::debug!("no readable tags in {}: {e}", path.display());
            return meta;
        }
    };

    let duration = tagged.properties().duration();
    if !duration.is_zero() {
        meta.duration = Some(duration);
    }

    if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
        if let Some(title) = non_blank(tag.title()) {
            meta.title = title;
        }
        meta.artist = non_blank(tag.artist());
        meta.genre = non_blank(tag.genre());
        meta.album = non_blank(tag.album());
    }

    meta
}
