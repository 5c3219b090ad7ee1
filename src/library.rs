//! Music folder scanning and the `Track` model.
//!
//! Tracks are built from files on disk; tag metadata (title, artist, genre,
//! album, duration) is read with `lofty`.

mod display;
mod metadata;
mod model;
mod scan;

pub use display::{artist_or_unknown, format_duration};
pub use model::Track;
pub use scan::{ScanError, scan};
pub(crate) use scan::audio_paths;
