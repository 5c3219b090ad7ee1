//! Application module: the menu session that drives the track list.
//!
//! `app::session` holds the `Session` type and the playback/download seams;
//! `app::menu` parses menu input and prompts.

mod menu;
mod session;

pub use session::*;
