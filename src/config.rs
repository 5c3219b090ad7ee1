//! Player settings.
//!
//! `schema` holds the typed sections (`library`, `download`, `playback`, `ui`);
//! `load` merges defaults, an optional TOML file and `TUNEDECK__*` environment
//! variables into a `Settings` value.

mod load;
mod schema;

pub use schema::*;
