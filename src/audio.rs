//! Audio playback: a single-track `rodio` player with transport controls.

mod clock;
mod player;
mod sink;
mod types;

pub use player::Player;
pub use types::{PlaybackStatus, TransportCmd};

#[cfg(test)]
mod tests;
