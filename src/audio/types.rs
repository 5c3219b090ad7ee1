//! Audio-related small types.
//!
//! Playback state, transport commands and the playback error type.

use std::io;
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// The playback state of the player.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackStatus {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// A key press translated into a transport action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransportCmd {
    /// Toggle pause/resume.
    TogglePause,
    /// Stop playback and return to the menu.
    Stop,
    /// Seek forward by the configured step.
    SeekForward,
    /// Seek backward by the configured step.
    SeekBackward,
    VolumeUp,
    VolumeDown,
    /// Stop and play the next track in the list.
    Next,
    /// Stop and play the previous track in the list.
    Prev,
}

impl TransportCmd {
    /// Map a terminal key event to a transport command. Releases and repeats are ignored.
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('d') => Some(Self::Stop),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Char(' ') | KeyCode::Char('p') => Some(Self::TogglePause),
            KeyCode::Char('s') | KeyCode::Char('q') | KeyCode::Enter | KeyCode::Esc => {
                Some(Self::Stop)
            }
            KeyCode::Right | KeyCode::Char('l') => Some(Self::SeekForward),
            KeyCode::Left | KeyCode::Char('h') => Some(Self::SeekBackward),
            KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => Some(Self::VolumeUp),
            KeyCode::Down | KeyCode::Char('-') => Some(Self::VolumeDown),
            KeyCode::Char('n') => Some(Self::Next),
            KeyCode::Char('b') => Some(Self::Prev),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("no audio output device: {0}")]
    NoDevice(#[from] rodio::StreamError),

    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}
