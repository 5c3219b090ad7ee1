//! Fetching new tracks with an external downloader (yt-dlp by default).
//!
//! The downloader is run as a child process; the file it produced is found
//! afterwards by comparing the music folder against a snapshot taken before
//! the run.

mod command;
mod detect;

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

pub use command::{DownloadRequest, Downloader};

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("a song title is required")]
    EmptyQuery,

    #[error("could not start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{program}` exited with {status}")]
    Failed { program: String, status: ExitStatus },

    #[error("the download finished but no new audio file appeared in {}", .0.display())]
    NoNewFile(PathBuf),

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests;
