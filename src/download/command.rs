use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, SystemTime};

use crate::config::{DownloadSettings, LibrarySettings};

use super::DownloadError;
use super::detect::{DirSnapshot, detect_new_file};

/// What the user asked for: a song title and (optionally) its artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub title: String,
    pub artist: String,
}

impl DownloadRequest {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }

    /// Search text handed to the downloader: `"<title> <artist>"`.
    pub fn query(&self) -> String {
        let title = self.title.trim();
        let artist = self.artist.trim();
        if artist.is_empty() {
            title.to_string()
        } else {
            format!("{title} {artist}")
        }
    }
}

pub struct Downloader {
    settings: DownloadSettings,
    library: LibrarySettings,
}

impl Downloader {
    pub fn new(settings: DownloadSettings, library: LibrarySettings) -> Self {
        Self { settings, library }
    }

    /// Build the downloader invocation for `request`.
    ///
    /// Arguments are passed directly to the process, never through a shell.
    pub fn command(&self, request: &DownloadRequest) -> Command {
        let output = self.library.dir.join(&self.settings.output_template);
        let search = format!("{}:{}", self.settings.search_prefix, request.query());

        let mut cmd = Command::new(&self.settings.program);
        cmd.arg("-x")
            .arg("--audio-format")
            .arg(&self.settings.audio_format)
            .arg("-o")
            .arg(output)
            .args(&self.settings.extra_args)
            .arg(search);
        cmd
    }

    /// Run the downloader and return the path of the file it produced.
    pub fn fetch(&self, request: &DownloadRequest) -> Result<PathBuf, DownloadError> {
        if request.title.trim().is_empty() {
            return Err(DownloadError::EmptyQuery);
        }

        std::fs::create_dir_all(&self.library.dir)?;
        let before = DirSnapshot::capture(&self.library.dir, &self.library);
        // Coarse filesystem clocks can stamp the new file slightly before "now".
        let started_at = SystemTime::now()
            .checked_sub(Duration::from_secs(2))
            .unwrap_or(SystemTime::UNIX_EPOCH);

        let mut cmd = self.command(request);
        tracing::debug!("running {:?}", cmd);
        tracing::info!("downloading \"{}\"", request.query());

        let status = cmd
            .stdin(Stdio::null())
            .status()
            .map_err(|source| DownloadError::Spawn {
                program: self.settings.program.clone(),
                source,
            })?;

        if !status.success() {
            tracing::warn!("{} exited with {status}", self.settings.program);
            return Err(DownloadError::Failed {
                program: self.settings.program.clone(),
                status,
            });
        }

        if self.settings.settle_ms > 0 {
            thread::sleep(Duration::from_millis(self.settings.settle_ms));
        }

        let path = detect_new_file(&before, &self.library.dir, &self.library, started_at)
            .ok_or_else(|| DownloadError::NoNewFile(self.library.dir.clone()))?;
        tracing::info!("downloaded {}", path.display());
        Ok(path)
    }
}
